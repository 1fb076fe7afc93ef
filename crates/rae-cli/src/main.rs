use std::process::ExitCode;

use clap::Parser;
use rae_cli::{run, telemetry, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();
    telemetry::init(cli.verbose);
    match run(&cli) {
        Ok(written) => {
            tracing::info!(path = %written.display(), "report written");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(family = err.family(), code = err.code(), "{err}");
            ExitCode::FAILURE
        }
    }
}
