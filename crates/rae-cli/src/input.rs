use std::fs;
use std::path::Path;

use rae_core::{
    from_json_slice, hash_bytes, validate_cases, Case, CodingAssignment, ErrorInfo, RaeError,
};

/// Records read from an input file with the hash of its raw bytes.
#[derive(Debug, Clone)]
pub struct Loaded<T> {
    pub records: Vec<T>,
    pub input_hash: String,
}

fn read_bytes(path: &Path) -> Result<Vec<u8>, RaeError> {
    fs::read(path).map_err(|err| {
        RaeError::Serde(
            ErrorInfo::new("input.read", err.to_string())
                .with_context("path", path.display().to_string()),
        )
    })
}

/// Loads and validates cases from a JSON array or a CSV table.
pub fn load_cases(path: &Path) -> Result<Loaded<Case>, RaeError> {
    let bytes = read_bytes(path)?;
    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    let records = if is_csv {
        cases_from_csv(&bytes)?
    } else {
        from_json_slice(&bytes)?
    };
    validate_cases(&records)?;
    tracing::debug!(cases = records.len(), path = %path.display(), "cases loaded");
    Ok(Loaded {
        records,
        input_hash: hash_bytes(&bytes),
    })
}

/// Loads coding assignments from a JSON array.
pub fn load_assignments(path: &Path) -> Result<Loaded<CodingAssignment>, RaeError> {
    let bytes = read_bytes(path)?;
    let records: Vec<CodingAssignment> = from_json_slice(&bytes)?;
    tracing::debug!(assignments = records.len(), path = %path.display(), "assignments loaded");
    Ok(Loaded {
        records,
        input_hash: hash_bytes(&bytes),
    })
}

fn csv_error(err: csv::Error) -> RaeError {
    RaeError::Input(ErrorInfo::new("input.csv_parse", err.to_string()))
}

/// Parses `caseId, overallScore, country, sector, size` plus one column per
/// domain. Empty cells are missing values.
pub fn cases_from_csv(bytes: &[u8]) -> Result<Vec<Case>, RaeError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(bytes);
    let headers = reader.headers().map_err(csv_error)?.clone();
    if !headers.iter().any(|header| header == "caseId") {
        return Err(RaeError::Input(
            ErrorInfo::new("input.csv_missing_case_id", "CSV header has no caseId column")
                .with_hint("the first row must name the columns"),
        ));
    }

    let mut cases = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record.map_err(csv_error)?;
        let mut case = Case::new("");
        for (header, cell) in headers.iter().zip(record.iter()) {
            if cell.is_empty() {
                continue;
            }
            match header {
                "caseId" => case.case_id = cell.to_string(),
                "overallScore" => case.overall_score = Some(parse_score(cell, row, header)?),
                "country" => case.context.country = Some(cell.to_string()),
                "sector" => case.context.sector = Some(cell.to_string()),
                "size" => case.context.size = Some(cell.to_string()),
                domain => {
                    let score = parse_score(cell, row, domain)?;
                    case.domain_scores.insert(domain.to_string(), score);
                }
            }
        }
        cases.push(case);
    }
    Ok(cases)
}

fn parse_score(cell: &str, row: usize, column: &str) -> Result<f64, RaeError> {
    cell.parse::<f64>().map_err(|err| {
        RaeError::Input(
            ErrorInfo::new("input.csv_score", err.to_string())
                .with_context("row", (row + 1).to_string())
                .with_context("column", column)
                .with_context("value", cell),
        )
    })
}
