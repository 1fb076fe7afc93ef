//! Boundary errors raised before or around the analytics engines.
//!
//! The engines never fail on sparse data. Everything here comes from record
//! validation, request validation, configuration and artefact I/O.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Detail carried by every [`RaeError`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Dotted machine readable code such as `case.score_out_of_range`.
    pub code: String,
    /// Diagnostic message for people.
    pub message: String,
    /// Offending identifiers and values, e.g. `caseId` or `count`.
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// What the caller can change to get past the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a payload with no context and no hint.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Records one context entry.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Attaches a remediation hint.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if !self.context.is_empty() {
            let pairs: Vec<String> = self
                .context
                .iter()
                .map(|(key, value)| format!("{key}={value}"))
                .collect();
            write!(f, " ({})", pairs.join(", "))?;
        }
        match &self.hint {
            Some(hint) => write!(f, "; hint: {hint}"),
            None => Ok(()),
        }
    }
}

/// Error type shared by every analytics crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum RaeError {
    /// A case or assignment record is malformed or out of range.
    #[error("invalid input {0}")]
    Input(ErrorInfo),
    /// A request parameter was rejected before an engine ran.
    #[error("rejected request {0}")]
    Validation(ErrorInfo),
    /// The engine configuration could not be read or is inconsistent.
    #[error("bad configuration {0}")]
    Config(ErrorInfo),
    /// Encoding, decoding or writing an artefact failed.
    #[error("serialization failure {0}")]
    Serde(ErrorInfo),
}

impl RaeError {
    /// Payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            RaeError::Input(info)
            | RaeError::Validation(info)
            | RaeError::Config(info)
            | RaeError::Serde(info) => info,
        }
    }

    /// Shorthand for `self.info().code`.
    pub fn code(&self) -> &str {
        &self.info().code
    }

    /// Family name as it appears in the serialized `family` tag.
    pub fn family(&self) -> &'static str {
        match self {
            RaeError::Input(_) => "Input",
            RaeError::Validation(_) => "Validation",
            RaeError::Config(_) => "Config",
            RaeError::Serde(_) => "Serde",
        }
    }
}
