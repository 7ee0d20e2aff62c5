use serde::Serialize;
use thiserror::Error;

/// Why a matched record was left out of the parsed list.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
pub enum SkipReason {
    #[error("invalid {field} value '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    #[error("invalid date '{0}'")]
    InvalidDate(String),

    #[error("unknown side marker '{0}'")]
    UnknownSide(String),

    #[error("order filled {filled}/{ordered} without a Successful status")]
    PartialFill {
        filled: u64,
        ordered: u64,
        status: Option<String>,
    },

    #[error("unexpected text after rate: '{0}'")]
    MalformedTail(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedRecord {
    pub offset: usize,
    pub date: String,
    pub company: String,
    pub reason: SkipReason,
}

/// Counters and skip reasons collected during one parse.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParseDiagnostics {
    pub matched: usize,
    pub retained: usize,
    pub skipped: Vec<SkippedRecord>,
}

impl ParseDiagnostics {
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }

    /// Number of records skipped because they were only partially filled.
    pub fn partial_fills(&self) -> usize {
        self.skipped
            .iter()
            .filter(|s| matches!(s.reason, SkipReason::PartialFill { .. }))
            .count()
    }
}
