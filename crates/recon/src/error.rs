use std::fmt;

use crate::model::Side;

#[derive(Debug)]
pub enum ReconError {
    /// TOML parse / deserialization error.
    ConfigParse(String),
    /// Config validation error (empty file path, absurd window, etc.).
    ConfigValidation(String),
    /// Missing required column in input data. Raised before any row parsing.
    MissingColumn { side: Side, column: String },
    /// Date parse error. `row` is the zero-based data row index.
    DateParse { side: Side, row: usize, value: String },
    /// Amount parse error. `row` is the zero-based data row index.
    AmountParse { side: Side, row: usize, value: String },
    /// IO error (CSV read/write, etc.).
    Io(String),
}

impl fmt::Display for ReconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigParse(msg) => write!(f, "config parse error: {msg}"),
            Self::ConfigValidation(msg) => write!(f, "config validation error: {msg}"),
            Self::MissingColumn { side, column } => {
                write!(f, "{side} input: missing column '{column}'")
            }
            Self::DateParse { side, row, value } => {
                write!(f, "{side} row {row}: cannot parse date '{value}'")
            }
            Self::AmountParse { side, row, value } => {
                write!(f, "{side} row {row}: cannot parse amount '{value}'")
            }
            Self::Io(msg) => write!(f, "IO error: {msg}"),
        }
    }
}

impl std::error::Error for ReconError {}
