//! Error types for tcsort.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SortError {
    #[error("{table} table does not contain the '{column}' column")]
    MissingColumn { table: String, column: String },

    #[error("row {row}: invalid {field} value '{value}' (expected High, Medium or Low)")]
    InvalidField {
        row: usize,
        field: String,
        value: String,
    },

    #[error("Unsupported table format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("Workbook error: {0}")]
    Workbook(String),

    #[error("Spreadsheet writer error: {0}")]
    Xlsx(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl SortError {
    pub fn missing_column(table: &str, column: &str) -> Self {
        SortError::MissingColumn {
            table: table.to_string(),
            column: column.to_string(),
        }
    }

    /// Stable short code, used in JSON output and logs
    pub fn code(&self) -> &'static str {
        match self {
            SortError::MissingColumn { .. } => "missing_column",
            SortError::InvalidField { .. } => "invalid_field",
            SortError::UnsupportedFormat(_) => "unsupported_format",
            SortError::Workbook(_) => "workbook",
            SortError::Xlsx(_) => "xlsx",
            SortError::Csv(_) => "csv",
            SortError::Io(_) => "io",
            SortError::Config(_) => "config",
        }
    }

    /// True when the failure is caused by the input tables rather than the environment
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            SortError::MissingColumn { .. }
                | SortError::InvalidField { .. }
                | SortError::UnsupportedFormat(_)
        )
    }
}

impl From<calamine::Error> for SortError {
    fn from(e: calamine::Error) -> Self {
        SortError::Workbook(e.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for SortError {
    fn from(e: rust_xlsxwriter::XlsxError) -> Self {
        SortError::Xlsx(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SortError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_column_message_names_column() {
        let err = SortError::missing_column("Input", "Test Steps");
        assert_eq!(err.code(), "missing_column");
        assert!(err.to_string().contains("'Test Steps'"));
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_io_is_not_invalid_input() {
        let err = SortError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(err.code(), "io");
        assert!(!err.is_invalid_input());
    }
}
