//! Error types for export ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a Deckbox export.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Export file not found.
    #[error("export file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to open or read the export file.
    #[error("failed to read export {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The underlying CSV parser rejected the file.
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Two distinct headers normalized to the same column key.
    #[error("duplicate column key '{key}' after header normalization")]
    DuplicateKey { key: String },

    /// A data row does not match the header's field count.
    #[error("row at line {line} has {found} fields, expected {expected}")]
    RowShape {
        line: u64,
        expected: usize,
        found: usize,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::DuplicateKey {
            key: "cardnumber".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "duplicate column key 'cardnumber' after header normalization"
        );

        let err = IngestError::RowShape {
            line: 7,
            expected: 5,
            found: 3,
        };
        assert_eq!(err.to_string(), "row at line 7 has 3 fields, expected 5");
    }
}
