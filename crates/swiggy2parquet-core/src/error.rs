//! Error types for review decoding and encoding

use thiserror::Error;

/// Errors raised while turning raw CSV rows into Parquet bytes.
///
/// Row numbers are 1-based and count data rows only (the header is row 0).
#[derive(Debug, Error)]
pub enum TransformError {
    /// The CSV structure itself is broken (unbalanced quotes, ragged rows, bad UTF-8)
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A required source column is absent from the header
    #[error("missing required column '{column}' in CSV header")]
    MissingColumn { column: &'static str },

    /// A timestamp did not match `YYYY-MM-DD HH:MM:SS`
    #[error(
        "row {row}: column '{column}' has invalid timestamp '{value}' \
         (expected YYYY-MM-DD HH:MM:SS)"
    )]
    InvalidTimestamp {
        row: usize,
        column: &'static str,
        value: String,
    },

    /// An integer column was non-numeric or outside its target range
    #[error("row {row}: column '{column}' value '{value}' is not a valid {target}")]
    InvalidInteger {
        row: usize,
        column: &'static str,
        value: String,
        target: &'static str,
    },

    /// Arrow rejected the assembled columns
    #[error("failed to build record batch: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    /// Parquet serialization failed
    #[error("failed to encode parquet: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    /// Nothing to encode
    #[error("cannot encode an empty partition")]
    EmptyPartition,
}

impl TransformError {
    /// True for errors caused by the content of the input file.
    ///
    /// An I/O failure while the CSV reader pulls bytes is not a content problem.
    pub fn is_parse_error(&self) -> bool {
        match self {
            Self::Csv(e) => !e.is_io_error(),
            Self::MissingColumn { .. }
            | Self::InvalidTimestamp { .. }
            | Self::InvalidInteger { .. } => true,
            Self::Arrow(_) | Self::Parquet(_) | Self::EmptyPartition => false,
        }
    }
}

/// Result type alias for TransformError
pub type Result<T> = std::result::Result<T, TransformError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_io_error_is_not_a_parse_error() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "read failed");
        let err = TransformError::from(csv::Error::from(io));
        assert!(!err.is_parse_error());
    }

    #[test]
    fn test_content_errors_are_parse_errors() {
        assert!(TransformError::MissingColumn { column: "at" }.is_parse_error());
        assert!(TransformError::InvalidInteger {
            row: 1,
            column: "score",
            value: "x".to_string(),
            target: "8-bit signed integer",
        }
        .is_parse_error());
        assert!(!TransformError::EmptyPartition.is_parse_error());
    }
}
