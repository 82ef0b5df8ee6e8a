//! Error types for the conversion run

use std::path::PathBuf;
use swiggy2parquet_core::TransformError;
use thiserror::Error;

/// Error codes for programmatic handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// E001: Input file missing or unreadable
    E001InputMissing,
    /// E002: Input content failed to parse
    E002ParseFailure,
    /// E003: Filesystem write failed
    E003WriteFailure,
    /// E004: Configuration missing or invalid
    E004InvalidConfig,
    /// E005: Arrow/Parquet encoding failed
    E005EncodeFailure,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::E001InputMissing => "E001",
            Self::E002ParseFailure => "E002",
            Self::E003WriteFailure => "E003",
            Self::E004InvalidConfig => "E004",
            Self::E005EncodeFailure => "E005",
        }
    }
}

/// Errors that abort a conversion run
#[derive(Debug, Error)]
pub enum WriterError {
    /// Source file absent; raised before anything is written
    #[error("[{code}] Input file not found: {path}")]
    InputMissing { code: &'static str, path: PathBuf },

    /// Source file exists but could not be opened
    #[error("[{code}] Failed to open input '{path}': {source}")]
    InputUnreadable {
        code: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV reader hit an I/O failure part way through the input
    #[error("[{code}] Failed to read input '{path}': {source}")]
    InputRead {
        code: &'static str,
        path: PathBuf,
        #[source]
        source: TransformError,
    },

    /// A row or the header could not be converted
    #[error("[{code}] Failed to parse '{path}': {source}")]
    Parse {
        code: &'static str,
        path: PathBuf,
        #[source]
        source: TransformError,
    },

    /// Directory creation, file write or rename failed
    #[error("[{code}] Write operation failed for '{path}': {source}")]
    WriteFailure {
        code: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration provided
    #[error("[{code}] Invalid configuration: {message}")]
    InvalidConfig { code: &'static str, message: String },

    /// Arrow batch building or Parquet encoding failed
    #[error("[{code}] Failed to encode {target}: {source}")]
    Encode {
        code: &'static str,
        target: String,
        #[source]
        source: TransformError,
    },
}

impl WriterError {
    pub fn input_missing(path: impl Into<PathBuf>) -> Self {
        Self::InputMissing {
            code: ErrorCode::E001InputMissing.as_str(),
            path: path.into(),
        }
    }

    pub fn input_unreadable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::InputUnreadable {
            code: ErrorCode::E001InputMissing.as_str(),
            path: path.into(),
            source,
        }
    }

    pub fn input_read(path: impl Into<PathBuf>, source: TransformError) -> Self {
        Self::InputRead {
            code: ErrorCode::E001InputMissing.as_str(),
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: TransformError) -> Self {
        Self::Parse {
            code: ErrorCode::E002ParseFailure.as_str(),
            path: path.into(),
            source,
        }
    }

    pub fn write_failure(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteFailure {
            code: ErrorCode::E003WriteFailure.as_str(),
            path: path.into(),
            source,
        }
    }

    pub fn invalid_config(message: String) -> Self {
        Self::InvalidConfig {
            code: ErrorCode::E004InvalidConfig.as_str(),
            message,
        }
    }

    pub fn encode(target: impl Into<String>, source: TransformError) -> Self {
        Self::Encode {
            code: ErrorCode::E005EncodeFailure.as_str(),
            target: target.into(),
            source,
        }
    }

    /// Stable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            Self::InputMissing { code, .. }
            | Self::InputUnreadable { code, .. }
            | Self::InputRead { code, .. }
            | Self::Parse { code, .. }
            | Self::WriteFailure { code, .. }
            | Self::InvalidConfig { code, .. }
            | Self::Encode { code, .. } => *code,
        }
    }
}

/// Result type alias for WriterError
pub type Result<T> = std::result::Result<T, WriterError>;
