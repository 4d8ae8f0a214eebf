//! Error types and exit codes for metafill
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (I/O and similar)
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (post not found)

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - post not found, unreadable posts directory (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during metafill operations
#[derive(Error, Debug)]
#[allow(dead_code)]
pub enum MetafillError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("--format may only be specified once")]
    DuplicateFormat,

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("post not found: {name}")]
    PostNotFound { name: String },

    #[error("posts directory not found: {path:?}")]
    PostsDirNotFound { path: PathBuf },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl MetafillError {
    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            // Usage errors
            MetafillError::UnknownFormat(_)
            | MetafillError::DuplicateFormat
            | MetafillError::UsageError(_) => ExitCode::Usage,

            // Data errors
            MetafillError::PostNotFound { .. } | MetafillError::PostsDirNotFound { .. } => {
                ExitCode::Data
            }

            // Generic failures
            MetafillError::Io(_)
            | MetafillError::Json(_)
            | MetafillError::Toml(_)
            | MetafillError::Other(_) => ExitCode::Failure,
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            MetafillError::UnknownFormat(_) => "unknown_format",
            MetafillError::DuplicateFormat => "duplicate_format",
            MetafillError::UsageError(_) => "usage_error",
            MetafillError::PostNotFound { .. } => "post_not_found",
            MetafillError::PostsDirNotFound { .. } => "posts_dir_not_found",
            MetafillError::Io(_) => "io_error",
            MetafillError::Json(_) => "json_error",
            MetafillError::Toml(_) => "toml_error",
            MetafillError::Other(_) => "other",
        }
    }
}

/// Result type alias for metafill operations
pub type Result<T> = std::result::Result<T, MetafillError>;
