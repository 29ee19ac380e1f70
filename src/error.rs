//! Error types for the caption pipeline.
//!
//! Uses thiserror for derive macros. Every variant is fatal for the run; the
//! CLI boundary turns it into a message and an exit code.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for pipeline operations.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Structural problem: the config is not a mapping, the prompt table has
    /// no header row or lacks required columns, or the input is malformed.
    #[error("Format error: {0}")]
    FormatError(String),

    /// A single record is semantically invalid (blank title or hook).
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// Reading or writing a file failed.
    #[error("{0}")]
    Io(String),
}

impl PipelineError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            PipelineError::FormatError(_) => exit_codes::FORMAT_ERROR,
            PipelineError::ValidationError(_) => exit_codes::VALIDATION_FAILURE,
            PipelineError::Io(_) => exit_codes::IO_FAILURE,
        }
    }
}

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;
