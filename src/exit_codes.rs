//! Exit code constants for the caption-pipeline CLI.
//!
//! - 0: Success
//! - 1: I/O failure (unreadable input, unwritable output)
//! - 2: Format error (bad config shape, missing header or columns)
//! - 3: Validation failure (a prompt row is missing required fields)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// I/O failure: a file could not be read or written.
pub const IO_FAILURE: i32 = 1;

/// Format error: structural problem in the config or prompt table.
pub const FORMAT_ERROR: i32 = 2;

/// Validation failure: a prompt record has a blank required field.
pub const VALIDATION_FAILURE: i32 = 3;
