//! Unified error types for tinyedit.
//!
//! Two tiers are used:
//!
//! - [`EditError`] is the closed set of recoverable failures. Each variant
//!   renders as the exact line shown to the user, and the command loop
//!   continues after printing it.
//! - Everything else travels as `anyhow::Error` through [`TinyResult`] and is
//!   fatal: `main` logs it and exits with status 1.
//!
//! ## Usage Examples
//!
//! Recoverable:
//! ```ignore
//! return Err(EditError::NotFound.into());
//! ```
//!
//! Fatal, with context:
//! ```ignore
//! std::env::current_dir().context("Error getting current directory")?;
//! ```

/// Result type alias using anyhow::Error.
pub type TinyResult<T> = anyhow::Result<T>;

/// Recoverable command failures, one per user-facing message.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    #[error("File not found.")]
    NotFound,
    #[error("Could not create the file.")]
    CreateFailed,
    #[error("Could not open the file for appending.")]
    OpenForAppendFailed,
    #[error("Error reading input.")]
    InputReadError,
    #[error("Unable to delete the file.")]
    RemoveFailed,
    #[error("Filename too long (max {0} characters).")]
    FilenameTooLong(usize),
    #[error("Invalid filename.")]
    InvalidFilename,
    #[error("Invalid command. Please use {0}.")]
    InvalidCommand(String),
    #[error("{0}")]
    StartupFailure(String),
}
