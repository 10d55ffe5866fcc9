//! Error types for taskdeck
//!
//! Exit codes, shared by both binaries:
//! - 0: Success
//! - 1: Input error (non-numeric recommendation count, missing subcommand)
//! - 2: Validation error (empty title/name, malformed date, oversized category)
//! - 3: Unknown user
//! - 4: Unknown task for a user
//! - 5: Storage failure (unreadable or malformed store file)

use thiserror::Error;

/// Exit codes for the taskdeck CLIs
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const INPUT_ERROR: i32 = 1;
    pub const VALIDATION_ERROR: i32 = 2;
    pub const USER_NOT_FOUND: i32 = 3;
    pub const TASK_NOT_FOUND: i32 = 4;
    pub const STORAGE_ERROR: i32 = 5;
}

/// Main error type for taskdeck operations
#[derive(Error, Debug)]
pub enum Error {
    // Input errors (exit code 1)
    #[error("invalid count {0:?}; provide a non-negative integer number of tasks to recommend")]
    InvalidCount(String),

    // Validation errors (exit code 2)
    #[error("title must be non-empty")]
    EmptyTitle,

    #[error("display_name must be non-empty")]
    EmptyDisplayName,

    #[error("due_date must be ISO YYYY-MM-DD")]
    InvalidDueDate(String),

    #[error("category too long")]
    CategoryTooLong(usize),

    // Not-found errors (exit codes 3 and 4)
    #[error("user-not-found")]
    UserNotFound(String),

    #[error("task-not-found")]
    TaskNotFound(String),

    // Storage failures (exit code 5)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed store file: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            // Input errors
            Error::InvalidCount(_) => exit_codes::INPUT_ERROR,

            // Validation errors
            Error::EmptyTitle
            | Error::EmptyDisplayName
            | Error::InvalidDueDate(_)
            | Error::CategoryTooLong(_) => exit_codes::VALIDATION_ERROR,

            // Not-found errors
            Error::UserNotFound(_) => exit_codes::USER_NOT_FOUND,
            Error::TaskNotFound(_) => exit_codes::TASK_NOT_FOUND,

            // Storage failures
            Error::Io(_) | Error::Json(_) => exit_codes::STORAGE_ERROR,
        }
    }
}

/// Result type alias for taskdeck operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_map_correctly() {
        assert_eq!(
            Error::InvalidCount("x".to_string()).exit_code(),
            exit_codes::INPUT_ERROR
        );
        assert_eq!(Error::EmptyTitle.exit_code(), exit_codes::VALIDATION_ERROR);
        assert_eq!(
            Error::InvalidDueDate("2025-13-01".to_string()).exit_code(),
            exit_codes::VALIDATION_ERROR
        );
        assert_eq!(
            Error::UserNotFound("abc".to_string()).exit_code(),
            exit_codes::USER_NOT_FOUND
        );
        assert_eq!(
            Error::TaskNotFound("def".to_string()).exit_code(),
            exit_codes::TASK_NOT_FOUND
        );
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(Error::from(parse_err).exit_code(), exit_codes::STORAGE_ERROR);
    }

    #[test]
    fn not_found_messages_are_bare_tokens() {
        assert_eq!(
            Error::UserNotFound("abc".to_string()).to_string(),
            "user-not-found"
        );
        assert_eq!(
            Error::TaskNotFound("def".to_string()).to_string(),
            "task-not-found"
        );
    }
}
