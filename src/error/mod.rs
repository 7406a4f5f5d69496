// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for the rclint application.
//!
//! Rule predicates never fail: a violation is a verdict, not an error.
//! The types here cover everything around them, such as loading the
//! configuration, reading the message and reporting a failed lint.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for rclint operations.
#[derive(Error, Debug)]
pub enum RcError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Commit message errors
    #[error("Commit error: {0}")]
    Commit(#[from] CommitError),

    // Lint outcome
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Unknown preset in 'extends': {name}")]
    UnknownPreset { name: String },

    #[error("Unknown plugin: {name}")]
    UnknownPlugin { name: String },

    #[error("Found invalid rule name: {name}")]
    UnknownRule { name: String },

    #[error("Invalid value for rule '{rule}': {message}")]
    InvalidRuleValue { rule: String, message: String },

    #[error("Configuration file already exists: {path}")]
    AlreadyExists { path: PathBuf },
}

/// Commit message errors.
#[derive(Error, Debug)]
pub enum CommitError {
    #[error("Empty commit message")]
    EmptyMessage,
}

/// Lint outcome errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("found {errors} problems, {warnings} warnings")]
    LintFailed { errors: usize, warnings: usize },
}

/// Result type alias for rclint operations.
pub type Result<T> = std::result::Result<T, RcError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| RcError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::NotFound {
            path: PathBuf::from("/path/to/rclint.toml"),
        };
        assert!(err.to_string().contains("/path/to/rclint.toml"));
    }

    #[test]
    fn test_unknown_rule_display() {
        let err = ConfigError::UnknownRule {
            name: "issue-trailer".to_string(),
        };
        assert_eq!(err.to_string(), "Found invalid rule name: issue-trailer");
    }

    #[test]
    fn test_rc_error_from_config_error() {
        let config_err = ConfigError::UnknownPlugin {
            name: "jira".to_string(),
        };
        let rc_err: RcError = config_err.into();
        assert!(rc_err.to_string().contains("jira"));
    }

    #[test]
    fn test_rc_error_from_io_error() {
        fn read() -> Result<String> {
            Ok(std::fs::read_to_string("/nonexistent/COMMIT_EDITMSG")?)
        }
        let err = read().unwrap_err();
        assert!(matches!(err, RcError::Io(_)));
        assert!(err.to_string().starts_with("IO error: "));
    }

    #[test]
    fn test_lint_failed_display() {
        let err = ValidationError::LintFailed {
            errors: 2,
            warnings: 1,
        };
        assert_eq!(err.to_string(), "found 2 problems, 1 warnings");
    }

    #[test]
    fn test_result_ext_context() {
        let io: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        let err = io.context("read message").unwrap_err();
        assert_eq!(err.to_string(), "read message: missing");
    }
}
