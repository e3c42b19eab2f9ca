//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`SceneGitError`] which provides comprehensive error handling
//! for all scenegit operations. It uses `thiserror` for ergonomic error definitions
//! and includes specialized error constructors for common failure scenarios.
//!
//! # Public API
//! - [`SceneGitError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, SceneGitError>`
//!
//! # Error Categories
//! - **Command failures**: the git binary ran and exited non-zero
//! - **Repository location**: no control directory found near the anchor file
//! - **Preconditions**: a mutating operation's business rule was violated
//!   before any command was issued
//! - **Validation**: user-supplied input failed a local check
//! - **Passthroughs**: I/O, UTF-8 and JSON serialization errors

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for scenegit
#[derive(Error, Debug)]
pub enum SceneGitError {
    /// The git binary ran and exited with a non-zero status.
    /// Never raised for preconditions; by the time this exists a
    /// process was actually spawned.
    #[error("git command failed (exit code {exit_code:?}): {stderr}")]
    CommandFailed {
        exit_code: Option<i32>,
        stderr: String,
    },

    /// No control directory was found within the bounded ascent from the
    /// anchor file's directory.
    #[error("No git repository found near '{anchor}'")]
    RepoNotFound { anchor: PathBuf },

    /// A mutating operation's business rule was violated. Raised before any
    /// command is issued, so no partial state change has occurred.
    #[error("Precondition failed: {reason}")]
    Precondition { reason: String },

    /// User-supplied input failed a local check. Same fail-fast guarantee as
    /// [`SceneGitError::Precondition`].
    #[error("Invalid input: {reason}")]
    Validation { reason: String },

    /// The host application refused or failed a document operation.
    #[error("Host operation failed: {reason}")]
    Host { reason: String },

    /// The git binary is not installed or not on PATH.
    #[error("git executable not found on PATH")]
    GitNotInstalled,

    /// A backgrounded operation's worker thread disappeared without
    /// delivering a result.
    #[error("Background task ended without reporting a result")]
    BackgroundTaskLost,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid UTF-8 in command output: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using SceneGitError
pub type Result<T> = std::result::Result<T, SceneGitError>;

impl SceneGitError {
    /// Create a command failure error from captured process output
    pub fn command_failed(exit_code: Option<i32>, stderr: impl Into<String>) -> Self {
        Self::CommandFailed {
            exit_code,
            stderr: stderr.into(),
        }
    }

    /// Create a repository-not-found error for a given anchor path
    pub fn repo_not_found(anchor: impl Into<PathBuf>) -> Self {
        Self::RepoNotFound {
            anchor: anchor.into(),
        }
    }

    /// Create a precondition error
    pub fn precondition(reason: impl Into<String>) -> Self {
        Self::Precondition {
            reason: reason.into(),
        }
    }

    /// Create a validation error
    pub fn validation(reason: impl Into<String>) -> Self {
        Self::Validation {
            reason: reason.into(),
        }
    }

    /// Create a host-failure error
    pub fn host(reason: impl Into<String>) -> Self {
        Self::Host {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_failed_display() {
        let err = SceneGitError::command_failed(Some(128), "fatal: not a git repository");
        let msg = err.to_string();
        assert!(msg.contains("128"));
        assert!(msg.contains("fatal: not a git repository"));
    }

    #[test]
    fn test_repo_not_found_display() {
        let err = SceneGitError::repo_not_found("/tmp/scene.blend");
        assert!(err.to_string().contains("/tmp/scene.blend"));
    }

    #[test]
    fn test_precondition_and_validation_are_distinct() {
        let pre = SceneGitError::precondition("working directory not clean");
        let val = SceneGitError::validation("commit message cannot be empty");
        assert!(matches!(pre, SceneGitError::Precondition { .. }));
        assert!(matches!(val, SceneGitError::Validation { .. }));
        assert!(pre.to_string().starts_with("Precondition failed"));
        assert!(val.to_string().starts_with("Invalid input"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: SceneGitError = io_err.into();
        assert!(matches!(err, SceneGitError::Io(_)));
    }
}
