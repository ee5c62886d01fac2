//! Error types for environment setup operations.
//!
//! This module defines [`SetupError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Check failures (unsupported version, missing tool) are normally reported
//!   as data through [`CheckResult`](crate::requirements::CheckResult); the
//!   variants here exist for callers that want to turn them into errors
//! - Probe failures degrade to "version unknown" and are logged, not returned
//! - Use `anyhow::Error` (via `SetupError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for setup and preflight operations.
#[derive(Debug, Error)]
pub enum SetupError {
    /// Runtime version outside the supported range.
    #[error("Unsupported Python version {version}: {message}")]
    UnsupportedVersion { version: String, message: String },

    /// The external tool was not found on PATH.
    #[error("Required tool '{tool}' is not installed or not in PATH")]
    ToolMissing { tool: String },

    /// Querying a tool for its version failed.
    #[error("Failed to run '{command}': {message}")]
    ProbeExecutionFailure { command: String, message: String },

    /// No Python interpreter could be located.
    #[error("Python interpreter not found (looked for {candidates})")]
    InterpreterNotFound { candidates: String },

    /// An install command exited unsuccessfully.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// Explicitly configured interpreter path does not exist.
    #[error("Configured interpreter does not exist: {path}")]
    InterpreterPathInvalid { path: PathBuf },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for setup operations.
pub type Result<T> = std::result::Result<T, SetupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_version_displays_version_and_message() {
        let err = SetupError::UnsupportedVersion {
            version: "3.12.0".into(),
            message: "too new".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("3.12.0"));
        assert!(msg.contains("too new"));
    }

    #[test]
    fn tool_missing_displays_tool() {
        let err = SetupError::ToolMissing { tool: "uv".into() };
        assert!(err.to_string().contains("'uv'"));
    }

    #[test]
    fn probe_failure_displays_command_and_message() {
        let err = SetupError::ProbeExecutionFailure {
            command: "uv --version".into(),
            message: "permission denied".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("uv --version"));
        assert!(msg.contains("permission denied"));
    }

    #[test]
    fn interpreter_not_found_lists_candidates() {
        let err = SetupError::InterpreterNotFound {
            candidates: "python3, python".into(),
        };
        assert!(err.to_string().contains("python3, python"));
    }

    #[test]
    fn command_failed_displays_command_and_code() {
        let err = SetupError::CommandFailed {
            command: "uv python install 3.11".into(),
            code: Some(2),
        };
        let msg = err.to_string();
        assert!(msg.contains("uv python install 3.11"));
        assert!(msg.contains("2"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: SetupError = io_err.into();
        assert!(matches!(err, SetupError::Io(_)));
    }

    #[test]
    fn anyhow_error_is_transparent() {
        let err: SetupError = anyhow::anyhow!("something odd").into();
        assert_eq!(err.to_string(), "something odd");
    }
}
