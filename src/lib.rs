//! Environment setup and preflight checks for the XuguDB MCP server.
//!
//! Checks that a supported Python interpreter and the `uv` package manager
//! are available, prints guided remediation for anything missing, and
//! produces a structured [`CheckResult`](requirements::CheckResult) that an
//! agent host can surface as a warning.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Runtime settings
//! - [`error`] - Error types and result aliases
//! - [`requirements`] - Version policy, probes, and the environment checker
//! - [`shell`] - Platform detection
//! - [`ui`] - Styled terminal output
//!
//! # Example
//!
//! ```
//! use xugu_mcp_setup::requirements::{
//!     EnvironmentChecker, RuntimeVersion, ToolProbeResult, VersionPolicy,
//! };
//!
//! let checker = EnvironmentChecker::new(
//!     VersionPolicy::default(),
//!     Some(RuntimeVersion::new(3, 5, 0)),
//!     ToolProbeResult::not_found(),
//! );
//! let result = checker.check_environment();
//! assert!(!result.is_valid());
//! assert_eq!(result.errors().len(), 1);
//! assert_eq!(result.warnings().len(), 1);
//! assert!(checker.warning_summary().unwrap().contains("Errors:"));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod requirements;
pub mod shell;
pub mod ui;

pub use error::{Result, SetupError};
