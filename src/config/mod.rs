//! Runtime configuration for the setup tool.
//!
//! There are no configuration files: settings come from CLI flags and their
//! environment-variable fallbacks (`XUGU_MCP_PYTHON`), resolved by clap and
//! collected here.

use std::path::PathBuf;

use crate::requirements::VersionPolicy;

/// Interpreter names searched on PATH when none is configured.
pub const DEFAULT_PYTHON_CANDIDATES: &[&str] = &["python3", "python"];

/// Name of the setup command, shown in "run this again" hints.
pub const APP_COMMAND: &str = "xugu-mcp-setup";

/// Settings shared by all commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupConfig {
    /// Explicit interpreter to check instead of searching PATH.
    pub python: Option<PathBuf>,
    /// Interpreter names to search for, in order.
    pub python_candidates: Vec<String>,
    /// Supported version range.
    pub policy: VersionPolicy,
    /// Command users re-run after fixing their environment.
    pub app_command: String,
}

impl Default for SetupConfig {
    fn default() -> Self {
        Self {
            python: None,
            python_candidates: DEFAULT_PYTHON_CANDIDATES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            policy: VersionPolicy::default(),
            app_command: APP_COMMAND.to_string(),
        }
    }
}

impl SetupConfig {
    /// Use a specific interpreter.
    pub fn with_python(mut self, python: Option<PathBuf>) -> Self {
        self.python = python;
        self
    }
}
