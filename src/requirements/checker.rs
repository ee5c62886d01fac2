//! Environment checker.
//!
//! The `EnvironmentChecker` evaluates a captured snapshot of the host: the
//! Python interpreter's version and the result of probing for `uv`. Probing
//! happens once in [`EnvironmentChecker::detect`]; every check afterwards is
//! pure.

use std::path::PathBuf;

use crate::config::SetupConfig;
use crate::error::{Result, SetupError};

use super::policy::{RuntimeVersion, VersionFit, VersionPolicy};
use super::probe::{parse_system_path, probe_interpreter, probe_tool, ToolProbeResult};
use super::status::{CheckOutcome, CheckResult};

/// Name of the package/version manager the project recommends.
pub const TOOL_NAME: &str = "uv";

/// Where to point users who need to install the tool.
pub const TOOL_INSTALL_URL: &str = "https://github.com/astral-sh/uv";

/// Checks the host environment against a [`VersionPolicy`].
#[derive(Debug, Clone)]
pub struct EnvironmentChecker {
    policy: VersionPolicy,
    runtime: Option<RuntimeVersion>,
    interpreter: Option<PathBuf>,
    interpreter_candidates: Vec<String>,
    /// Interpreter named by `--python`, searched instead of the candidates.
    explicit_interpreter: Option<PathBuf>,
    tool: ToolProbeResult,
}

impl EnvironmentChecker {
    /// Create a checker from an already captured snapshot.
    pub fn new(
        policy: VersionPolicy,
        runtime: Option<RuntimeVersion>,
        tool: ToolProbeResult,
    ) -> Self {
        Self {
            policy,
            runtime,
            interpreter: None,
            interpreter_candidates: Vec::new(),
            explicit_interpreter: None,
            tool,
        }
    }

    /// Record which interpreter the runtime version came from.
    pub fn with_interpreter(mut self, path: impl Into<PathBuf>) -> Self {
        self.interpreter = Some(path.into());
        self
    }

    /// Record that the interpreter was configured explicitly.
    pub fn with_explicit_interpreter(mut self, path: impl Into<PathBuf>) -> Self {
        self.explicit_interpreter = Some(path.into());
        self
    }

    /// Record which interpreter names were searched for.
    pub fn with_candidates(mut self, candidates: Vec<String>) -> Self {
        self.interpreter_candidates = candidates;
        self
    }

    /// Probe the host and capture a snapshot.
    ///
    /// Interpreter lookup failures leave the runtime version unknown, which
    /// the version check reports as an error; they never abort detection.
    pub fn detect(config: &SetupConfig) -> Self {
        let path_entries = parse_system_path();

        let (runtime, interpreter) = match probe_interpreter(
            config.python.as_deref(),
            &config.python_candidates,
            &path_entries,
        ) {
            Ok(probe) => (probe.version, Some(probe.path)),
            Err(e) => {
                tracing::debug!("Interpreter probe failed: {}", e);
                (None, None)
            }
        };

        let tool = probe_tool(TOOL_NAME, &path_entries);
        Self {
            policy: config.policy,
            runtime,
            interpreter,
            interpreter_candidates: config.python_candidates.clone(),
            explicit_interpreter: config.python.clone(),
            tool,
        }
    }

    pub fn policy(&self) -> &VersionPolicy {
        &self.policy
    }

    /// The captured runtime version, if the interpreter could be read.
    pub fn runtime(&self) -> Option<RuntimeVersion> {
        self.runtime
    }

    pub fn interpreter(&self) -> Option<&PathBuf> {
        self.interpreter.as_ref()
    }

    pub fn tool(&self) -> &ToolProbeResult {
        &self.tool
    }

    /// Check a specific version against the policy.
    pub fn check_runtime_version(&self, version: &RuntimeVersion) -> CheckOutcome {
        let version_str = format!("Python {}", version);
        let not_supported = || {
            format!(
                "{} is not supported. This project requires Python {}.",
                version_str,
                self.policy.range_label()
            )
        };

        match self.policy.classify(version) {
            VersionFit::Recommended => CheckOutcome::pass(format!("{} (Recommended)", version_str)),
            VersionFit::Supported => CheckOutcome::pass(version_str),
            VersionFit::TooNew => {
                CheckOutcome::fail(format!("{} Current version is too new.", not_supported()))
            }
            VersionFit::TooOld => {
                CheckOutcome::fail(format!("{} Current version is too old.", not_supported()))
            }
        }
    }

    /// Check the captured runtime version.
    pub fn check_current_runtime(&self) -> CheckOutcome {
        let range = self.policy.range_label();
        match (&self.runtime, &self.interpreter, &self.explicit_interpreter) {
            (Some(version), _, _) => self.check_runtime_version(version),
            (None, Some(path), _) => CheckOutcome::fail(format!(
                "Could not determine the Python version of {}. This project requires Python {}.",
                path.display(),
                range
            )),
            (None, None, Some(explicit)) => CheckOutcome::fail(format!(
                "Configured Python interpreter {} was not found or is not executable. This project requires Python {}.",
                explicit.display(),
                range
            )),
            (None, None, None) => {
                let looked_for = if self.interpreter_candidates.is_empty() {
                    "python3, python".to_string()
                } else {
                    self.interpreter_candidates.join(", ")
                };
                CheckOutcome::fail(format!(
                    "Python interpreter not found on PATH (looked for {}). This project requires Python {}.",
                    looked_for, range
                ))
            }
        }
    }

    /// Whether the captured runtime is exactly the recommended version.
    pub fn runtime_is_recommended(&self) -> bool {
        self.runtime
            .map(|v| self.policy.classify(&v) == VersionFit::Recommended)
            .unwrap_or(false)
    }

    /// Check that the tool was found on PATH.
    pub fn check_tool_installed(&self) -> CheckOutcome {
        match (&self.tool.path, &self.tool.version) {
            (Some(path), Some(version)) if self.tool.found => CheckOutcome::pass(format!(
                "{} {} at {}",
                TOOL_NAME,
                version,
                path.display()
            )),
            (Some(path), None) if self.tool.found => CheckOutcome::pass(format!(
                "{} at {} (version unknown)",
                TOOL_NAME,
                path.display()
            )),
            _ => CheckOutcome::fail(format!(
                "{} package manager is not installed or not in PATH. Please install {} from {}",
                TOOL_NAME, TOOL_NAME, TOOL_INSTALL_URL
            )),
        }
    }

    /// Run all checks and aggregate them.
    pub fn check_environment(&self) -> CheckResult {
        CheckResult::from_outcomes(&self.check_current_runtime(), &self.check_tool_installed())
    }

    /// Warning block for an LLM host, or `None` when everything passes.
    pub fn warning_summary(&self) -> Option<String> {
        self.check_environment().warning_summary()
    }

    /// Fail with the first blocking problem, runtime before tool.
    pub fn ensure_ready(&self) -> Result<()> {
        let runtime = self.check_current_runtime();
        if !runtime.valid {
            return Err(SetupError::UnsupportedVersion {
                version: self
                    .runtime
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| "unknown".to_string()),
                message: runtime.message,
            });
        }
        if !self.check_tool_installed().valid {
            return Err(SetupError::ToolMissing {
                tool: TOOL_NAME.to_string(),
            });
        }
        Ok(())
    }
}
