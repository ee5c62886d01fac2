//! Probes for the Python interpreter and the `uv` tool.
//!
//! Lookups walk PATH entries directly instead of shelling out to `which`,
//! whose behavior varies across systems and is sometimes a shell builtin with
//! inconsistent error handling.
//!
//! # Example
//!
//! ```no_run
//! use xugu_mcp_setup::requirements::probe::{parse_system_path, probe_tool};
//!
//! let probe = probe_tool("uv", &parse_system_path());
//! if let Some(path) = &probe.path {
//!     println!("uv found at {}", path.display());
//! }
//! ```

use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::policy::RuntimeVersion;
use crate::error::{Result, SetupError};

/// Result of looking for an external tool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ToolProbeResult {
    /// Whether an executable was located on PATH.
    pub found: bool,
    /// Resolved location of the executable.
    pub path: Option<PathBuf>,
    /// Version text reported by the tool, when it could be queried.
    pub version: Option<String>,
}

impl ToolProbeResult {
    /// A tool that was located, with an optional version string.
    pub fn found(path: impl Into<PathBuf>, version: Option<String>) -> Self {
        Self {
            found: true,
            path: Some(path.into()),
            version,
        }
    }

    pub fn not_found() -> Self {
        Self::default()
    }
}

/// An interpreter located on PATH (or configured explicitly).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterpreterProbe {
    pub path: PathBuf,
    /// `None` when the interpreter ran but its output could not be parsed.
    pub version: Option<RuntimeVersion>,
}

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// File names a tool may have on disk.
fn executable_names(tool: &str) -> Vec<String> {
    if cfg!(windows) && Path::new(tool).extension().is_none() {
        ["exe", "cmd", "bat"]
            .iter()
            .map(|ext| format!("{}.{}", tool, ext))
            .chain(std::iter::once(tool.to_string()))
            .collect()
    } else {
        vec![tool.to_string()]
    }
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    let names = executable_names(tool);
    for dir in path_entries {
        for name in &names {
            let candidate = dir.join(name);
            if candidate.is_file() && is_executable(&candidate) {
                return Some(candidate);
            }
        }
    }
    None
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Run `<binary> --version` and return its trimmed output.
///
/// Output from stdout is preferred; some tools (Python 2, for one) print
/// their version to stderr, so that is used when stdout is empty.
pub fn query_version(binary: &Path) -> Result<String> {
    let command = format!("{} --version", binary.display());
    let output = Command::new(binary)
        .arg("--version")
        .output()
        .map_err(|e| SetupError::ProbeExecutionFailure {
            command: command.clone(),
            message: e.to_string(),
        })?;

    if !output.status.success() {
        return Err(SetupError::ProbeExecutionFailure {
            command,
            message: format!("exited with {}", output.status),
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
    let text = if stdout.is_empty() {
        String::from_utf8_lossy(&output.stderr).trim().to_string()
    } else {
        stdout
    };

    if text.is_empty() {
        return Err(SetupError::ProbeExecutionFailure {
            command,
            message: "no version output".to_string(),
        });
    }
    Ok(text)
}

static SEMVER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+\.\d+(?:\.\d+)?)").expect("valid version regex"));

/// Extract a dotted version number from tool output.
///
/// `uv 0.4.18 (7b55e9790 2024-10-01)` yields `0.4.18`.
pub fn extract_version(output: &str) -> Option<String> {
    SEMVER_RE
        .captures(output)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Look up a tool on PATH and query its version.
///
/// Version query failures are logged and degrade to `version: None`.
pub fn probe_tool(tool: &str, path_entries: &[PathBuf]) -> ToolProbeResult {
    let Some(path) = resolve_tool_path(tool, path_entries) else {
        tracing::debug!("{} not found on PATH", tool);
        return ToolProbeResult::not_found();
    };
    tracing::debug!("{} resolved to {}", tool, path.display());

    let version = match query_version(&path) {
        Ok(text) => Some(extract_version(&text).unwrap_or(text)),
        Err(e) => {
            tracing::debug!("{}", e);
            None
        }
    };

    ToolProbeResult::found(path, version)
}

/// Locate a Python interpreter and read its version.
///
/// An `explicit` interpreter (from `--python` or `XUGU_MCP_PYTHON`) takes
/// priority: a value containing a path separator is used as-is, a bare name
/// is resolved on PATH. Otherwise `candidates` are tried in order and the
/// first one found wins, even if its version cannot be read.
pub fn probe_interpreter(
    explicit: Option<&Path>,
    candidates: &[String],
    path_entries: &[PathBuf],
) -> Result<InterpreterProbe> {
    let path = match explicit {
        Some(p) if p.components().count() > 1 || p.is_absolute() => {
            if !p.is_file() {
                return Err(SetupError::InterpreterPathInvalid {
                    path: p.to_path_buf(),
                });
            }
            p.to_path_buf()
        }
        Some(p) => {
            let name = p.to_string_lossy();
            resolve_tool_path(&name, path_entries).ok_or_else(|| {
                SetupError::InterpreterNotFound {
                    candidates: name.to_string(),
                }
            })?
        }
        None => candidates
            .iter()
            .find_map(|name| resolve_tool_path(name, path_entries))
            .ok_or_else(|| SetupError::InterpreterNotFound {
                candidates: candidates.join(", "),
            })?,
    };
    tracing::debug!("Using interpreter at {}", path.display());

    let version = match query_version(&path) {
        Ok(text) => {
            let parsed = RuntimeVersion::parse(&text);
            if parsed.is_none() {
                tracing::debug!("Unrecognized interpreter version output: {:?}", text);
            }
            parsed
        }
        Err(e) => {
            tracing::debug!("{}", e);
            None
        }
    };

    Ok(InterpreterProbe { path, version })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// Create a fake binary at a path (creates parent dirs as needed).
    fn create_fake_binary(path: &Path, script: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, script).unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
        }
    }

    #[cfg(unix)]
    fn create_non_executable_file(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "not executable").unwrap();
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o644)).unwrap();
    }

    #[test]
    fn resolve_tool_path_finds_first_match() {
        let temp = TempDir::new().unwrap();
        let dir_a = temp.path().join("a");
        let dir_b = temp.path().join("b");

        create_fake_binary(&dir_a.join("uv"), "#!/bin/sh\n");
        create_fake_binary(&dir_b.join("uv"), "#!/bin/sh\n");

        let result = resolve_tool_path("uv", &[dir_a.clone(), dir_b]);
        assert_eq!(result, Some(dir_a.join("uv")));
    }

    #[test]
    fn resolve_tool_path_returns_none_when_not_found() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("empty");
        fs::create_dir_all(&dir).unwrap();

        assert!(resolve_tool_path("uv", &[dir]).is_none());
    }

    #[cfg(unix)]
    #[test]
    fn resolve_tool_path_skips_non_executable() {
        let temp = TempDir::new().unwrap();
        let dir_a = temp.path().join("a");
        let dir_b = temp.path().join("b");

        create_non_executable_file(&dir_a.join("uv"));
        create_fake_binary(&dir_b.join("uv"), "#!/bin/sh\n");

        let result = resolve_tool_path("uv", &[dir_a, dir_b.clone()]);
        assert_eq!(result, Some(dir_b.join("uv")));
    }

    #[test]
    fn is_executable_returns_false_for_nonexistent_file() {
        assert!(!is_executable(Path::new("/nonexistent/path/to/file")));
    }

    #[test]
    fn extract_version_from_uv_output() {
        assert_eq!(
            extract_version("uv 0.4.18 (7b55e9790 2024-10-01)"),
            Some("0.4.18".to_string())
        );
    }

    #[test]
    fn extract_version_no_match() {
        assert!(extract_version("no version here").is_none());
    }

    #[test]
    fn probe_tool_missing() {
        let temp = TempDir::new().unwrap();
        let probe = probe_tool("uv", &[temp.path().to_path_buf()]);
        assert_eq!(probe, ToolProbeResult::not_found());
        assert!(!probe.found);
    }

    #[cfg(unix)]
    #[test]
    fn probe_tool_reads_version() {
        let temp = TempDir::new().unwrap();
        let bin = temp.path().join("bin");
        create_fake_binary(&bin.join("uv"), "#!/bin/sh\necho 'uv 0.5.1 (abc 2024-11-01)'\n");

        let probe = probe_tool("uv", &[bin.clone()]);
        assert!(probe.found);
        assert_eq!(probe.path, Some(bin.join("uv")));
        assert_eq!(probe.version.as_deref(), Some("0.5.1"));
    }

    #[cfg(unix)]
    #[test]
    fn probe_tool_tolerates_failing_version_flag() {
        let temp = TempDir::new().unwrap();
        let bin = temp.path().join("bin");
        create_fake_binary(&bin.join("uv"), "#!/bin/sh\nexit 3\n");

        let probe = probe_tool("uv", &[bin]);
        assert!(probe.found);
        assert!(probe.version.is_none());
    }

    #[cfg(unix)]
    #[test]
    fn probe_interpreter_uses_first_candidate_found() {
        let temp = TempDir::new().unwrap();
        let bin = temp.path().join("bin");
        create_fake_binary(&bin.join("python"), "#!/bin/sh\necho 'Python 3.9.1'\n");

        let candidates = vec!["python3".to_string(), "python".to_string()];
        let probe = probe_interpreter(None, &candidates, &[bin.clone()]).unwrap();
        assert_eq!(probe.path, bin.join("python"));
        assert_eq!(probe.version, Some(RuntimeVersion::new(3, 9, 1)));
    }

    #[cfg(unix)]
    #[test]
    fn probe_interpreter_reads_version_from_stderr() {
        let temp = TempDir::new().unwrap();
        let bin = temp.path().join("bin");
        create_fake_binary(&bin.join("python"), "#!/bin/sh\necho 'Python 2.7.18' >&2\n");

        let candidates = vec!["python".to_string()];
        let probe = probe_interpreter(None, &candidates, &[bin]).unwrap();
        assert_eq!(probe.version, Some(RuntimeVersion::new(2, 7, 18)));
    }

    #[cfg(unix)]
    #[test]
    fn probe_interpreter_prefers_explicit_path() {
        let temp = TempDir::new().unwrap();
        let custom = temp.path().join("custom/python3.11");
        create_fake_binary(&custom, "#!/bin/sh\necho 'Python 3.11.4'\n");

        let probe = probe_interpreter(Some(&custom), &[], &[]).unwrap();
        assert_eq!(probe.path, custom);
        assert_eq!(probe.version, Some(RuntimeVersion::new(3, 11, 4)));
    }

    #[test]
    fn probe_interpreter_rejects_missing_explicit_path() {
        let result = probe_interpreter(Some(Path::new("/nonexistent/bin/python3")), &[], &[]);
        assert!(matches!(
            result,
            Err(SetupError::InterpreterPathInvalid { .. })
        ));
    }

    #[test]
    fn probe_interpreter_not_found_lists_candidates() {
        let temp = TempDir::new().unwrap();
        let candidates = vec!["python3".to_string(), "python".to_string()];
        let err = probe_interpreter(None, &candidates, &[temp.path().to_path_buf()]).unwrap_err();
        assert!(err.to_string().contains("python3, python"));
    }
}
