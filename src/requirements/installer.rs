//! Opt-in interpreter installation through `uv`.
//!
//! Only runs when the user passes `--install-python` and `uv` is already on
//! PATH. Nothing here downloads or runs installers for `uv` itself.

use std::path::Path;
use std::process::Command;

use crate::error::{Result, SetupError};

use super::policy::VersionPolicy;

/// Arguments passed to `uv` to install the recommended interpreter.
pub fn python_install_args(policy: &VersionPolicy) -> Vec<String> {
    vec![
        "python".to_string(),
        "install".to_string(),
        policy.recommended.to_string(),
    ]
}

/// Run `uv python install <recommended>` with the given `uv` binary.
///
/// Returns the trimmed stderr of a failed run inside the error so the
/// caller can show it to the user.
pub fn install_python_via_uv(uv: &Path, policy: &VersionPolicy) -> Result<()> {
    let args = python_install_args(policy);
    let command = format!("{} {}", uv.display(), args.join(" "));
    tracing::debug!("Running {}", command);

    let output = Command::new(uv).args(&args).output()?;
    if output.status.success() {
        return Ok(());
    }

    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    tracing::debug!("{} failed: {}", command, stderr);
    if stderr.is_empty() {
        Err(SetupError::CommandFailed {
            command,
            code: output.status.code(),
        })
    } else {
        Err(SetupError::Other(anyhow::anyhow!(
            "Failed to install Python: {}",
            stderr
        )))
    }
}
