//! Environment requirement checking.
//!
//! This module decides whether the host can run the XuguDB MCP server:
//! a supported Python interpreter and the `uv` package manager.
//!
//! # Modules
//!
//! - [`policy`] - Supported version range and version parsing
//! - [`probe`] - PATH lookup and version queries for external binaries
//! - [`checker`] - The environment checker and its aggregate verdict
//! - [`status`] - Check outcome and result types
//! - [`guide`] - Platform-specific remediation instructions
//! - [`installer`] - Opt-in interpreter installation through `uv`

pub mod checker;
pub mod guide;
pub mod installer;
pub mod policy;
pub mod probe;
pub mod status;

pub use checker::{EnvironmentChecker, TOOL_INSTALL_URL, TOOL_NAME};
pub use guide::{python_install_guide, uv_install_guide, InstructionGroup, InstructionStep};
pub use policy::{MajorMinor, RuntimeVersion, VersionFit, VersionPolicy};
pub use probe::ToolProbeResult;
pub use status::{CheckOutcome, CheckResult};
