//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations:
//! - `setup` (default) - guided checks with remediation steps
//! - `check` - plain or JSON verdict for hosting processes
//! - `completions` - shell completion scripts

pub mod check;
pub mod completions;
pub mod dispatcher;
pub mod setup;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use setup::{SetupWizard, WizardState};
