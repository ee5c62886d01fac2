//! User interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for colored terminal output
//! - [`NonInteractiveUI`] for CI/headless environments
//! - [`MockUI`] for asserting on output in tests
//! - [`render_instructions`] for printing remediation guides
//!
//! # Example
//!
//! ```
//! use xugu_mcp_setup::ui::{create_ui, OutputMode};
//!
//! // Use non-interactive mode for testability
//! let mut ui = create_ui(false, OutputMode::Quiet);
//! ui.show_header("XuguDB MCP Server");
//! ui.success("Your environment is ready!");
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{init_console, should_use_colors, SetupTheme};

use crate::requirements::InstructionGroup;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a plain message.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Display an informational message.
    fn info(&mut self, msg: &str);

    /// Display a command the user should run, indented by `indent` spaces.
    fn command(&mut self, cmd: &str, indent: usize);

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);
}

/// Print instruction groups in the staged "Option N" layout.
pub fn render_instructions(ui: &mut dyn UserInterface, groups: &[InstructionGroup]) {
    for (idx, group) in groups.iter().enumerate() {
        if idx > 0 {
            ui.message("");
        }
        ui.info(&group.display_title());

        let numbered = group.steps.len() > 1 && group.steps.iter().all(|s| s.label.is_some());
        for (n, step) in group.steps.iter().enumerate() {
            match (&step.label, numbered) {
                (Some(label), true) => ui.command(&format!("{}. {}", n + 1, label), 2),
                (Some(label), false) => ui.command(label, 2),
                (None, _) => {}
            }
            let indent = if step.label.is_some() { 5 } else { 2 };
            for cmd in &step.commands {
                ui.command(cmd, indent);
            }
        }
    }
}
