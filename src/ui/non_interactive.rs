//! Non-interactive UI for CI/headless environments.

use super::{OutputMode, UserInterface};

/// UI implementation for piped output and CI logs.
///
/// Prints plain text with the same icons as the terminal UI but no
/// styling. Warnings and errors go to stderr.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_details() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        println!("✓ {}", msg);
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("⚠ {}", msg);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn info(&mut self, msg: &str) {
        if self.mode.shows_details() {
            println!("ℹ {}", msg);
        }
    }

    fn command(&mut self, cmd: &str, indent: usize) {
        if self.mode.shows_details() {
            println!("{}{}", " ".repeat(indent), cmd);
        }
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_details() {
            let rule = "=".repeat(super::theme::HEADER_WIDTH);
            println!("{}\n{}\n{}", rule, title, rule);
        }
    }
}
