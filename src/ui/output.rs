//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Headers, messages, instructions and status lines.
    #[default]
    Normal,
    /// Status lines (success, warning, error) only.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows headers, plain messages and commands.
    pub fn shows_details(&self) -> bool {
        matches!(self, Self::Normal)
    }
}
