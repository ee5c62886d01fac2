//! Visual theme and styling.

use console::Style;

/// Width of the rule drawn above and below headers.
pub const HEADER_WIDTH: usize = 50;

/// The setup tool's visual theme.
#[derive(Debug, Clone)]
pub struct SetupTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (yellow).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for informational messages (blue).
    pub info: Style,
    /// Style for header banners (cyan).
    pub header: Style,
    /// Style for commands the user should run (yellow).
    pub command: Style,
}

impl Default for SetupTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl SetupTheme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().yellow(),
            error: Style::new().red().bold(),
            info: Style::new().blue(),
            header: Style::new().cyan(),
            command: Style::new().yellow(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            info: Style::new(),
            header: Style::new(),
            command: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in yellow).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format an informational message (icon + text in blue).
    pub fn format_info(&self, msg: &str) -> String {
        format!("{}", self.info.apply_to(format!("ℹ {}", msg)))
    }

    /// Format a command line indented by `indent` spaces.
    pub fn format_command(&self, cmd: &str, indent: usize) -> String {
        format!("{}{}", " ".repeat(indent), self.command.apply_to(cmd))
    }

    /// Format a header banner: a rule, the title, and another rule.
    pub fn format_header(&self, title: &str) -> String {
        let rule = "=".repeat(HEADER_WIDTH);
        format!(
            "{}\n{}\n{}",
            self.header.apply_to(&rule),
            self.header.apply_to(title),
            self.header.apply_to(&rule)
        )
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}

/// Configure terminal color support for this process.
///
/// Must be called once by the binary's entry point before any output is
/// written. Colors are turned off when `no_color` is set, `NO_COLOR` is
/// present, or stdout is not a terminal.
pub fn init_console(no_color: bool) -> bool {
    let enabled = !no_color && should_use_colors();
    console::set_colors_enabled(enabled);
    console::set_colors_enabled_stderr(enabled);
    tracing::debug!("Console colors enabled: {}", enabled);
    enabled
}
