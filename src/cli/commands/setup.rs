//! Setup command implementation.
//!
//! The `xugu-mcp-setup setup` command (also the default with no subcommand)
//! walks the user through the environment checks and prints remediation
//! steps for anything that is missing.

use crate::cli::args::SetupArgs;
use crate::config::SetupConfig;
use crate::error::Result;
use crate::requirements::guide::{uv_python_command, HTTP_SERVER_COMMAND, SERVER_COMMAND};
use crate::requirements::installer::install_python_via_uv;
use crate::requirements::{python_install_guide, uv_install_guide, EnvironmentChecker, TOOL_NAME};
use crate::shell::Platform;
use crate::ui::{render_instructions, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// Banner shown at the start of every run.
pub const BANNER: &str = "XuguDB MCP Server - Environment Setup";

/// Stages of a setup run. The wizard only moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardState {
    Start,
    VersionChecked { version_ok: bool },
    ToolChecked { version_ok: bool, tool_ok: bool },
    /// A check failed; the process should exit with status 1.
    Blocked,
    /// Everything passed; the process should exit with status 0.
    Ready,
}

impl WizardState {
    /// Exit code for a terminal state.
    pub fn exit_code(self) -> i32 {
        match self {
            WizardState::Ready => 0,
            _ => 1,
        }
    }
}

/// Staged, printed walk through the environment checks.
pub struct SetupWizard {
    checker: EnvironmentChecker,
    platform: Platform,
    app_command: String,
    install_python: bool,
}

impl SetupWizard {
    /// Create a wizard over an already captured environment.
    pub fn new(checker: EnvironmentChecker, platform: Platform) -> Self {
        Self {
            checker,
            platform,
            app_command: crate::config::APP_COMMAND.to_string(),
            install_python: false,
        }
    }

    /// Command users are told to re-run after fixing their environment.
    pub fn with_app_command(mut self, app_command: impl Into<String>) -> Self {
        self.app_command = app_command.into();
        self
    }

    /// Install the recommended interpreter through `uv` when blocked on version.
    pub fn with_install_python(mut self, install_python: bool) -> Self {
        self.install_python = install_python;
        self
    }

    /// Run every stage and return the terminal state.
    pub fn run(&self, ui: &mut dyn UserInterface) -> WizardState {
        let mut state = WizardState::Start;
        loop {
            let next = self.step(state, ui);
            tracing::debug!("Setup wizard: {:?} -> {:?}", state, next);
            state = next;
            if matches!(state, WizardState::Blocked | WizardState::Ready) {
                return state;
            }
        }
    }

    fn step(&self, state: WizardState, ui: &mut dyn UserInterface) -> WizardState {
        match state {
            WizardState::Start => {
                ui.show_header(BANNER);
                WizardState::VersionChecked {
                    version_ok: self.check_version(ui),
                }
            }
            WizardState::VersionChecked { version_ok } => WizardState::ToolChecked {
                version_ok,
                tool_ok: self.check_tool(ui),
            },
            WizardState::ToolChecked {
                version_ok: true,
                tool_ok: true,
            } => {
                self.show_ready(ui);
                WizardState::Ready
            }
            WizardState::ToolChecked {
                version_ok,
                tool_ok,
            } => {
                self.show_blocked(ui, version_ok, tool_ok);
                WizardState::Blocked
            }
            terminal => terminal,
        }
    }

    fn check_version(&self, ui: &mut dyn UserInterface) -> bool {
        let policy = self.checker.policy();
        ui.show_header("Step 1: Checking Python Version");

        let outcome = self.checker.check_current_runtime();
        ui.message(&format!("Current: {}", outcome.message));

        if !outcome.valid {
            ui.error("Python version is NOT supported!");
        } else if self.checker.runtime_is_recommended() {
            ui.success("Python version is optimal!");
        } else {
            ui.warning(&format!(
                "Python version is supported, but {} is recommended.",
                policy.recommended
            ));
        }
        outcome.valid
    }

    fn check_tool(&self, ui: &mut dyn UserInterface) -> bool {
        ui.show_header(&format!("Step 2: Checking {} Package Manager", TOOL_NAME));

        let outcome = self.checker.check_tool_installed();
        ui.message(&outcome.message);

        if !outcome.valid {
            ui.warning(&format!(
                "{} is recommended for better Python version management",
                TOOL_NAME
            ));
        }
        outcome.valid
    }

    fn show_blocked(&self, ui: &mut dyn UserInterface, version_ok: bool, tool_ok: bool) {
        let policy = self.checker.policy();
        ui.message("");

        if !version_ok {
            let installed = self.install_python && tool_ok && self.try_install_python(ui);
            if !installed {
                ui.show_header(&format!("How to Install Python {}", policy.recommended));
                render_instructions(ui, &python_install_guide(self.platform, policy));
                ui.message("");
            }
        }

        if !tool_ok {
            ui.show_header(&format!("How to Install {}", TOOL_NAME));
            render_instructions(ui, &uv_install_guide(self.platform));
            ui.message("");
        }

        ui.info("After installing, run this command again:");
        ui.command(&self.app_command, 2);
    }

    /// Returns true when the interpreter was installed.
    fn try_install_python(&self, ui: &mut dyn UserInterface) -> bool {
        let policy = self.checker.policy();
        let Some(uv) = self.checker.tool().path.as_deref() else {
            return false;
        };

        ui.info(&format!(
            "Installing Python {} via {}...",
            policy.recommended, TOOL_NAME
        ));
        match install_python_via_uv(uv, policy) {
            Ok(()) => {
                ui.success(&format!(
                    "Python {} installed via {}",
                    policy.recommended, TOOL_NAME
                ));
                ui.info("Run the server with:");
                ui.command(&format!("{} {}", uv_python_command(policy), SERVER_COMMAND), 2);
                ui.message("");
                true
            }
            Err(e) => {
                ui.error(&e.to_string());
                false
            }
        }
    }

    fn show_ready(&self, ui: &mut dyn UserInterface) {
        let policy = self.checker.policy();
        ui.show_header("Setup Complete!");
        ui.success("Your environment is ready!");
        ui.message("");
        ui.info("You can now use XuguDB MCP Server:");
        ui.message("");
        ui.message("  Start MCP server (stdio mode):");
        ui.command(SERVER_COMMAND, 4);
        ui.message("");
        ui.message("  Start HTTP server:");
        ui.command(HTTP_SERVER_COMMAND, 4);
        ui.message("");

        if !self.checker.runtime_is_recommended() {
            ui.warning(&format!(
                "For optimal compatibility, consider using Python {}:",
                policy.recommended
            ));
            ui.command(&format!("uv python install {}", policy.recommended), 2);
            ui.command(&format!("{} {}", uv_python_command(policy), SERVER_COMMAND), 2);
            ui.message("");
        }
    }
}

/// The setup command implementation.
pub struct SetupCommand {
    config: SetupConfig,
    args: SetupArgs,
}

impl SetupCommand {
    /// Create a new setup command.
    pub fn new(config: SetupConfig, args: SetupArgs) -> Self {
        Self { config, args }
    }
}

impl Command for SetupCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let checker = EnvironmentChecker::detect(&self.config);
        let wizard = SetupWizard::new(checker, Platform::current())
            .with_app_command(self.config.app_command.clone())
            .with_install_python(self.args.install_python);

        match wizard.run(ui) {
            WizardState::Ready => Ok(CommandResult::success()),
            state => Ok(CommandResult::failure(state.exit_code())),
        }
    }
}
