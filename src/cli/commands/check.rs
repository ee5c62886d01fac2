//! Check command implementation.
//!
//! The `xugu-mcp-setup check` command runs the environment checks without
//! the guided output, for hosting processes that want to surface the result
//! to an agent.

use crate::cli::args::CheckArgs;
use crate::config::SetupConfig;
use crate::error::Result;
use crate::requirements::{CheckResult, EnvironmentChecker};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    config: SetupConfig,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(config: SetupConfig, args: CheckArgs) -> Self {
        Self { config, args }
    }

    /// Report an already computed result.
    pub fn report(
        &self,
        result: &CheckResult,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        if self.args.json {
            let json = serde_json::to_string_pretty(result)
                .map_err(|e| anyhow::anyhow!("Failed to serialize check result: {}", e))?;
            println!("{}", json);
        } else {
            match result.warning_summary() {
                None => ui.success("Environment is ready"),
                Some(summary) if ui.output_mode().shows_details() => {
                    for line in summary.lines() {
                        ui.message(line);
                    }
                }
                // Quiet mode drops plain messages; still name each problem.
                Some(_) => {
                    for problem in result.errors().iter().chain(result.warnings()) {
                        ui.warning(problem);
                    }
                }
            }
        }

        if result.is_valid() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let result = EnvironmentChecker::detect(&self.config).check_environment();
        tracing::debug!("Check result: {:?}", result);
        self.report(&result, ui)
    }
}
