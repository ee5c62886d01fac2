//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::SetupConfig;

/// XuguDB MCP Server environment setup and preflight checks.
#[derive(Debug, Parser)]
#[command(name = "xugu-mcp-setup")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Python interpreter to check (path or command name)
    #[arg(long, global = true, env = "XUGU_MCP_PYTHON", value_name = "PYTHON")]
    pub python: Option<PathBuf>,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Settings derived from the global flags.
    pub fn setup_config(&self) -> SetupConfig {
        SetupConfig::default().with_python(self.python.clone())
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the guided environment setup (default if no command specified)
    Setup(SetupArgs),

    /// Check the environment and print a summary for tools and agents
    Check(CheckArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `setup` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SetupArgs {
    /// Install the recommended Python with uv when the current one is unsupported
    #[arg(long)]
    pub install_python: bool,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_args_has_no_subcommand() {
        let cli = Cli::parse_from(["xugu-mcp-setup"]);
        assert!(cli.command.is_none());
        assert!(!cli.quiet);
        assert!(!cli.no_color);
    }

    #[test]
    fn parses_setup_install_python() {
        let cli = Cli::parse_from(["xugu-mcp-setup", "setup", "--install-python"]);
        match cli.command {
            Some(Commands::Setup(args)) => assert!(args.install_python),
            other => panic!("Expected Setup command, got {:?}", other),
        }
    }

    #[test]
    fn parses_check_json() {
        let cli = Cli::parse_from(["xugu-mcp-setup", "check", "--json"]);
        match cli.command {
            Some(Commands::Check(args)) => assert!(args.json),
            other => panic!("Expected Check command, got {:?}", other),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "xugu-mcp-setup",
            "check",
            "--python",
            "/opt/python/bin/python3",
            "--no-color",
        ]);
        assert!(cli.no_color);
        assert_eq!(
            cli.setup_config().python,
            Some(PathBuf::from("/opt/python/bin/python3"))
        );
    }

    #[test]
    fn parses_completions_shell() {
        let cli = Cli::parse_from(["xugu-mcp-setup", "completions", "zsh"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Completions(CompletionsArgs { shell: Shell::Zsh }))
        ));
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
