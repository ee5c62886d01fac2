//! xugu-mcp-setup entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use xugu_mcp_setup::cli::{Cli, CommandDispatcher};
use xugu_mcp_setup::shell::is_ci;
use xugu_mcp_setup::ui::{create_ui, init_console, OutputMode, SetupTheme};

/// Printed when the user interrupts a run.
const CANCELLED_MESSAGE: &str = "Setup cancelled by user.";

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN, keeping the guided output clean
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("xugu_mcp_setup=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("xugu_mcp_setup=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Exit with status 1 and a notice on Ctrl-C.
///
/// The handler runs on its own thread while the main thread may be blocked
/// on a probe, so it exits the process directly.
fn install_interrupt_handler(colors: bool) {
    let theme = if colors {
        SetupTheme::new()
    } else {
        SetupTheme::plain()
    };
    let installed = ctrlc::set_handler(move || {
        println!();
        println!("{}", theme.format_info(CANCELLED_MESSAGE));
        std::process::exit(1);
    });
    if let Err(e) = installed {
        tracing::warn!("Failed to install Ctrl-C handler: {}", e);
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);
    let colors = init_console(cli.no_color);
    install_interrupt_handler(colors);

    tracing::debug!("xugu-mcp-setup starting with args: {:?}", cli);

    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else {
        OutputMode::Normal
    };

    let mut ui = create_ui(!is_ci(), output_mode);
    let dispatcher = CommandDispatcher::new(cli.setup_config());

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("An error occurred: {}", e));
            ExitCode::from(1)
        }
    }
}
