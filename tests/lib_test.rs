//! Library integration tests.

use xugu_mcp_setup::requirements::{
    python_install_guide, EnvironmentChecker, RuntimeVersion, ToolProbeResult, VersionPolicy,
};
use xugu_mcp_setup::shell::Platform;
use xugu_mcp_setup::SetupError;

#[test]
fn error_types_are_public() {
    let err = SetupError::ToolMissing { tool: "uv".into() };
    assert!(err.to_string().contains("uv"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> xugu_mcp_setup::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use xugu_mcp_setup::cli::{Cli, Commands};

    let cli = Cli::parse_from(["xugu-mcp-setup", "check", "--json"]);
    if let Some(Commands::Check(args)) = cli.command {
        assert!(args.json);
    } else {
        panic!("Expected Check command");
    }
}

#[test]
fn checker_is_usable_without_probing() {
    let checker = EnvironmentChecker::new(
        VersionPolicy::default(),
        Some(RuntimeVersion::new(3, 11, 2)),
        ToolProbeResult::found("/usr/bin/uv", Some("0.4.18".to_string())),
    );
    let result = checker.check_environment();
    assert!(result.is_valid());
    assert!(result.warnings().is_empty());
    assert!(result.errors().is_empty());
    assert!(checker.warning_summary().is_none());
}

#[test]
fn warning_summary_for_agents() {
    let checker = EnvironmentChecker::new(
        VersionPolicy::default(),
        Some(RuntimeVersion::new(3, 12, 0)),
        ToolProbeResult::not_found(),
    );
    let summary = checker.warning_summary().expect("environment is invalid");
    let lines: Vec<&str> = summary.lines().collect();

    assert_eq!(lines[0], "⚠️ ENVIRONMENT WARNING:");
    assert_eq!(lines[1], "");
    assert_eq!(lines[2], "Errors:");
    assert!(lines[3].starts_with("  - Python 3.12.0 is not supported"));
    assert_eq!(lines[4], "");
    assert_eq!(lines[5], "Warnings:");
    assert!(lines[6].starts_with("  - uv package manager is not installed"));
}

#[test]
fn guides_are_plain_data() {
    let guide = python_install_guide(Platform::Windows, &VersionPolicy::default());
    assert!(guide.iter().all(|g| !g.steps.is_empty()));
}
