//! Platform-specific remediation instructions.
//!
//! Instructions are plain data so they can be rendered by any
//! [`UserInterface`](crate::ui::UserInterface) or inspected in tests.

use crate::shell::Platform;

use super::policy::VersionPolicy;

/// Command that starts the MCP server in stdio mode.
pub const SERVER_COMMAND: &str = "xugu-mcp";

/// Command that starts the MCP server over HTTP.
pub const HTTP_SERVER_COMMAND: &str = "xugu-mcp-http";

/// Full patch release suggested for pyenv and manual installs.
pub const RECOMMENDED_PATCH_RELEASE: &str = "3.11.9";

const UV_INSTALL_SH: &str = "curl -LsSf https://astral.sh/uv/install.sh | sh";
const UV_INSTALL_PS1: &str = "irm https://astral.sh/uv/install.ps1 | iex";
const UV_DOWNLOAD_PAGE: &str = "https://github.com/astral-sh/uv#installing-uv";

/// One step inside an instruction group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstructionStep {
    /// Short description, e.g. "Install uv:". `None` for bare commands.
    pub label: Option<String>,
    /// Commands (or URLs) the user should run, in order.
    pub commands: Vec<String>,
}

impl InstructionStep {
    fn labeled(label: &str, commands: &[&str]) -> Self {
        Self {
            label: Some(label.to_string()),
            commands: commands.iter().map(|c| c.to_string()).collect(),
        }
    }

    fn bare(commands: &[&str]) -> Self {
        Self {
            label: None,
            commands: commands.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// A titled set of steps, e.g. "Option 1: Using uv".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstructionGroup {
    pub title: String,
    pub recommended: bool,
    pub steps: Vec<InstructionStep>,
}

impl InstructionGroup {
    /// Title with the "(Recommended)" marker applied.
    pub fn display_title(&self) -> String {
        if self.recommended {
            format!("{} (Recommended)", self.title)
        } else {
            self.title.clone()
        }
    }
}

/// `uv run --python 3.11`, the prefix for running under the recommended version.
pub fn uv_python_command(policy: &VersionPolicy) -> String {
    format!("uv run --python {}", policy.recommended)
}

fn uv_option(platform: Platform, policy: &VersionPolicy) -> InstructionGroup {
    let installer = match platform {
        Platform::Windows => UV_INSTALL_PS1,
        Platform::MacOS | Platform::Linux => UV_INSTALL_SH,
    };
    let python_install = format!("uv python install {}", policy.recommended);
    let run = format!("{} {}", uv_python_command(policy), SERVER_COMMAND);

    InstructionGroup {
        title: "Option 1: Using uv".to_string(),
        recommended: true,
        steps: vec![
            InstructionStep::labeled("Install uv:", &[installer]),
            InstructionStep::labeled("Install Python:", &[python_install.as_str()]),
            InstructionStep::labeled("Use this project:", &[run.as_str()]),
        ],
    }
}

fn conda_option(policy: &VersionPolicy) -> InstructionGroup {
    let create = format!(
        "conda create -n {} python={}",
        SERVER_COMMAND, policy.recommended
    );
    let activate = format!("conda activate {}", SERVER_COMMAND);

    InstructionGroup {
        title: "Option 3: Using conda".to_string(),
        recommended: false,
        steps: vec![InstructionStep::bare(&[create.as_str(), activate.as_str()])],
    }
}

/// How to get a supported Python interpreter on `platform`.
pub fn python_install_guide(platform: Platform, policy: &VersionPolicy) -> Vec<InstructionGroup> {
    let pyenv_install = format!("pyenv install {}", RECOMMENDED_PATCH_RELEASE);
    let pyenv_global = format!("pyenv global {}", RECOMMENDED_PATCH_RELEASE);
    let pyenv_local = format!("pyenv local {}", RECOMMENDED_PATCH_RELEASE);
    let download = format!(
        "Download from: https://www.python.org/downloads/release/python-{}/",
        RECOMMENDED_PATCH_RELEASE.replace('.', "")
    );

    match platform {
        Platform::Windows => vec![
            uv_option(platform, policy),
            InstructionGroup {
                title: "Option 2: Using pyenv-win".to_string(),
                recommended: false,
                steps: vec![
                    InstructionStep::labeled(
                        "Install pyenv-win:",
                        &["Invoke-WebRequest -Uri https://raw.githubusercontent.com/pyenv-win/pyenv-win/master/pyenv-win/install-pyenv-win.ps1 -OutFile ./install-pyenv-win.ps1; &./install-pyenv-win.ps1"],
                    ),
                    InstructionStep::labeled(
                        "Install Python:",
                        &[pyenv_install.as_str(), pyenv_global.as_str()],
                    ),
                ],
            },
            InstructionGroup {
                title: "Option 3: Manual download".to_string(),
                recommended: false,
                steps: vec![InstructionStep::bare(&[
                    download.as_str(),
                    "Install and add to PATH",
                ])],
            },
        ],
        Platform::MacOS | Platform::Linux => {
            let pyenv_installer = if platform == Platform::MacOS {
                "brew install pyenv"
            } else {
                "curl https://pyenv.run | bash"
            };
            vec![
                uv_option(platform, policy),
                InstructionGroup {
                    title: "Option 2: Using pyenv".to_string(),
                    recommended: true,
                    steps: vec![
                        InstructionStep::labeled("Install pyenv:", &[pyenv_installer]),
                        InstructionStep::labeled(
                            "Install Python:",
                            &[pyenv_install.as_str(), pyenv_local.as_str()],
                        ),
                    ],
                },
                conda_option(policy),
            ]
        }
    }
}

/// How to install `uv` on `platform`.
pub fn uv_install_guide(platform: Platform) -> Vec<InstructionGroup> {
    let steps = match platform {
        Platform::Windows => vec![
            InstructionStep::labeled("Run this in PowerShell:", &[UV_INSTALL_PS1]),
            InstructionStep::bare(&[format!("Or download from: {}", UV_DOWNLOAD_PAGE).as_str()]),
        ],
        Platform::MacOS => vec![InstructionStep::labeled(
            "Run one of these commands:",
            &[UV_INSTALL_SH, "brew install uv"],
        )],
        Platform::Linux => vec![InstructionStep::bare(&[UV_INSTALL_SH])],
    };

    vec![InstructionGroup {
        title: "Install uv".to_string(),
        recommended: false,
        steps,
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_commands(groups: &[InstructionGroup]) -> Vec<String> {
        groups
            .iter()
            .flat_map(|g| g.steps.iter())
            .flat_map(|s| s.commands.iter().cloned())
            .collect()
    }

    #[test]
    fn python_guide_has_three_options_everywhere() {
        let policy = VersionPolicy::default();
        for platform in [Platform::Windows, Platform::MacOS, Platform::Linux] {
            let guide = python_install_guide(platform, &policy);
            assert_eq!(guide.len(), 3, "{:?}", platform);
            assert!(guide[0].recommended);
            assert!(guide[0].title.contains("uv"));
        }
    }

    #[test]
    fn windows_python_guide_uses_powershell_and_pyenv_win() {
        let guide = python_install_guide(Platform::Windows, &VersionPolicy::default());
        let commands = all_commands(&guide);
        assert!(commands.iter().any(|c| c.contains("install.ps1 | iex")));
        assert!(commands.iter().any(|c| c == "pyenv global 3.11.9"));
        assert!(commands.iter().any(|c| c.contains("python-3119")));
        assert!(guide[1].title.contains("pyenv-win"));
    }

    #[test]
    fn macos_python_guide_uses_brew_pyenv() {
        let guide = python_install_guide(Platform::MacOS, &VersionPolicy::default());
        let commands = all_commands(&guide);
        assert!(commands.iter().any(|c| c == "brew install pyenv"));
        assert!(commands.iter().any(|c| c == "conda activate xugu-mcp"));
    }

    #[test]
    fn linux_python_guide_uses_pyenv_run() {
        let guide = python_install_guide(Platform::Linux, &VersionPolicy::default());
        let commands = all_commands(&guide);
        assert!(commands.iter().any(|c| c == "curl https://pyenv.run | bash"));
        assert!(commands.iter().any(|c| c == "uv run --python 3.11 xugu-mcp"));
    }

    #[test]
    fn uv_guide_per_platform() {
        let windows = all_commands(&uv_install_guide(Platform::Windows));
        assert!(windows[0].contains("install.ps1"));

        let macos = all_commands(&uv_install_guide(Platform::MacOS));
        assert_eq!(macos, vec![UV_INSTALL_SH.to_string(), "brew install uv".to_string()]);

        let linux = all_commands(&uv_install_guide(Platform::Linux));
        assert_eq!(linux, vec![UV_INSTALL_SH.to_string()]);
    }

    #[test]
    fn display_title_marks_recommended() {
        let guide = python_install_guide(Platform::Linux, &VersionPolicy::default());
        assert_eq!(guide[0].display_title(), "Option 1: Using uv (Recommended)");
        assert_eq!(guide[2].display_title(), "Option 3: Using conda");
    }

    #[test]
    fn uv_python_command_uses_recommended() {
        assert_eq!(
            uv_python_command(&VersionPolicy::default()),
            "uv run --python 3.11"
        );
    }
}
