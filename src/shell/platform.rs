//! Platform and execution-context detection.

/// Operating system family, for choosing install instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Windows,
    MacOS,
    /// Linux and every other Unix-like system.
    Linux,
}

impl Platform {
    /// Detect the current platform.
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::MacOS
        } else if cfg!(target_os = "windows") {
            Platform::Windows
        } else {
            Platform::Linux
        }
    }
}

/// Environment variables that mark a CI run.
pub const CI_ENV_VARS: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "CIRCLECI",
    "TRAVIS",
    "JENKINS_URL",
];

/// Check if running in a CI environment.
///
/// Used by `main()` to pick the plain, non-interactive UI.
pub fn is_ci() -> bool {
    detect_ci(|name| std::env::var_os(name).is_some())
}

/// CI detection over an arbitrary variable lookup.
fn detect_ci(is_set: impl Fn(&str) -> bool) -> bool {
    CI_ENV_VARS.iter().any(|name| is_set(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_matches_target() {
        let platform = Platform::current();
        if cfg!(target_os = "windows") {
            assert_eq!(platform, Platform::Windows);
        } else if cfg!(target_os = "macos") {
            assert_eq!(platform, Platform::MacOS);
        } else {
            assert_eq!(platform, Platform::Linux);
        }
    }

    #[test]
    fn detect_ci_from_any_marker() {
        assert!(detect_ci(|name| name == "CI"));
        assert!(detect_ci(|name| name == "GITHUB_ACTIONS"));
        assert!(detect_ci(|name| name == "JENKINS_URL"));
        assert!(!detect_ci(|_| false));
        assert!(!detect_ci(|name| name == "HOME"));
    }

    #[test]
    fn is_ci_matches_process_environment() {
        let expected = CI_ENV_VARS
            .iter()
            .any(|name| std::env::var_os(name).is_some());
        assert_eq!(is_ci(), expected);
    }
}
