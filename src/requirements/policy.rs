//! Supported Python version range.
//!
//! Versions are compared on `(major, minor)` only; the patch component of a
//! [`RuntimeVersion`] is carried for display.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// A `(major, minor)` version pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct MajorMinor {
    pub major: u32,
    pub minor: u32,
}

impl MajorMinor {
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }
}

impl fmt::Display for MajorMinor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Snapshot of an interpreter's version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RuntimeVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

static PYTHON_VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:python\s+)?(\d+)\.(\d+)(?:\.(\d+))?").expect("valid version regex")
});

impl RuntimeVersion {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// The comparable part of the version.
    pub fn major_minor(&self) -> MajorMinor {
        MajorMinor::new(self.major, self.minor)
    }

    /// Parse interpreter `--version` output such as `Python 3.11.2`.
    ///
    /// Pre-release suffixes (`3.13.0rc1`) are ignored and a missing patch
    /// component defaults to 0.
    pub fn parse(output: &str) -> Option<Self> {
        let caps = PYTHON_VERSION_RE.captures(output.trim())?;
        let major = caps.get(1)?.as_str().parse().ok()?;
        let minor = caps.get(2)?.as_str().parse().ok()?;
        let patch = caps
            .get(3)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0);
        Some(Self::new(major, minor, patch))
    }
}

impl fmt::Display for RuntimeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Where a version sits relative to a [`VersionPolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionFit {
    TooOld,
    Supported,
    Recommended,
    TooNew,
}

impl VersionFit {
    pub fn is_supported(self) -> bool {
        matches!(self, Self::Supported | Self::Recommended)
    }
}

/// Minimum, maximum and recommended Python versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VersionPolicy {
    pub min: MajorMinor,
    pub max: MajorMinor,
    pub recommended: MajorMinor,
}

impl Default for VersionPolicy {
    fn default() -> Self {
        Self::PYTHON
    }
}

impl VersionPolicy {
    /// The range the XuguDB MCP server is tested against.
    pub const PYTHON: Self = Self {
        min: MajorMinor::new(3, 6),
        max: MajorMinor::new(3, 11),
        recommended: MajorMinor::new(3, 11),
    };

    /// Classify a version against this policy.
    pub fn classify(&self, version: &RuntimeVersion) -> VersionFit {
        let mm = version.major_minor();
        if mm > self.max {
            VersionFit::TooNew
        } else if mm < self.min {
            VersionFit::TooOld
        } else if mm == self.recommended {
            VersionFit::Recommended
        } else {
            VersionFit::Supported
        }
    }

    /// Whether `min <= (major, minor) <= max`.
    pub fn contains(&self, version: &RuntimeVersion) -> bool {
        self.classify(version).is_supported()
    }

    /// Human form of the supported range, e.g. `3.6-3.11`.
    pub fn range_label(&self) -> String {
        format!("{}-{}", self.min, self.max)
    }
}
