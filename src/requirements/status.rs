//! Check outcome types.
//!
//! Each individual check produces a [`CheckOutcome`]; the aggregate of all
//! checks is a [`CheckResult`], which can be rendered as a warning block for
//! an LLM host or serialized as JSON.

use serde::Serialize;

/// Header line of the rendered warning block.
pub const WARNING_HEADER: &str = "⚠️ ENVIRONMENT WARNING:";

/// The result of a single check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    pub valid: bool,
    pub message: String,
}

impl CheckOutcome {
    pub fn pass(message: impl Into<String>) -> Self {
        Self {
            valid: true,
            message: message.into(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }
}

/// Aggregate result of all environment checks.
///
/// `is_valid` requires every check to pass, so a missing tool (listed under
/// `warnings`) still makes the environment invalid. Only built through
/// [`CheckResult::from_outcomes`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    is_valid: bool,
    warnings: Vec<String>,
    errors: Vec<String>,
}

impl CheckResult {
    /// Combine a version outcome (failures become errors) with a tool
    /// outcome (failures become warnings).
    pub fn from_outcomes(version: &CheckOutcome, tool: &CheckOutcome) -> Self {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        if !version.valid {
            errors.push(version.message.clone());
        }
        if !tool.valid {
            warnings.push(tool.message.clone());
        }

        Self {
            is_valid: version.valid && tool.valid,
            warnings,
            errors,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Tool problems, in check order.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Runtime version problems, in check order.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Render the warning block, or `None` when the environment is valid.
    pub fn warning_summary(&self) -> Option<String> {
        if self.is_valid {
            return None;
        }

        let mut lines = vec![WARNING_HEADER.to_string()];
        if !self.errors.is_empty() {
            lines.push(String::new());
            lines.push("Errors:".to_string());
            lines.extend(self.errors.iter().map(|e| format!("  - {}", e)));
        }
        if !self.warnings.is_empty() {
            lines.push(String::new());
            lines.push("Warnings:".to_string());
            lines.extend(self.warnings.iter().map(|w| format!("  - {}", w)));
        }

        Some(lines.join("\n"))
    }
}
