//! Validation report models
//!
//! The validator's externally visible contract: a tri-state overall status,
//! per-check results, and flattened error/warning lists.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Tri-state validation outcome.
///
/// `Failed` is reserved for the syntax check and the execution smoke test;
/// every other diagnostic degrades the status to `Warning` at worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverallStatus {
    Success,
    Warning,
    Failed,
}

/// Result of one independent check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    pub passed: bool,
    pub diagnostics: Vec<String>,
}

impl CheckResult {
    pub fn pass() -> Self {
        Self {
            passed: true,
            diagnostics: Vec::new(),
        }
    }

    pub fn from_diagnostics(diagnostics: Vec<String>) -> Self {
        Self {
            passed: diagnostics.is_empty(),
            diagnostics,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    pub overall_status: OverallStatus,
    /// Keyed by check name; BTreeMap keeps report output deterministic.
    pub checks: BTreeMap<String, CheckResult>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn is_failed(&self) -> bool {
        self.overall_status == OverallStatus::Failed
    }
}
