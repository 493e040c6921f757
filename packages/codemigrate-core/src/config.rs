//! Migration configuration
//!
//! Deserializable with per-field defaults so partial configs stay valid.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MigrationConfig {
    /// Spaces per indentation level in generated code.
    #[serde(default = "default_indent_size")]
    pub indent_size: usize,

    /// Shell out to the external linter during validation.
    #[serde(default = "default_true")]
    pub run_static_analysis: bool,

    /// Execute the generated module in a subprocess. Off by default: modules
    /// referencing unmapped custom types raise NameError at import time even
    /// when the migration itself is fine.
    #[serde(default)]
    pub run_execution_check: bool,

    /// Timeout for the execution smoke test.
    #[serde(default = "default_execution_timeout_ms")]
    pub execution_timeout_ms: u64,

    /// Timeout for the linter shell-out.
    #[serde(default = "default_lint_timeout_ms")]
    pub lint_timeout_ms: u64,

    /// Interpreter used by the execution smoke test.
    #[serde(default = "default_python_executable")]
    pub python_executable: String,

    /// External linter binary.
    #[serde(default = "default_linter")]
    pub linter: String,
}

fn default_indent_size() -> usize {
    4
}

fn default_true() -> bool {
    true
}

fn default_execution_timeout_ms() -> u64 {
    5_000
}

fn default_lint_timeout_ms() -> u64 {
    10_000
}

fn default_python_executable() -> String {
    "python3".to_string()
}

fn default_linter() -> String {
    "flake8".to_string()
}

impl Default for MigrationConfig {
    fn default() -> Self {
        Self {
            indent_size: default_indent_size(),
            run_static_analysis: true,
            run_execution_check: false,
            execution_timeout_ms: default_execution_timeout_ms(),
            lint_timeout_ms: default_lint_timeout_ms(),
            python_executable: default_python_executable(),
            linter: default_linter(),
        }
    }
}

impl MigrationConfig {
    /// One indentation level.
    pub fn indent(&self) -> String {
        " ".repeat(self.indent_size)
    }
}
