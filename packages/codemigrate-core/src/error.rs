//! Error types
//!
//! Only the extraction boundary is fallible. Past it, the deterministic core
//! never returns an error: the mapper degrades silently, the generator emits
//! visible placeholders, and the validator folds every anomaly (including
//! subprocess timeouts) into report diagnostics.

use thiserror::Error;

/// Migration errors, all raised at the upstream extraction boundary.
#[derive(Error, Debug, Clone)]
pub enum MigrateError {
    /// Java source failed to parse.
    #[error("Failed to parse Java source: {reason}")]
    Parse { reason: String },

    /// Tree-sitter grammar initialization failed.
    #[error("Failed to initialize tree-sitter language: {0}")]
    Language(String),

    /// The unit parsed but contains nothing to migrate.
    #[error("Source contains no classes; nothing to migrate")]
    EmptyStructure,
}

impl MigrateError {
    pub fn parse(reason: impl Into<String>) -> Self {
        Self::Parse {
            reason: reason.into(),
        }
    }

    pub fn language(reason: impl Into<String>) -> Self {
        Self::Language(reason.into())
    }

    /// Category string for logs and report surfaces.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Parse { .. } => "parse",
            Self::Language(_) => "language",
            Self::EmptyStructure => "empty_structure",
        }
    }
}

/// Result type alias for migration operations.
pub type Result<T> = std::result::Result<T, MigrateError>;
