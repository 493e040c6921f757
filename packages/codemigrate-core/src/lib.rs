/*
 * codemigrate - structural Java → Python migration
 *
 * A deterministic, auditable first pass over a legacy codebase prior to
 * manual completion, not an automatic semantically-equivalent translator.
 *
 * Layout:
 * - shared/    : structural models for both sides, body nodes, report types
 * - features/  : vertical slices (extraction → mapping → codegen → validation)
 * - pipeline/  : orchestration
 */

/// Shared models
pub mod shared;

/// Feature modules (pipeline stages)
pub mod features;

/// Pipeline orchestration
pub mod pipeline;

/// Configuration
pub mod config;

/// Error types
pub mod error;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use config::MigrationConfig;
pub use error::{MigrateError, Result};
pub use features::codegen::{format_code, generate_code};
pub use features::extraction::extract_structure;
pub use features::mapping::{map_identifier, map_structure, map_type};
pub use features::validation::validate_migration;
pub use pipeline::{migrate_source, MigrationOutcome};
pub use shared::models::{
    CheckResult, OverallStatus, SourceStructure, TargetStructure, ValidationReport,
};
