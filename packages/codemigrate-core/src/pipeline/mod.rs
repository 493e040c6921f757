//! Pipeline orchestration
//!
//! One migration call runs the stages strictly in sequence — extract, map,
//! generate, validate — each consuming the complete output of the previous
//! one. Only the extraction boundary can fail; everything after it degrades
//! into placeholders or report diagnostics instead of errors.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::MigrationConfig;
use crate::error::Result;
use crate::features::codegen::{format_code, generate_code};
use crate::features::extraction::extract_structure;
use crate::features::mapping::map_structure;
use crate::features::validation::validate_migration;
use crate::shared::models::{TargetStructure, ValidationReport};

/// Everything one migration call produces: the mapped model, the formatted
/// module text, and the validation report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MigrationOutcome {
    pub structure: TargetStructure,
    pub code: String,
    pub report: ValidationReport,
}

/// Migrate one Java compilation unit to Python source text.
pub fn migrate_source(java_source: &str, config: &MigrationConfig) -> Result<MigrationOutcome> {
    let source = extract_structure(java_source)?;
    info!(classes = source.classes.len(), "extraction complete");

    let structure = map_structure(&source);
    let code = format_code(&generate_code(&structure, config));
    let report = validate_migration(java_source, &code, Some(&structure), config);

    info!(status = ?report.overall_status, "migration complete");
    Ok(MigrationOutcome {
        structure,
        code,
        report,
    })
}
