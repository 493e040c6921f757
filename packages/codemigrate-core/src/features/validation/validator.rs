//! Migration validation
//!
//! Runs the check battery over the rendered text (plus, optionally, the
//! target tree) and aggregates a tri-state status: `failed` when the syntax
//! check or the execution smoke test fails, `warning` when any other check
//! produced diagnostics, `success` otherwise.

use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::config::MigrationConfig;
use crate::shared::models::{CheckResult, OverallStatus, TargetStructure, ValidationReport};

use super::checks::{check_annotations, check_imports, check_naming, check_structure};
use super::subprocess::{run_execution_check, run_static_analysis};
use super::syntax::check_syntax;

pub fn validate_migration(
    source_text: &str,
    generated: &str,
    target: Option<&TargetStructure>,
    config: &MigrationConfig,
) -> ValidationReport {
    debug!(
        source_len = source_text.len(),
        generated_len = generated.len(),
        "validating migration"
    );

    let mut checks: BTreeMap<String, CheckResult> = BTreeMap::new();
    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut hard_failure = false;

    let syntax = check_syntax(generated);
    if !syntax.passed {
        errors.extend(syntax.diagnostics.iter().cloned());
        hard_failure = true;
    }
    checks.insert("syntax".to_string(), syntax);

    if let Some(target) = target {
        let structure = check_structure(target);
        warnings.extend(structure.diagnostics.iter().cloned());
        checks.insert("structure".to_string(), structure);
    }

    let naming = check_naming(generated);
    warnings.extend(naming.diagnostics.iter().cloned());
    checks.insert("naming".to_string(), naming);

    let imports = check_imports(generated);
    warnings.extend(imports.diagnostics.iter().cloned());
    checks.insert("imports".to_string(), imports);

    let annotations = check_annotations(generated);
    warnings.extend(annotations.diagnostics.iter().cloned());
    checks.insert("type_annotations".to_string(), annotations);

    if config.run_static_analysis {
        let static_analysis = run_static_analysis(generated, config);
        warnings.extend(static_analysis.diagnostics.iter().cloned());
        checks.insert("static_analysis".to_string(), static_analysis);
    }

    if config.run_execution_check {
        let execution = run_execution_check(generated, config);
        if execution.hard_failure {
            errors.extend(execution.result.diagnostics.iter().cloned());
        } else {
            warnings.extend(execution.result.diagnostics.iter().cloned());
        }
        hard_failure = hard_failure || execution.hard_failure;
        checks.insert("execution".to_string(), execution.result);
    }

    let overall_status = if hard_failure {
        OverallStatus::Failed
    } else if !warnings.is_empty() {
        OverallStatus::Warning
    } else {
        OverallStatus::Success
    };

    info!(?overall_status, errors = errors.len(), warnings = warnings.len(), "validation done");

    ValidationReport {
        overall_status,
        checks,
        errors,
        warnings,
    }
}
