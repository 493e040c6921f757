//! Validation: independent checks over the rendered text, aggregated into a
//! tri-state report

mod checks;
mod subprocess;
mod syntax;
mod validator;

pub use checks::{check_annotations, check_imports, check_naming, check_structure};
pub use subprocess::{
    run_execution_check, run_static_analysis, run_with_timeout, ExecutionCheck, SubprocessOutcome,
};
pub use syntax::check_syntax;
pub use validator::validate_migration;
