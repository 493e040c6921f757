//! Code generation: target structural model → formatted Python source

mod generator;
mod translator;

pub use generator::{format_code, CodeGenerator};
pub use translator::{translate_body, translate_statement, TranslationContext};

use crate::config::MigrationConfig;
use crate::shared::models::TargetStructure;

/// Render a target model with the given configuration.
pub fn generate_code(target: &TargetStructure, config: &MigrationConfig) -> String {
    CodeGenerator::new(config).generate_code(target)
}
