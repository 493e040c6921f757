//! Feature modules, one per pipeline stage

pub mod codegen;
pub mod extraction;
pub mod mapping;
pub mod validation;
