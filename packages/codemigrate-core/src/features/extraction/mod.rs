//! Structural extraction: Java source text → source structural model

mod body_lowering;
mod java;

pub use body_lowering::lower_block;
pub use java::{extract_structure, parse_java};
