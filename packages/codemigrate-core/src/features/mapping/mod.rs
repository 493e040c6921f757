//! Semantic mapping: source structural model → target structural model

mod identifiers;
mod mapper;
mod types;

pub use identifiers::{map_identifier, to_constant_case};
pub use mapper::{
    map_class, map_constructor, map_field, map_method, map_modifiers, map_structure,
};
pub use types::{map_imports, map_type};
