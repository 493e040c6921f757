//! Target-side structural model
//!
//! The Python-shaped tree produced by the semantic mapper. Built entirely
//! fresh from the source tree, with no aliasing back into it; the generator
//! reads it without mutation.

use serde::{Deserialize, Serialize};

use super::body::StatementNode;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TargetStructure {
    /// Deduplicated, sorted Python import statements.
    pub imports: Vec<String>,
    pub classes: Vec<PyClass>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PyClass {
    pub name: String,
    /// Superclass first, then implemented interfaces, in declaration order.
    pub base_classes: Vec<String>,
    pub is_abstract: bool,
    pub fields: Vec<PyField>,
    pub methods: Vec<PyMethod>,
    pub constructors: Vec<PyConstructor>,
}

impl PyClass {
    /// Fields rendered at class level (constants and class variables).
    pub fn class_level_fields(&self) -> impl Iterator<Item = &PyField> {
        self.fields
            .iter()
            .filter(|f| f.is_class_variable || f.is_constant)
    }

    /// Fields assigned per instance inside `__init__`.
    pub fn instance_fields(&self) -> impl Iterator<Item = &PyField> {
        self.fields
            .iter()
            .filter(|f| !f.is_class_variable && !f.is_constant)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PyField {
    /// Original Java field name; constructor parameters are matched on it.
    pub source_name: String,
    /// Name after the private-prefix / constant-casing rules.
    pub python_name: String,
    /// Mapped Python type.
    pub ty: String,
    pub is_class_variable: bool,
    pub is_constant: bool,
    pub is_private: bool,
    /// Rendered Python literal text, or absent.
    pub initializer: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PyMethod {
    /// Snake-case name, `_`-prefixed when the Java method was private.
    pub python_name: String,
    pub decorators: Vec<String>,
    pub parameters: Vec<PyParameter>,
    pub return_type: String,
    pub is_static: bool,
    pub is_abstract: bool,
    pub is_private: bool,
    pub body: Option<Vec<StatementNode>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PyConstructor {
    pub parameters: Vec<PyParameter>,
    pub body: Option<Vec<StatementNode>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PyParameter {
    pub name: String,
    pub ty: String,
    /// `name: ty` as rendered in a signature.
    pub annotation: String,
}
