//! Source-side structural model
//!
//! The normalized, language-agnostic record of a Java compilation unit as
//! produced by the structural extractor. Every model here is created fresh
//! per migration call and never outlives it.

use serde::{Deserialize, Serialize};

use super::body::StatementNode;

/// One compilation unit: package, imports, classes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceStructure {
    pub package: Option<String>,
    pub imports: Vec<String>,
    pub classes: Vec<ClassModel>,
}

impl SourceStructure {
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

/// A class declaration.
///
/// `name` is always non-empty; uniqueness across a compilation unit is not
/// enforced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassModel {
    pub name: String,
    pub modifiers: ModifierSet,
    pub superclass: Option<String>,
    pub interfaces: Vec<String>,
    pub fields: Vec<FieldModel>,
    pub methods: Vec<MethodModel>,
    pub constructors: Vec<ConstructorModel>,
}

/// A field declaration. One record per declarator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldModel {
    pub name: String,
    pub ty: String,
    pub modifiers: ModifierSet,
    /// Single resolved scalar, or absent. Nested literal expressions are not
    /// folded beyond one level.
    pub initializer: Option<LiteralValue>,
}

/// A method declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodModel {
    pub name: String,
    pub modifiers: ModifierSet,
    pub return_type: String,
    pub parameters: Vec<ParameterModel>,
    /// Absent for abstract/interface methods.
    pub body: Option<Vec<StatementNode>>,
}

/// A constructor declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConstructorModel {
    pub name: String,
    pub modifiers: ModifierSet,
    pub parameters: Vec<ParameterModel>,
    pub body: Option<Vec<StatementNode>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterModel {
    pub name: String,
    pub ty: String,
}

/// The four modifier flags the mapper cares about, parsed from raw tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifierSet {
    pub private: bool,
    pub is_static: bool,
    pub is_final: bool,
    pub is_abstract: bool,
}

impl ModifierSet {
    /// Parse from raw Java modifier tokens (`public`, `private`, `static`, ...).
    /// Unknown tokens are ignored.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Self {
        let mut set = Self::default();
        for token in tokens {
            match token.as_ref() {
                "private" => set.private = true,
                "static" => set.is_static = true,
                "final" => set.is_final = true,
                "abstract" => set.is_abstract = true,
                _ => {}
            }
        }
        set
    }

    /// `static` fields become class variables on the Python side.
    pub fn is_class_variable(&self) -> bool {
        self.is_static
    }

    /// `static final` fields become module-style constants.
    pub fn is_constant(&self) -> bool {
        self.is_static && self.is_final
    }
}

/// A literal initializer resolved to a single scalar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum LiteralValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}
