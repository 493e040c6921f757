//! Shared models

mod body;
mod report;
mod source;
mod target;

pub use body::{ExpressionNode, StatementNode};
pub use report::{CheckResult, OverallStatus, ValidationReport};
pub use source::{
    ClassModel, ConstructorModel, FieldModel, LiteralValue, MethodModel, ModifierSet,
    ParameterModel, SourceStructure,
};
pub use target::{
    PyClass, PyConstructor, PyField, PyMethod, PyParameter, TargetStructure,
};
