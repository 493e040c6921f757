//! Semantic mapper
//!
//! Pure transformation from the source structural model to the target model.
//! Never raises: unknown inputs degrade to identity mapping or an absent
//! value, and correctness checking is deferred to the validator.

use tracing::debug;

use crate::shared::models::{
    ClassModel, ConstructorModel, FieldModel, LiteralValue, MethodModel, ModifierSet,
    ParameterModel, PyClass, PyConstructor, PyField, PyMethod, PyParameter, SourceStructure,
    TargetStructure,
};

use super::identifiers::{map_identifier, to_constant_case};
use super::types::{map_imports, map_type};

/// Derive the four modifier flags from raw modifier tokens.
pub fn map_modifiers<S: AsRef<str>>(tokens: &[S]) -> ModifierSet {
    ModifierSet::from_tokens(tokens)
}

/// Render a literal scalar as Python source text.
fn render_literal(value: &LiteralValue) -> String {
    match value {
        LiteralValue::Str(s) => format!("\"{}\"", s),
        LiteralValue::Int(i) => i.to_string(),
        LiteralValue::Float(f) => {
            let text = f.to_string();
            if text.contains('.') {
                text
            } else {
                format!("{}.0", text)
            }
        }
        LiteralValue::Bool(b) => if *b { "True" } else { "False" }.to_string(),
    }
}

/// Map a field declaration.
///
/// Name precedence: private fields get a `_` prefix; otherwise `static final`
/// fields are renamed to CONSTANT_CASE, overriding normal case conversion
/// regardless of the original casing; otherwise the name is kept as-is.
pub fn map_field(field: &FieldModel) -> PyField {
    let is_constant = field.modifiers.is_constant();
    let python_name = if field.modifiers.private {
        format!("_{}", field.name)
    } else if is_constant {
        to_constant_case(&field.name)
    } else {
        field.name.clone()
    };

    PyField {
        source_name: field.name.clone(),
        python_name,
        ty: map_type(&field.ty),
        is_class_variable: field.modifiers.is_class_variable(),
        is_constant,
        is_private: field.modifiers.private,
        initializer: field.initializer.as_ref().map(render_literal),
    }
}

fn map_parameter(param: &ParameterModel) -> PyParameter {
    let ty = map_type(&param.ty);
    PyParameter {
        annotation: format!("{}: {}", param.name, ty),
        name: param.name.clone(),
        ty,
    }
}

/// Map a method declaration: snake-case renaming, parameter and return type
/// mapping, and the decorator set derived from the modifiers.
pub fn map_method(method: &MethodModel) -> PyMethod {
    let snake = map_identifier(&method.name);
    let python_name = if method.modifiers.private {
        format!("_{}", snake)
    } else {
        snake
    };

    let mut decorators = Vec::new();
    if method.modifiers.is_static {
        decorators.push("@staticmethod".to_string());
    }
    if method.modifiers.is_abstract {
        decorators.push("@abstractmethod".to_string());
    }

    PyMethod {
        python_name,
        decorators,
        parameters: method.parameters.iter().map(map_parameter).collect(),
        return_type: map_type(&method.return_type),
        is_static: method.modifiers.is_static,
        is_abstract: method.modifiers.is_abstract,
        is_private: method.modifiers.private,
        body: method.body.clone(),
    }
}

/// Map a constructor to an `__init__` record.
pub fn map_constructor(ctor: &ConstructorModel) -> PyConstructor {
    PyConstructor {
        parameters: ctor.parameters.iter().map(map_parameter).collect(),
        body: ctor.body.clone(),
    }
}

/// Map a class: base classes keep declaration order (superclass first, then
/// interfaces).
pub fn map_class(class: &ClassModel) -> PyClass {
    let mut base_classes = Vec::new();
    if let Some(superclass) = &class.superclass {
        base_classes.push(superclass.clone());
    }
    base_classes.extend(class.interfaces.iter().cloned());

    PyClass {
        name: class.name.clone(),
        base_classes,
        is_abstract: class.modifiers.is_abstract,
        fields: class.fields.iter().map(map_field).collect(),
        methods: class.methods.iter().map(map_method).collect(),
        constructors: class.constructors.iter().map(map_constructor).collect(),
    }
}

/// Map a full compilation unit. Classes keep declaration order; the import
/// list is deduplicated and sorted.
pub fn map_structure(source: &SourceStructure) -> TargetStructure {
    debug!(
        classes = source.classes.len(),
        imports = source.imports.len(),
        "mapping source structure"
    );

    TargetStructure {
        imports: map_imports(&source.imports),
        classes: source.classes.iter().map(map_class).collect(),
    }
}
