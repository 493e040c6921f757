//! Python code generator
//!
//! Renders the target structural model to source text. Never fails for a
//! well-formed model: anything it cannot translate degrades to a visible,
//! clearly-marked placeholder instead of an error.

use tracing::debug;

use crate::config::MigrationConfig;
use crate::shared::models::{PyClass, PyConstructor, PyField, PyMethod, PyParameter, TargetStructure};

use super::translator::{translate_body, TranslationContext};

/// Placeholder body for methods without a translatable statement list.
const UNTRANSLATED_BODY: &str = "\"\"\"untranslated\"\"\"";

pub struct CodeGenerator {
    indent: String,
}

impl CodeGenerator {
    pub fn new(config: &MigrationConfig) -> Self {
        Self {
            indent: config.indent(),
        }
    }

    fn indent_line(&self, line: &str, level: usize) -> String {
        if line.is_empty() {
            String::new()
        } else {
            format!("{}{}", self.indent.repeat(level), line)
        }
    }

    /// Render one field declaration line.
    ///
    /// Class-level fields keep their bare name; instance fields are assigned
    /// on `self`, defaulting to `None` without an initializer.
    pub fn generate_field(&self, field: &PyField, class_level: bool) -> String {
        if class_level || field.is_class_variable {
            match &field.initializer {
                Some(init) => format!("{}: {} = {}", field.python_name, field.ty, init),
                None => format!("{}: {}", field.python_name, field.ty),
            }
        } else {
            match &field.initializer {
                Some(init) => format!("self.{}: {} = {}", field.python_name, field.ty, init),
                None => format!("self.{}: {} = None", field.python_name, field.ty),
            }
        }
    }

    fn parameter_list(&self, parameters: &[PyParameter], include_self: bool) -> String {
        let mut parts = Vec::with_capacity(parameters.len() + 1);
        if include_self {
            parts.push("self".to_string());
        }
        parts.extend(parameters.iter().map(|p| p.annotation.clone()));
        parts.join(", ")
    }

    /// Render `__init__` from a constructor record and the class's instance
    /// fields. Each field is assigned from an identically-named parameter
    /// when one exists, falling back to its initializer, then to `None`.
    pub fn generate_constructor(&self, ctor: &PyConstructor, class: &PyClass) -> Vec<String> {
        let mut lines = vec![format!(
            "def __init__({}):",
            self.parameter_list(&ctor.parameters, true)
        )];

        let mut assigned = false;
        for field in class.instance_fields() {
            // A parameter named after the original field carries its value.
            let assignment = if ctor
                .parameters
                .iter()
                .any(|p| p.name == field.source_name)
            {
                format!(
                    "self.{}: {} = {}",
                    field.python_name, field.ty, field.source_name
                )
            } else {
                self.generate_field(field, false)
            };
            lines.push(self.indent_line(&assignment, 1));
            assigned = true;
        }

        if !assigned {
            lines.push(self.indent_line("pass", 1));
        }
        lines
    }

    /// Synthesize the default constructor for a class with instance fields
    /// but no declared constructor: one annotated parameter per field.
    fn synthesize_constructor(&self, class: &PyClass) -> PyConstructor {
        PyConstructor {
            parameters: class
                .instance_fields()
                .map(|f| PyParameter {
                    name: f.source_name.clone(),
                    ty: f.ty.clone(),
                    annotation: format!("{}: {}", f.source_name, f.ty),
                })
                .collect(),
            body: None,
        }
    }

    /// Render a method: decorators, annotated signature, body.
    pub fn generate_method(&self, method: &PyMethod, class_name: &str) -> Vec<String> {
        let mut lines = Vec::new();
        for decorator in &method.decorators {
            lines.push(decorator.clone());
        }

        let params = self.parameter_list(&method.parameters, !method.is_static);
        lines.push(format!(
            "def {}({}) -> {}:",
            method.python_name, params, method.return_type
        ));

        match &method.body {
            Some(statements) if !statements.is_empty() => {
                let ctx = TranslationContext {
                    class_name,
                    is_static: method.is_static,
                };
                for line in translate_body(statements, &ctx) {
                    lines.push(self.indent_line(&line, 1));
                }
            }
            _ => {
                lines.push(self.indent_line(UNTRANSLATED_BODY, 1));
                lines.push(self.indent_line("pass", 1));
            }
        }
        lines
    }

    /// Render one class. Emission order: docstring, class-level
    /// constants/variables, constructor, methods. Only the first declared
    /// constructor is rendered; overloads after it are dropped.
    pub fn generate_class(&self, class: &PyClass) -> String {
        let mut lines = Vec::new();

        if class.base_classes.is_empty() {
            lines.push(format!("class {}:", class.name));
        } else {
            lines.push(format!("class {}({}):", class.name, class.base_classes.join(", ")));
        }
        lines.push(self.indent_line(
            &format!("\"\"\"Migrated from the Java class {}.\"\"\"", class.name),
            1,
        ));
        lines.push(String::new());

        let class_vars: Vec<&PyField> = class.class_level_fields().collect();
        for field in &class_vars {
            lines.push(self.indent_line(&self.generate_field(field, true), 1));
        }
        if !class_vars.is_empty() {
            lines.push(String::new());
        }

        let has_instance_fields = class.instance_fields().next().is_some();
        let rendered_ctor = if let Some(first) = class.constructors.first() {
            if class.constructors.len() > 1 {
                debug!(
                    class = %class.name,
                    dropped = class.constructors.len() - 1,
                    "dropping overloaded constructors after the first"
                );
            }
            Some(self.generate_constructor(first, class))
        } else if has_instance_fields {
            Some(self.generate_constructor(&self.synthesize_constructor(class), class))
        } else {
            None
        };

        let has_ctor = rendered_ctor.is_some();
        if let Some(ctor_lines) = rendered_ctor {
            for line in ctor_lines {
                lines.push(self.indent_line(&line, 1));
            }
            lines.push(String::new());
        }

        for method in &class.methods {
            for line in self.generate_method(method, &class.name) {
                lines.push(self.indent_line(&line, 1));
            }
            lines.push(String::new());
        }

        if class_vars.is_empty() && !has_ctor && class.methods.is_empty() {
            lines.push(self.indent_line("pass", 1));
        }

        lines.join("\n")
    }

    fn generate_imports(&self, imports: &[String]) -> String {
        if imports.is_empty() {
            return String::new();
        }
        let mut all: Vec<String> = imports.to_vec();
        all.push("from typing import Dict, List, Any, Optional".to_string());
        all.sort();
        all.dedup();
        all.join("\n")
    }

    /// Render the full module: header comment, import block, classes in
    /// declaration order, trailing guarded entry-point stub.
    pub fn generate_code(&self, target: &TargetStructure) -> String {
        debug!(classes = target.classes.len(), "generating code");

        let mut parts = Vec::new();
        parts.push(
            "\"\"\"\nGenerated by codemigrate from Java source.\nTranslated bodies are a first \
             pass; manual completion is expected.\n\"\"\""
                .to_string(),
        );
        parts.push(String::new());

        let imports = self.generate_imports(&target.imports);
        if !imports.is_empty() {
            parts.push(imports);
            parts.push(String::new());
        }

        for class in &target.classes {
            parts.push(self.generate_class(class));
            parts.push(String::new());
        }

        parts.push("if __name__ == \"__main__\":".to_string());
        parts.push(self.indent_line("pass", 1));

        parts.join("\n")
    }
}

/// Purely textual post-pass: collapse runs of blank lines to at most one and
/// guarantee exactly one trailing newline.
pub fn format_code(code: &str) -> String {
    let mut formatted = Vec::new();
    let mut prev_blank = false;

    for line in code.lines() {
        let is_blank = line.trim().is_empty();
        if is_blank && prev_blank {
            continue;
        }
        formatted.push(if is_blank { "" } else { line });
        prev_blank = is_blank;
    }

    while formatted.last().is_some_and(|line| line.is_empty()) {
        formatted.pop();
    }

    let mut result = formatted.join("\n");
    result.push('\n');
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::models::{ExpressionNode, StatementNode};

    fn generator() -> CodeGenerator {
        CodeGenerator::new(&MigrationConfig::default())
    }

    fn plain_field(name: &str, ty: &str) -> PyField {
        PyField {
            source_name: name.to_string(),
            python_name: name.to_string(),
            ty: ty.to_string(),
            is_class_variable: false,
            is_constant: false,
            is_private: false,
            initializer: None,
        }
    }

    fn empty_class(name: &str) -> PyClass {
        PyClass {
            name: name.to_string(),
            base_classes: vec![],
            is_abstract: false,
            fields: vec![],
            methods: vec![],
            constructors: vec![],
        }
    }

    #[test]
    fn class_level_field_with_initializer() {
        let mut field = plain_field("MAX_SIZE", "int");
        field.is_constant = true;
        field.is_class_variable = true;
        field.initializer = Some("100".to_string());
        assert_eq!(generator().generate_field(&field, true), "MAX_SIZE: int = 100");
    }

    #[test]
    fn instance_field_defaults_to_none() {
        let field = plain_field("name", "str");
        assert_eq!(
            generator().generate_field(&field, false),
            "self.name: str = None"
        );
    }

    #[test]
    fn empty_class_gets_docstring_and_pass() {
        let code = generator().generate_class(&empty_class("Empty"));
        let expected = "class Empty:\n    \"\"\"Migrated from the Java class Empty.\"\"\"\n\n    pass";
        assert_eq!(code, expected);
    }

    #[test]
    fn single_field_synthesizes_constructor() {
        let mut class = empty_class("Holder");
        class.fields.push(plain_field("value", "int"));
        let code = generator().generate_class(&class);
        assert!(code.contains("def __init__(self, value: int):"));
        assert!(code.contains("self.value: int = value"));
        assert_eq!(code.matches("def __init__").count(), 1);
    }

    #[test]
    fn constructor_assigns_matching_parameters() {
        let mut class = empty_class("Person");
        class.fields.push(plain_field("name", "str"));
        class.fields.push(plain_field("age", "int"));
        class.constructors.push(PyConstructor {
            parameters: vec![
                PyParameter {
                    name: "name".into(),
                    ty: "str".into(),
                    annotation: "name: str".into(),
                },
                PyParameter {
                    name: "age".into(),
                    ty: "int".into(),
                    annotation: "age: int".into(),
                },
            ],
            body: None,
        });
        let code = generator().generate_class(&class);
        assert!(code.contains("self.name: str = name"));
        assert!(code.contains("self.age: int = age"));
    }

    #[test]
    fn private_field_assigned_from_unprefixed_parameter() {
        let mut class = empty_class("Person");
        let mut field = plain_field("name", "str");
        field.python_name = "_name".to_string();
        field.is_private = true;
        class.fields.push(field);
        class.constructors.push(PyConstructor {
            parameters: vec![PyParameter {
                name: "name".into(),
                ty: "str".into(),
                annotation: "name: str".into(),
            }],
            body: None,
        });
        let code = generator().generate_class(&class);
        assert!(code.contains("self._name: str = name"));
    }

    #[test]
    fn only_first_constructor_rendered() {
        let mut class = empty_class("Overloaded");
        class.fields.push(plain_field("value", "int"));
        class.constructors.push(PyConstructor {
            parameters: vec![PyParameter {
                name: "value".into(),
                ty: "int".into(),
                annotation: "value: int".into(),
            }],
            body: None,
        });
        class.constructors.push(PyConstructor {
            parameters: vec![],
            body: None,
        });
        let code = generator().generate_class(&class);
        assert_eq!(code.matches("def __init__").count(), 1);
        assert!(code.contains("def __init__(self, value: int):"));
    }

    #[test]
    fn static_method_without_self() {
        let method = PyMethod {
            python_name: "create".to_string(),
            decorators: vec!["@staticmethod".to_string()],
            parameters: vec![],
            return_type: "int".to_string(),
            is_static: true,
            is_abstract: false,
            is_private: false,
            body: None,
        };
        let lines = generator().generate_method(&method, "Factory");
        assert_eq!(lines[0], "@staticmethod");
        assert_eq!(lines[1], "def create() -> int:");
        assert_eq!(lines[2], "    \"\"\"untranslated\"\"\"");
        assert_eq!(lines[3], "    pass");
    }

    #[test]
    fn method_body_delegates_to_translator() {
        let method = PyMethod {
            python_name: "get_name".to_string(),
            decorators: vec![],
            parameters: vec![],
            return_type: "str".to_string(),
            is_static: false,
            is_abstract: false,
            is_private: false,
            body: Some(vec![StatementNode::Return {
                value: Some(ExpressionNode::member_ref("name")),
            }]),
        };
        let lines = generator().generate_method(&method, "Person");
        assert_eq!(lines[0], "def get_name(self) -> str:");
        assert_eq!(lines[1], "    return name");
    }

    #[test]
    fn generate_code_has_header_and_entry_stub() {
        let target = TargetStructure {
            imports: vec![],
            classes: vec![empty_class("A")],
        };
        let code = generator().generate_code(&target);
        assert!(code.starts_with("\"\"\"\nGenerated by codemigrate"));
        assert!(code.contains("class A:"));
        assert!(code.ends_with("if __name__ == \"__main__\":\n    pass"));
        // No typing import without mapped imports.
        assert!(!code.contains("from typing"));
    }

    #[test]
    fn generate_code_renders_sorted_imports() {
        let target = TargetStructure {
            imports: vec!["from typing import List".to_string()],
            classes: vec![],
        };
        let code = generator().generate_code(&target);
        let typing_all = code.find("from typing import Dict, List, Any, Optional").unwrap();
        let typing_list = code.find("from typing import List").unwrap();
        assert!(typing_all < typing_list);
    }

    #[test]
    fn format_code_collapses_blank_runs() {
        let raw = "a\n\n\n\nb\n\n\nc";
        assert_eq!(format_code(raw), "a\n\nb\n\nc\n");
    }

    #[test]
    fn format_code_single_trailing_newline() {
        assert_eq!(format_code("a\n\n\n"), "a\n");
        assert_eq!(format_code("a"), "a\n");
    }
}
