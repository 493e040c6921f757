//! Java structural extraction
//!
//! Wraps the tree-sitter-java grammar and exposes one fixed-shape record per
//! compilation unit: package, import paths, and per class the name, modifier
//! set, superclass, interfaces, fields, methods and constructors. This is the
//! only fallible stage of the pipeline.

use tracing::debug;
use tree_sitter::{Node as TSNode, Parser, Tree};

use crate::error::{MigrateError, Result};
use crate::shared::models::{
    ClassModel, ConstructorModel, FieldModel, LiteralValue, MethodModel, ModifierSet,
    ParameterModel, SourceStructure,
};

use super::body_lowering::lower_block;

/// Parse Java source into a CST. Empty input and units with syntax errors
/// are upstream parse failures.
pub fn parse_java(source: &str) -> Result<Tree> {
    if source.trim().is_empty() {
        return Err(MigrateError::parse("empty source"));
    }

    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_java::language())
        .map_err(|e| MigrateError::language(e.to_string()))?;

    let tree = parser
        .parse(source, None)
        .ok_or_else(|| MigrateError::parse("parser produced no tree"))?;

    if tree.root_node().has_error() {
        let (line, column, kind) = first_error(&tree.root_node());
        return Err(MigrateError::parse(format!(
            "syntax error ({}) at line {}, column {}",
            kind, line, column
        )));
    }

    Ok(tree)
}

/// Locate the first ERROR or MISSING node for the parse diagnostic.
fn first_error(root: &TSNode) -> (usize, usize, &'static str) {
    let mut stack = vec![*root];
    while let Some(node) = stack.pop() {
        if node.is_error() {
            let pos = node.start_position();
            return (pos.row + 1, pos.column + 1, "unexpected syntax");
        }
        if node.is_missing() {
            let pos = node.start_position();
            return (pos.row + 1, pos.column + 1, "missing token");
        }
        let mut cursor = node.walk();
        let children: Vec<TSNode> = node.children(&mut cursor).collect();
        for child in children.into_iter().rev() {
            stack.push(child);
        }
    }
    (1, 1, "unknown")
}

fn node_text(node: &TSNode, source: &str) -> String {
    node.utf8_text(source.as_bytes()).unwrap_or("").to_string()
}

/// Extract the full structural record from Java source.
///
/// A unit that parses but declares no classes is "nothing to migrate" and
/// halts the pipeline before the mapper runs.
pub fn extract_structure(source: &str) -> Result<SourceStructure> {
    let tree = parse_java(source)?;
    let root = tree.root_node();

    let mut structure = SourceStructure {
        package: extract_package(&root, source),
        imports: extract_imports(&root, source),
        classes: Vec::new(),
    };

    // Collect every class declaration, nested ones included, in source order.
    let mut stack = vec![root];
    let mut class_nodes = Vec::new();
    while let Some(node) = stack.pop() {
        if node.kind() == "class_declaration" {
            class_nodes.push(node);
        }
        let mut cursor = node.walk();
        let children: Vec<TSNode> = node.children(&mut cursor).collect();
        for child in children.into_iter().rev() {
            stack.push(child);
        }
    }

    for class_node in class_nodes {
        if let Some(class) = extract_class(&class_node, source) {
            structure.classes.push(class);
        }
    }

    if structure.is_empty() {
        return Err(MigrateError::EmptyStructure);
    }

    debug!(
        classes = structure.classes.len(),
        imports = structure.imports.len(),
        "extracted source structure"
    );
    Ok(structure)
}

fn extract_package(root: &TSNode, source: &str) -> Option<String> {
    let mut cursor = root.walk();
    for child in root.named_children(&mut cursor) {
        if child.kind() == "package_declaration" {
            let mut inner = child.walk();
            return child
                .named_children(&mut inner)
                .find(|n| n.kind() == "scoped_identifier" || n.kind() == "identifier")
                .map(|n| node_text(&n, source));
        }
    }
    None
}

fn extract_imports(root: &TSNode, source: &str) -> Vec<String> {
    let mut imports = Vec::new();
    let mut cursor = root.walk();
    for child in root.named_children(&mut cursor) {
        if child.kind() != "import_declaration" {
            continue;
        }
        let mut inner = child.walk();
        let path = child
            .named_children(&mut inner)
            .find(|n| n.kind() == "scoped_identifier" || n.kind() == "identifier")
            .map(|n| node_text(&n, source));
        if let Some(mut path) = path {
            let mut wildcard = child.walk();
            if child.children(&mut wildcard).any(|n| n.kind() == "asterisk") {
                path.push_str(".*");
            }
            imports.push(path);
        }
    }
    imports
}

/// Modifier keyword tokens from a declaration's `modifiers` child.
/// Annotations show up as their own node kinds and fall through the token
/// filter in `ModifierSet::from_tokens`.
fn modifier_tokens(node: &TSNode) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.kind() == "modifiers" {
            let mut inner = child.walk();
            for token in child.children(&mut inner) {
                tokens.push(token.kind().to_string());
            }
        }
    }
    tokens
}

fn extract_class(node: &TSNode, source: &str) -> Option<ClassModel> {
    let name = node
        .child_by_field_name("name")
        .map(|n| node_text(&n, source))
        .unwrap_or_default();
    if name.is_empty() {
        return None;
    }

    let superclass = node.child_by_field_name("superclass").and_then(|sc| {
        let mut cursor = sc.walk();
        let first = sc.named_children(&mut cursor).next();
        first.map(|ty| node_text(&ty, source))
    });

    let interfaces = node
        .child_by_field_name("interfaces")
        .map(|ifaces| {
            let mut names = Vec::new();
            let mut cursor = ifaces.walk();
            for child in ifaces.children(&mut cursor) {
                match child.kind() {
                    "type_list" => {
                        let mut inner = child.walk();
                        for ty in child.named_children(&mut inner) {
                            names.push(node_text(&ty, source));
                        }
                    }
                    "type_identifier" | "generic_type" | "scoped_type_identifier" => {
                        names.push(node_text(&child, source));
                    }
                    _ => {}
                }
            }
            names
        })
        .unwrap_or_default();

    let mut class = ClassModel {
        name,
        modifiers: ModifierSet::from_tokens(&modifier_tokens(node)),
        superclass,
        interfaces,
        fields: Vec::new(),
        methods: Vec::new(),
        constructors: Vec::new(),
    };

    if let Some(body) = node.child_by_field_name("body") {
        let mut cursor = body.walk();
        for member in body.named_children(&mut cursor) {
            match member.kind() {
                "field_declaration" => extract_fields(&member, source, &mut class.fields),
                "method_declaration" => {
                    if let Some(method) = extract_method(&member, source) {
                        class.methods.push(method);
                    }
                }
                "constructor_declaration" => {
                    if let Some(ctor) = extract_constructor(&member, source) {
                        class.constructors.push(ctor);
                    }
                }
                _ => {}
            }
        }
    }

    Some(class)
}

/// One `FieldModel` per declarator in the declaration.
fn extract_fields(node: &TSNode, source: &str, fields: &mut Vec<FieldModel>) {
    let ty = node
        .child_by_field_name("type")
        .map(|n| node_text(&n, source))
        .unwrap_or_default();
    let modifiers = ModifierSet::from_tokens(&modifier_tokens(node));

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.kind() != "variable_declarator" {
            continue;
        }
        let name = child
            .child_by_field_name("name")
            .map(|n| node_text(&n, source))
            .unwrap_or_default();
        if name.is_empty() {
            continue;
        }
        let initializer = child
            .child_by_field_name("value")
            .and_then(|value| extract_literal(&value, source));
        fields.push(FieldModel {
            name,
            ty: ty.clone(),
            modifiers,
            initializer,
        });
    }
}

/// Resolve a single-level literal initializer. Anything deeper than one
/// literal (unary minus, arithmetic, object creation) stays absent.
fn extract_literal(node: &TSNode, source: &str) -> Option<LiteralValue> {
    let text = node_text(node, source);
    match node.kind() {
        "string_literal" => Some(LiteralValue::Str(
            text.trim_matches('"').to_string(),
        )),
        "character_literal" => Some(LiteralValue::Str(
            text.trim_matches('\'').to_string(),
        )),
        "decimal_integer_literal" => {
            let trimmed = text.trim_end_matches(['l', 'L']);
            trimmed.parse::<i64>().ok().map(LiteralValue::Int)
        }
        "hex_integer_literal" => {
            let trimmed = text.trim_end_matches(['l', 'L']);
            let digits = trimmed
                .strip_prefix("0x")
                .or_else(|| trimmed.strip_prefix("0X"))?;
            i64::from_str_radix(digits, 16).ok().map(LiteralValue::Int)
        }
        "decimal_floating_point_literal" => {
            let trimmed = text.trim_end_matches(['f', 'F', 'd', 'D']);
            trimmed.parse::<f64>().ok().map(LiteralValue::Float)
        }
        "true" => Some(LiteralValue::Bool(true)),
        "false" => Some(LiteralValue::Bool(false)),
        _ => None,
    }
}

fn extract_parameters(node: &TSNode, source: &str) -> Vec<ParameterModel> {
    let mut parameters = Vec::new();
    if let Some(params) = node.child_by_field_name("parameters") {
        let mut cursor = params.walk();
        for child in params.children(&mut cursor) {
            if child.kind() != "formal_parameter" && child.kind() != "spread_parameter" {
                continue;
            }
            let name = child
                .child_by_field_name("name")
                .map(|n| node_text(&n, source))
                .unwrap_or_default();
            if name.is_empty() {
                continue;
            }
            let ty = child
                .child_by_field_name("type")
                .map(|n| node_text(&n, source))
                .unwrap_or_default();
            parameters.push(ParameterModel { name, ty });
        }
    }
    parameters
}

fn extract_method(node: &TSNode, source: &str) -> Option<MethodModel> {
    let name = node
        .child_by_field_name("name")
        .map(|n| node_text(&n, source))
        .unwrap_or_default();
    if name.is_empty() {
        return None;
    }

    let return_type = node
        .child_by_field_name("type")
        .map(|n| node_text(&n, source))
        .unwrap_or_else(|| "void".to_string());

    let body = node
        .child_by_field_name("body")
        .map(|block| lower_block(&block, source));

    Some(MethodModel {
        name,
        modifiers: ModifierSet::from_tokens(&modifier_tokens(node)),
        return_type,
        parameters: extract_parameters(node, source),
        body,
    })
}

fn extract_constructor(node: &TSNode, source: &str) -> Option<ConstructorModel> {
    let name = node
        .child_by_field_name("name")
        .map(|n| node_text(&n, source))
        .unwrap_or_default();
    if name.is_empty() {
        return None;
    }

    let body = node
        .child_by_field_name("body")
        .map(|block| lower_block(&block, source));

    Some(ConstructorModel {
        name,
        modifiers: ModifierSet::from_tokens(&modifier_tokens(node)),
        parameters: extract_parameters(node, source),
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const CALCULATOR: &str = r#"
import java.util.List;
import java.util.Map;

public class Calculator {
    private static final double PI = 3.14159;
    private String name;

    public Calculator(String name) {
        this.name = name;
    }

    public int add(int a, int b) {
        return a + b;
    }

    public static double circleArea(double radius) {
        return PI * radius * radius;
    }

    public String getName() {
        return name;
    }
}
"#;

    #[test]
    fn empty_source_is_parse_failure() {
        assert!(matches!(
            extract_structure(""),
            Err(MigrateError::Parse { .. })
        ));
        assert!(matches!(
            extract_structure("   \n  "),
            Err(MigrateError::Parse { .. })
        ));
    }

    #[test]
    fn broken_source_is_parse_failure() {
        let err = extract_structure("public class {{{").unwrap_err();
        assert!(matches!(err, MigrateError::Parse { .. }));
    }

    #[test]
    fn unit_without_classes_is_empty() {
        let err = extract_structure("package com.example;").unwrap_err();
        assert!(matches!(err, MigrateError::EmptyStructure));
    }

    #[test]
    fn extracts_package_and_imports() {
        let source = "package com.example.app;\nimport java.util.List;\nclass A {}";
        let structure = extract_structure(source).unwrap();
        assert_eq!(structure.package.as_deref(), Some("com.example.app"));
        assert_eq!(structure.imports, vec!["java.util.List"]);
    }

    #[test]
    fn wildcard_import_keeps_marker() {
        let source = "import java.util.*;\nclass A {}";
        let structure = extract_structure(source).unwrap();
        assert_eq!(structure.imports, vec!["java.util.*"]);
    }

    #[test]
    fn extracts_calculator_structure() {
        let structure = extract_structure(CALCULATOR).unwrap();
        assert_eq!(structure.classes.len(), 1);

        let class = &structure.classes[0];
        assert_eq!(class.name, "Calculator");
        assert_eq!(class.fields.len(), 2);
        assert_eq!(class.methods.len(), 3);
        assert_eq!(class.constructors.len(), 1);

        let pi = &class.fields[0];
        assert_eq!(pi.name, "PI");
        assert_eq!(pi.ty, "double");
        assert!(pi.modifiers.is_constant());
        assert_eq!(pi.initializer, Some(LiteralValue::Float(3.14159)));

        let name = &class.fields[1];
        assert_eq!(name.name, "name");
        assert!(name.modifiers.private);
        assert!(name.initializer.is_none());

        let ctor = &class.constructors[0];
        assert_eq!(ctor.parameters.len(), 1);
        assert_eq!(ctor.parameters[0].name, "name");
        assert_eq!(ctor.parameters[0].ty, "String");

        let area = &class.methods[1];
        assert_eq!(area.name, "circleArea");
        assert!(area.modifiers.is_static);
        assert_eq!(area.return_type, "double");
    }

    #[test]
    fn superclass_and_interfaces() {
        let source = "class Dog extends Animal implements Pet, Comparable { }";
        let structure = extract_structure(source).unwrap();
        let class = &structure.classes[0];
        assert_eq!(class.superclass.as_deref(), Some("Animal"));
        assert_eq!(class.interfaces, vec!["Pet", "Comparable"]);
    }

    #[test]
    fn abstract_method_has_no_body() {
        let source = "abstract class Shape { public abstract double area(); }";
        let structure = extract_structure(source).unwrap();
        let class = &structure.classes[0];
        assert!(class.modifiers.is_abstract);
        let method = &class.methods[0];
        assert!(method.modifiers.is_abstract);
        assert!(method.body.is_none());
    }

    #[test]
    fn multiple_declarators_split_into_fields() {
        let source = "class P { private int x = 1, y = 2; }";
        let structure = extract_structure(source).unwrap();
        let class = &structure.classes[0];
        assert_eq!(class.fields.len(), 2);
        assert_eq!(class.fields[0].name, "x");
        assert_eq!(class.fields[0].initializer, Some(LiteralValue::Int(1)));
        assert_eq!(class.fields[1].name, "y");
        assert_eq!(class.fields[1].initializer, Some(LiteralValue::Int(2)));
    }

    #[test]
    fn non_literal_initializer_stays_absent() {
        let source = "class P { private int x = compute(); private int y = -1; }";
        let structure = extract_structure(source).unwrap();
        let class = &structure.classes[0];
        assert!(class.fields[0].initializer.is_none());
        assert!(class.fields[1].initializer.is_none());
    }

    #[test]
    fn string_and_bool_literals() {
        let source = r#"class P { String s = "hi"; boolean b = true; }"#;
        let structure = extract_structure(source).unwrap();
        let class = &structure.classes[0];
        assert_eq!(
            class.fields[0].initializer,
            Some(LiteralValue::Str("hi".to_string()))
        );
        assert_eq!(class.fields[1].initializer, Some(LiteralValue::Bool(true)));
    }

    #[test]
    fn nested_classes_are_collected() {
        let source = "class Outer { class Inner { } }";
        let structure = extract_structure(source).unwrap();
        let names: Vec<&str> = structure.classes.iter().map(|c| c.name.as_str()).collect();
        assert!(names.contains(&"Outer"));
        assert!(names.contains(&"Inner"));
    }
}
