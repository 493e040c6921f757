//! Convention and structure checks
//!
//! Each check walks the generated module's parse tree independently and
//! reports warnings only; none of them can fail the migration on its own.

use tracing::debug;
use tree_sitter::Node as TSNode;

use crate::shared::models::{CheckResult, TargetStructure};

use super::syntax::parse_python;

fn node_text(node: &TSNode, source: &str) -> String {
    node.utf8_text(source.as_bytes()).unwrap_or("").to_string()
}

fn walk<'t>(root: TSNode<'t>) -> Vec<TSNode<'t>> {
    let mut nodes = Vec::new();
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        let mut cursor = node.walk();
        let children: Vec<TSNode> = node.children(&mut cursor).collect();
        for child in children.into_iter().rev() {
            stack.push(child);
        }
        nodes.push(node);
    }
    nodes
}

/// Class names must start upper-case; non-private function names must not
/// contain an upper-case character.
pub fn check_naming(python_code: &str) -> CheckResult {
    let Some(tree) = parse_python(python_code) else {
        return CheckResult::from_diagnostics(vec![
            "naming check skipped: could not parse module".to_string(),
        ]);
    };

    let mut warnings = Vec::new();
    for node in walk(tree.root_node()) {
        match node.kind() {
            "class_definition" => {
                if let Some(name_node) = node.child_by_field_name("name") {
                    let name = node_text(&name_node, python_code);
                    if !name.chars().next().is_some_and(char::is_uppercase) {
                        warnings.push(format!("class name '{}' should start upper-case", name));
                    }
                }
            }
            "function_definition" => {
                if let Some(name_node) = node.child_by_field_name("name") {
                    let name = node_text(&name_node, python_code);
                    if name.starts_with('_') {
                        continue;
                    }
                    if name.chars().any(char::is_uppercase) {
                        warnings.push(format!("function name '{}' should be snake_case", name));
                    }
                }
            }
            _ => {}
        }
    }
    CheckResult::from_diagnostics(warnings)
}

/// Every non-self parameter needs a type annotation; every non-constructor
/// function needs an explicit return annotation.
pub fn check_annotations(python_code: &str) -> CheckResult {
    let Some(tree) = parse_python(python_code) else {
        return CheckResult::from_diagnostics(vec![
            "annotation check skipped: could not parse module".to_string(),
        ]);
    };

    let mut warnings = Vec::new();
    for node in walk(tree.root_node()) {
        if node.kind() != "function_definition" {
            continue;
        }
        let name = node
            .child_by_field_name("name")
            .map(|n| node_text(&n, python_code))
            .unwrap_or_default();

        if let Some(params) = node.child_by_field_name("parameters") {
            let mut cursor = params.walk();
            for param in params.named_children(&mut cursor) {
                let param_name = match param.kind() {
                    "identifier" => node_text(&param, python_code),
                    "default_parameter" => param
                        .child_by_field_name("name")
                        .map(|n| node_text(&n, python_code))
                        .unwrap_or_default(),
                    _ => continue,
                };
                if param_name != "self" {
                    warnings.push(format!(
                        "parameter '{}' of function '{}' is missing a type annotation",
                        param_name, name
                    ));
                }
            }
        }

        if name != "__init__" && node.child_by_field_name("return_type").is_none() {
            warnings.push(format!(
                "function '{}' is missing a return type annotation",
                name
            ));
        }
    }
    CheckResult::from_diagnostics(warnings)
}

/// Structural sanity of the mapped model; only runs when the caller supplies
/// the target tree.
pub fn check_structure(target: &TargetStructure) -> CheckResult {
    let mut warnings = Vec::new();

    if target.classes.is_empty() {
        warnings.push("no class definitions in the migrated unit".to_string());
    }

    for class in &target.classes {
        if class.methods.is_empty() && class.fields.is_empty() {
            warnings.push(format!("class {} has no methods or fields", class.name));
        }
        if !class.fields.is_empty() && class.constructors.is_empty() {
            warnings.push(format!(
                "class {} has fields but no declared constructor",
                class.name
            ));
        }
    }
    CheckResult::from_diagnostics(warnings)
}

/// Collects import statements without cross-referencing usage. Deliberate
/// no-op placeholder pending a product decision on usage analysis.
pub fn check_imports(python_code: &str) -> CheckResult {
    let Some(tree) = parse_python(python_code) else {
        return CheckResult::pass();
    };

    let imports = walk(tree.root_node())
        .iter()
        .filter(|n| n.kind() == "import_statement" || n.kind() == "import_from_statement")
        .count();
    debug!(imports, "collected import statements");

    CheckResult::pass()
}
