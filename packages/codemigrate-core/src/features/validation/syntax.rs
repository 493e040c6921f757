//! Syntax check
//!
//! Re-parses the generated text with the Python grammar. The only check
//! (besides the execution smoke test) whose failure marks the overall
//! migration status `failed`.

use tree_sitter::{Node as TSNode, Parser, Tree};

use crate::shared::models::CheckResult;

/// Parse Python source; `None` means the parser itself produced nothing.
pub fn parse_python(code: &str) -> Option<Tree> {
    let mut parser = Parser::new();
    parser.set_language(&tree_sitter_python::language()).ok()?;
    parser.parse(code, None)
}

/// Collect one diagnostic per ERROR/MISSING node.
fn collect_errors(root: &TSNode, diagnostics: &mut Vec<String>) {
    let mut stack = vec![*root];
    while let Some(node) = stack.pop() {
        if node.is_missing() {
            let pos = node.start_position();
            diagnostics.push(format!(
                "syntax error at line {}, column {}: missing {}",
                pos.row + 1,
                pos.column + 1,
                node.kind()
            ));
            continue;
        }
        if node.is_error() {
            let pos = node.start_position();
            diagnostics.push(format!(
                "syntax error at line {}, column {}: unexpected input",
                pos.row + 1,
                pos.column + 1
            ));
            continue;
        }
        let mut cursor = node.walk();
        let children: Vec<TSNode> = node.children(&mut cursor).collect();
        for child in children.into_iter().rev() {
            stack.push(child);
        }
    }
}

pub fn check_syntax(python_code: &str) -> CheckResult {
    let Some(tree) = parse_python(python_code) else {
        return CheckResult::from_diagnostics(vec!["parser produced no tree".to_string()]);
    };

    let root = tree.root_node();
    if !root.has_error() {
        return CheckResult::pass();
    }

    let mut diagnostics = Vec::new();
    collect_errors(&root, &mut diagnostics);
    if diagnostics.is_empty() {
        diagnostics.push("parse tree contains errors".to_string());
    }
    CheckResult::from_diagnostics(diagnostics)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_module_passes() {
        let code = "class A:\n    pass\n";
        assert!(check_syntax(code).passed);
    }

    #[test]
    fn broken_module_fails_with_location() {
        let code = "class A:\n    def f(:\n";
        let result = check_syntax(code);
        assert!(!result.passed);
        assert!(result.diagnostics[0].contains("line"));
    }

    #[test]
    fn empty_module_passes() {
        assert!(check_syntax("").passed);
    }
}
