//! Expression/statement translator
//!
//! A recursive tree-walker over the closed body-node vocabulary. The
//! enclosing-class context is passed explicitly into every call instead of
//! being held as mutable state, so each translation is pure and testable in
//! isolation. The translator never fails on unseen input: unrecognized nodes
//! degrade to visible markers.

use crate::shared::models::{ExpressionNode, StatementNode};

/// Enclosing-method context threaded through body translation.
#[derive(Debug, Clone, Copy)]
pub struct TranslationContext<'a> {
    pub class_name: &'a str,
    pub is_static: bool,
}

/// All-uppercase names are treated as constant/class-field references.
fn is_constant_ref(name: &str) -> bool {
    let mut saw_alphabetic = false;
    for c in name.chars() {
        if c.is_alphabetic() {
            saw_alphabetic = true;
            if !c.is_uppercase() {
                return false;
            }
        }
    }
    saw_alphabetic
}

/// Render one expression. Unrecognized sub-expressions render as `None` and
/// report their kind through `unrecognized`, so the enclosing statement can
/// carry the marker in a trailing comment without breaking the line's syntax.
fn translate_expression(
    expr: &ExpressionNode,
    ctx: &TranslationContext,
    unrecognized: &mut Vec<String>,
) -> String {
    match expr {
        ExpressionNode::Literal { text } => text.clone(),
        ExpressionNode::MemberRef { name } => {
            if is_constant_ref(name) {
                // Class-qualified in static context, self-qualified otherwise.
                if ctx.is_static {
                    format!("{}.{}", ctx.class_name, name)
                } else {
                    format!("self.{}", name)
                }
            } else {
                name.clone()
            }
        }
        ExpressionNode::BinaryOp { op, left, right } => {
            // Operator tokens pass through verbatim; no re-bracketing for
            // precedence differences between the two languages.
            format!(
                "{} {} {}",
                translate_expression(left, ctx, unrecognized),
                op,
                translate_expression(right, ctx, unrecognized)
            )
        }
        ExpressionNode::Invocation {
            receiver: _,
            name,
            arguments,
        } => {
            // The receiver of a qualified call is dropped: `a.b(x)` → `b(x)`.
            let args: Vec<String> = arguments
                .iter()
                .map(|arg| translate_expression(arg, ctx, unrecognized))
                .collect();
            format!("{}({})", name, args.join(", "))
        }
        ExpressionNode::Unrecognized { kind } => {
            unrecognized.push(kind.clone());
            "None".to_string()
        }
    }
}

/// Render one statement as a single line of Python (without indentation).
pub fn translate_statement(stmt: &StatementNode, ctx: &TranslationContext) -> String {
    let mut unrecognized = Vec::new();
    let line = match stmt {
        StatementNode::Return { value: Some(expr) } => {
            format!("return {}", translate_expression(expr, ctx, &mut unrecognized))
        }
        StatementNode::Return { value: None } => "return".to_string(),
        StatementNode::Expr { expr } => translate_expression(expr, ctx, &mut unrecognized),
        StatementNode::Unrecognized { kind } => {
            return format!("# <unrecognized: {}>", kind);
        }
    };

    if unrecognized.is_empty() {
        line
    } else {
        format!("{}  # <unrecognized: {}>", line, unrecognized.join(", "))
    }
}

/// Render a statement list as body lines. A body consisting only of marker
/// comments gets a trailing `pass` so the generated block stays parseable.
pub fn translate_body(statements: &[StatementNode], ctx: &TranslationContext) -> Vec<String> {
    let mut lines: Vec<String> = statements
        .iter()
        .map(|stmt| translate_statement(stmt, ctx))
        .collect();

    if !lines.iter().any(|line| !line.starts_with('#')) {
        lines.push("pass".to_string());
    }
    lines
}
