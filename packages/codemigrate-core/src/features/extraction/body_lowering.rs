//! Body lowering
//!
//! Maps Java CST statements and expressions into the closed body-node
//! vocabulary. Anything outside the vocabulary becomes `Unrecognized` with
//! the CST kind name; lowering itself never fails.

use tree_sitter::Node as TSNode;

use crate::shared::models::{ExpressionNode, StatementNode};

fn node_text(node: &TSNode, source: &str) -> String {
    node.utf8_text(source.as_bytes()).unwrap_or("").to_string()
}

fn is_comment(kind: &str) -> bool {
    kind == "line_comment" || kind == "block_comment"
}

const LITERAL_KINDS: &[&str] = &[
    "decimal_integer_literal",
    "hex_integer_literal",
    "octal_integer_literal",
    "binary_integer_literal",
    "decimal_floating_point_literal",
    "hex_floating_point_literal",
    "string_literal",
    "character_literal",
    "true",
    "false",
    "null_literal",
];

/// Lower a block (or constructor body) into statement nodes.
pub fn lower_block(block: &TSNode, source: &str) -> Vec<StatementNode> {
    let mut statements = Vec::new();
    let mut cursor = block.walk();
    for child in block.named_children(&mut cursor) {
        if is_comment(child.kind()) {
            continue;
        }
        statements.push(lower_statement(&child, source));
    }
    statements
}

fn lower_statement(node: &TSNode, source: &str) -> StatementNode {
    match node.kind() {
        "return_statement" => {
            let mut cursor = node.walk();
            let value = node
                .named_children(&mut cursor)
                .find(|child| !is_comment(child.kind()))
                .map(|expr| lower_expression(&expr, source));
            StatementNode::Return { value }
        }
        "expression_statement" => {
            let mut cursor = node.walk();
            let found = node
                .named_children(&mut cursor)
                .find(|child| !is_comment(child.kind()));
            match found
            {
                Some(expr) => StatementNode::Expr {
                    expr: lower_expression(&expr, source),
                },
                None => StatementNode::Unrecognized {
                    kind: node.kind().to_string(),
                },
            }
        }
        kind => StatementNode::Unrecognized {
            kind: kind.to_string(),
        },
    }
}

fn lower_expression(node: &TSNode, source: &str) -> ExpressionNode {
    let kind = node.kind();

    if LITERAL_KINDS.contains(&kind) {
        return ExpressionNode::Literal {
            text: node_text(node, source),
        };
    }

    match kind {
        "identifier" => ExpressionNode::MemberRef {
            name: node_text(node, source),
        },
        // `this.x` carries no more information than the bare field name at
        // this vocabulary level; other receivers stay unrecognized.
        "field_access" => {
            let object_is_this = node
                .child_by_field_name("object")
                .is_some_and(|obj| obj.kind() == "this");
            match (object_is_this, node.child_by_field_name("field")) {
                (true, Some(field)) => ExpressionNode::MemberRef {
                    name: node_text(&field, source),
                },
                _ => ExpressionNode::Unrecognized {
                    kind: kind.to_string(),
                },
            }
        }
        "binary_expression" => {
            let left = node.child_by_field_name("left");
            let op = node.child_by_field_name("operator");
            let right = node.child_by_field_name("right");
            match (left, op, right) {
                (Some(left), Some(op), Some(right)) => ExpressionNode::BinaryOp {
                    op: node_text(&op, source),
                    left: Box::new(lower_expression(&left, source)),
                    right: Box::new(lower_expression(&right, source)),
                },
                _ => ExpressionNode::Unrecognized {
                    kind: kind.to_string(),
                },
            }
        }
        // Grouping is dropped; the translator does no re-bracketing either.
        "parenthesized_expression" => {
            let mut cursor = node.walk();
            let found = node
                .named_children(&mut cursor)
                .find(|child| !is_comment(child.kind()));
            match found
            {
                Some(inner) => lower_expression(&inner, source),
                None => ExpressionNode::Unrecognized {
                    kind: kind.to_string(),
                },
            }
        }
        "method_invocation" => {
            let name = node
                .child_by_field_name("name")
                .map(|n| node_text(&n, source))
                .unwrap_or_default();
            if name.is_empty() {
                return ExpressionNode::Unrecognized {
                    kind: kind.to_string(),
                };
            }

            let receiver = node
                .child_by_field_name("object")
                .map(|obj| Box::new(lower_expression(&obj, source)));

            let mut arguments = Vec::new();
            if let Some(args) = node.child_by_field_name("arguments") {
                let mut cursor = args.walk();
                for arg in args.named_children(&mut cursor) {
                    if is_comment(arg.kind()) {
                        continue;
                    }
                    arguments.push(lower_expression(&arg, source));
                }
            }

            ExpressionNode::Invocation {
                receiver,
                name,
                arguments,
            }
        }
        _ => ExpressionNode::Unrecognized {
            kind: kind.to_string(),
        },
    }
}
