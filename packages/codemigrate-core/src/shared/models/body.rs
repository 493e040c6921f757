//! Method-body nodes
//!
//! Closed tagged-variant families dispatched by exhaustive matching. Any
//! construct outside the vocabulary is carried as `Unrecognized` with the
//! concrete-syntax kind name, so downstream stages can always render a
//! visible placeholder instead of failing on unseen input.

use serde::{Deserialize, Serialize};

/// The restricted expression vocabulary the translator understands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ExpressionNode {
    /// Literal text carried verbatim (`42`, `"hi"`, `true`).
    Literal { text: String },

    /// A bare name reference (`count`, `MAX_SIZE`, `this.count`).
    MemberRef { name: String },

    /// Infix operation; the operator token is carried verbatim.
    BinaryOp {
        op: String,
        left: Box<ExpressionNode>,
        right: Box<ExpressionNode>,
    },

    /// A call. The receiver is recorded when the call was qualified
    /// (`a.b(x)`), but the translator drops it when rendering.
    Invocation {
        receiver: Option<Box<ExpressionNode>>,
        name: String,
        arguments: Vec<ExpressionNode>,
    },

    /// Anything else, tagged with the syntax-node kind it came from.
    Unrecognized {
        #[serde(rename = "node_kind")]
        kind: String,
    },
}

/// The restricted statement vocabulary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum StatementNode {
    Return { value: Option<ExpressionNode> },
    Expr { expr: ExpressionNode },
    Unrecognized {
        #[serde(rename = "node_kind")]
        kind: String,
    },
}

impl ExpressionNode {
    pub fn literal(text: impl Into<String>) -> Self {
        Self::Literal { text: text.into() }
    }

    pub fn member_ref(name: impl Into<String>) -> Self {
        Self::MemberRef { name: name.into() }
    }

    pub fn binary(op: impl Into<String>, left: ExpressionNode, right: ExpressionNode) -> Self {
        Self::BinaryOp {
            op: op.into(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn invocation(name: impl Into<String>, arguments: Vec<ExpressionNode>) -> Self {
        Self::Invocation {
            receiver: None,
            name: name.into(),
            arguments,
        }
    }

    pub fn unrecognized(kind: impl Into<String>) -> Self {
        Self::Unrecognized { kind: kind.into() }
    }
}
