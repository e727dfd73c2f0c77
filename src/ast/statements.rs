use serde::Serialize;

use super::expressions::Expr;

/// Statement node.
///
/// Serialized variant names and field names are the stable wire shape:
/// `{"type": "BlockStatement", "body": [...]}` and so on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Stmt {
    /// An expression evaluated for its value, terminated by `;`.
    ExpressionStatement { expression: Expr },
    /// A `{ ... }` group of statements. `body` may be empty and blocks nest
    /// to any depth.
    BlockStatement { body: Vec<Stmt> },
    /// A bare `;`.
    EmptyStatement,
}
