use std::slice::Iter;

use serde::Serialize;

use super::statements::Stmt;

/// Root node of every parse. There is exactly one per session, and it owns
/// the whole tree outright.
///
/// Serializes with a `"type"` discriminator, like every other node, so the
/// JSON form of a parse is `{"type": "Program", "body": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub struct Program {
    pub body: Vec<Stmt>,
}

impl Program {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.body.iter()
    }
}
