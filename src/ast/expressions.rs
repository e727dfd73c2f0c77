use serde::Serialize;

/// Expression node.
///
/// A `BinaryExpression` chain built from equal-precedence operators is
/// always left-associated, and parenthesized groups are not preserved as
/// nodes of their own: `(2+2)` yields exactly the inner expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Expr {
    BinaryExpression {
        operator: String,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    NumericalLiteral {
        value: i64,
    },
    /// A string literal with its delimiting quotes stripped. Single- and
    /// double-quoted source forms are indistinguishable here.
    StringLiteral {
        value: String,
    },
}
