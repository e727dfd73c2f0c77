use std::fmt::Display;

/// The closed set of token kinds the tokenizer can produce.
///
/// End of input is not a kind: the tokenizer returns `None` once the
/// source is exhausted, so a real token can never be mistaken for it.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Number,
    String,

    Semicolon,

    BraceOpen,
    BraceClose,
    ParenOpen,
    ParenClose,

    AdditiveOperator,       // + -
    MultiplicativeOperator, // * /
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A single lexical unit: its kind and the exact matched lexeme.
///
/// String tokens still carry their delimiting quotes; the parser strips
/// them when it builds the literal node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{ kind: {}, value: {} }}", self.kind, self.value)
    }
}
