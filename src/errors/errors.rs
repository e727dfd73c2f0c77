use thiserror::Error;

use crate::lexer::tokens::TokenKind;

/// Raised by the tokenizer when no rule in the table matches at a
/// non-exhausted cursor position.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("unrecognised character: {character:?}")]
    UnrecognisedCharacter { character: char },
}

/// Raised by the parser when the token stream does not fit the grammar.
///
/// Every variant carries the offending kind (and the expected kind, where
/// one exists) so the caller can build its own message; the parser itself
/// never formats user-facing text beyond `Display`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unexpected end of input, expected: {expected}")]
    UnexpectedEndOfInput { expected: TokenKind },
    #[error("unexpected token: {found}, expected: {expected}")]
    UnexpectedToken { found: TokenKind, expected: TokenKind },
    #[error("unexpected token: {found}, expected a literal")]
    UnexpectedLiteral { found: TokenKind },
    #[error("number literal out of range: {literal}")]
    NumberOutOfRange { literal: String },
}

/// Umbrella error returned from `parse`: the first lexical or syntactic
/// failure aborts the whole session and surfaces here unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}
