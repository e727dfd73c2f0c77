//! Parser state and the public parse entry point.
//!
//! The parser drives the tokenizer one token at a time: it holds the single
//! current lookahead token and nothing else, and every grammar rule decides
//! what to do from the lookahead's kind alone. There is no backtracking and
//! no multi-token lookahead.

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ParseError},
    lexer::{
        lexer::Tokenizer,
        tokens::{Token, TokenKind},
    },
};

use super::stmt::parse_stmt_list;

/// Recursive-descent parser over a pull-model tokenizer.
///
/// A `Parser` value is one session at a time: [`Parser::parse`] fully
/// re-initializes the tokenizer and the lookahead, so sequential reuse is
/// safe and side-effect-free across calls.
pub struct Parser {
    tokenizer: Tokenizer,
    /// The single unconsumed token the grammar rules inspect. `None` means
    /// the input is exhausted.
    lookahead: Option<Token>,
}

impl Parser {
    pub fn new() -> Parser {
        Parser {
            tokenizer: Tokenizer::new(),
            lookahead: None,
        }
    }

    /// Parses `source` into a [`Program`].
    ///
    /// The only public operation. Initializes the tokenizer, primes the
    /// lookahead, and descends through the grammar from the top. The first
    /// lexical or syntactic failure aborts the whole session.
    pub fn parse(&mut self, source: &str) -> Result<Program, Error> {
        self.tokenizer.init(source);
        self.lookahead = self.tokenizer.next_token()?;

        // The statement list always consumes at least one statement, so an
        // immediately-exhausted input (empty, or nothing but whitespace and
        // comments) is handled here instead.
        let body = if self.lookahead.is_none() {
            vec![]
        } else {
            parse_stmt_list(self, None)?
        };

        Ok(Program { body })
    }

    /// Returns the current lookahead token without consuming it.
    pub fn lookahead(&self) -> Option<&Token> {
        self.lookahead.as_ref()
    }

    /// Returns the kind of the current lookahead token, `None` at end of
    /// input.
    pub fn lookahead_kind(&self) -> Option<TokenKind> {
        self.lookahead.as_ref().map(|token| token.kind)
    }

    /// Consumes the lookahead if it is of the expected kind, re-primes the
    /// lookahead from the tokenizer, and returns the consumed token.
    ///
    /// Fails with `UnexpectedEndOfInput` when the input is exhausted and
    /// with `UnexpectedToken` when the lookahead is of a different kind.
    pub fn eat(&mut self, expected: TokenKind) -> Result<Token, Error> {
        match self.lookahead.take() {
            Some(token) if token.kind == expected => {
                self.lookahead = self.tokenizer.next_token()?;
                Ok(token)
            }
            Some(token) => Err(ParseError::UnexpectedToken {
                found: token.kind,
                expected,
            }
            .into()),
            None => Err(ParseError::UnexpectedEndOfInput { expected }.into()),
        }
    }
}

impl Default for Parser {
    fn default() -> Self {
        Parser::new()
    }
}
