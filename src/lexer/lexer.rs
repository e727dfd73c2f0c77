use lazy_static::lazy_static;
use regex::Regex;

use crate::errors::errors::LexError;

use super::tokens::{Token, TokenKind};

/// What to do with the lexeme once a rule matches at the cursor.
#[derive(Clone, Copy)]
enum RuleAction {
    Skip,
    Emit(TokenKind),
}

struct LexRule {
    regex: Regex,
    action: RuleAction,
}

lazy_static! {
    /// The ordered rule table. Rules are tried top to bottom against the
    /// remaining input and the first match wins, so order encodes priority:
    /// the comment rules must sit above the operator rule or `//` and `/*`
    /// would lex as division.
    ///
    /// Every pattern is anchored with `^` so a rule can only ever match at
    /// the cursor, never somewhere further along.
    static ref RULES: Vec<LexRule> = vec![
        // Whitespace and comments produce no tokens
        LexRule { regex: Regex::new(r"^\s+").unwrap(), action: RuleAction::Skip },
        LexRule { regex: Regex::new(r"^/\*[\s\S]*?\*/").unwrap(), action: RuleAction::Skip },
        LexRule { regex: Regex::new(r"^//.*").unwrap(), action: RuleAction::Skip },
        // Punctuation
        LexRule { regex: Regex::new(r"^;").unwrap(), action: RuleAction::Emit(TokenKind::Semicolon) },
        LexRule { regex: Regex::new(r"^\{").unwrap(), action: RuleAction::Emit(TokenKind::BraceOpen) },
        LexRule { regex: Regex::new(r"^\}").unwrap(), action: RuleAction::Emit(TokenKind::BraceClose) },
        LexRule { regex: Regex::new(r"^\(").unwrap(), action: RuleAction::Emit(TokenKind::ParenOpen) },
        LexRule { regex: Regex::new(r"^\)").unwrap(), action: RuleAction::Emit(TokenKind::ParenClose) },
        // Literals
        LexRule { regex: Regex::new(r"^[0-9]+").unwrap(), action: RuleAction::Emit(TokenKind::Number) },
        LexRule { regex: Regex::new(r#"^"[^"]*""#).unwrap(), action: RuleAction::Emit(TokenKind::String) },
        LexRule { regex: Regex::new(r"^'[^']*'").unwrap(), action: RuleAction::Emit(TokenKind::String) },
        // Operators
        LexRule { regex: Regex::new(r"^[+\-]").unwrap(), action: RuleAction::Emit(TokenKind::AdditiveOperator) },
        LexRule { regex: Regex::new(r"^[*/]").unwrap(), action: RuleAction::Emit(TokenKind::MultiplicativeOperator) },
    ];
}

/// Pull-model tokenizer: owns the source text and a cursor, and hands out
/// one token at a time through [`Tokenizer::next_token`].
pub struct Tokenizer {
    source: String,
    cursor: usize,
}

impl Tokenizer {
    pub fn new() -> Tokenizer {
        Tokenizer {
            source: String::new(),
            cursor: 0,
        }
    }

    /// Resets the tokenizer onto a new source string. A tokenizer can be
    /// reused for any number of sequential sessions this way.
    pub fn init(&mut self, source: &str) {
        self.source = source.to_string();
        self.cursor = 0;
    }

    pub fn has_more_tokens(&self) -> bool {
        self.cursor < self.source.len()
    }

    /// Obtains the next significant token, advancing the cursor past it.
    ///
    /// Whitespace and comment matches are consumed silently. Returns
    /// `Ok(None)` once the source is exhausted (and on every call after
    /// that), and fails when no rule matches at a non-exhausted cursor.
    pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        while self.has_more_tokens() {
            let rest = &self.source[self.cursor..];

            let mut matched = None;
            for rule in RULES.iter() {
                if let Some(found) = rule.regex.find(rest) {
                    matched = Some((found.as_str().to_string(), rule.action));
                    break;
                }
            }

            match matched {
                Some((lexeme, RuleAction::Skip)) => {
                    self.cursor += lexeme.len();
                }
                Some((lexeme, RuleAction::Emit(kind))) => {
                    self.cursor += lexeme.len();
                    return Ok(Some(Token {
                        kind,
                        value: lexeme,
                    }));
                }
                None => {
                    return Err(LexError::UnrecognisedCharacter {
                        character: rest.chars().next().unwrap_or_default(),
                    });
                }
            }
        }

        Ok(None)
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Tokenizer::new()
    }
}
