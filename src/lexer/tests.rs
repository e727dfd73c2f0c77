//! Unit tests for the lexer module.
//!
//! Covers tokenization of literals, punctuation and operators, whitespace
//! and comment skipping, rule-table priority, and error cases.

use crate::errors::errors::LexError;

use super::{
    lexer::Tokenizer,
    tokens::{Token, TokenKind},
};

fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut tokenizer = Tokenizer::new();
    tokenizer.init(source);

    let mut tokens = vec![];
    while let Some(token) = tokenizer.next_token()? {
        tokens.push(token);
    }

    Ok(tokens)
}

#[test]
fn test_tokenize_number() {
    let tokens = tokenize("42").unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "42");
}

#[test]
fn test_tokenize_double_quoted_string() {
    let tokens = tokenize(r#""hello""#).unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, r#""hello""#);
}

#[test]
fn test_tokenize_single_quoted_string() {
    let tokens = tokenize("'hello'").unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "'hello'");
}

#[test]
fn test_tokenize_empty_string() {
    let tokens = tokenize(r#""""#).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, r#""""#);
}

#[test]
fn test_tokenize_punctuation() {
    let tokens = tokenize("; { } ( )").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Semicolon);
    assert_eq!(tokens[1].kind, TokenKind::BraceOpen);
    assert_eq!(tokens[2].kind, TokenKind::BraceClose);
    assert_eq!(tokens[3].kind, TokenKind::ParenOpen);
    assert_eq!(tokens[4].kind, TokenKind::ParenClose);
    assert_eq!(tokens.len(), 5);
}

#[test]
fn test_tokenize_operators() {
    let tokens = tokenize("+ - * /").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::AdditiveOperator);
    assert_eq!(tokens[0].value, "+");
    assert_eq!(tokens[1].kind, TokenKind::AdditiveOperator);
    assert_eq!(tokens[1].value, "-");
    assert_eq!(tokens[2].kind, TokenKind::MultiplicativeOperator);
    assert_eq!(tokens[2].value, "*");
    assert_eq!(tokens[3].kind, TokenKind::MultiplicativeOperator);
    assert_eq!(tokens[3].value, "/");
}

#[test]
fn test_tokenize_whitespace_handling() {
    let tokens = tokenize("  42  \t\n  ;  ").unwrap();

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[1].kind, TokenKind::Semicolon);
}

#[test]
fn test_tokenize_line_comment() {
    let tokens = tokenize("// a comment\n42;").unwrap();

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].kind, TokenKind::Semicolon);
}

#[test]
fn test_tokenize_block_comment() {
    let tokens = tokenize("/* a comment */ 42;").unwrap();

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Number);
}

#[test]
fn test_tokenize_multiline_block_comment() {
    let tokens = tokenize("/*\n * spans\n * lines\n */\n42;").unwrap();

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Number);
}

#[test]
fn test_block_comment_is_non_greedy() {
    let tokens = tokenize("/* first */ 1 /* second */").unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "1");
}

#[test]
fn test_comment_rule_beats_division() {
    // "//" must lex as a comment, never as two division operators.
    let tokens = tokenize("6 // 2").unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Number);

    let tokens = tokenize("6 / 2").unwrap();

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[1].kind, TokenKind::MultiplicativeOperator);
}

#[test]
fn test_tokenize_adjacent_tokens() {
    // Matching is anchored at the cursor; no separators required.
    let tokens = tokenize("12;34").unwrap();

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].value, "12");
    assert_eq!(tokens[1].kind, TokenKind::Semicolon);
    assert_eq!(tokens[2].value, "34");
}

#[test]
fn test_tokenize_expression() {
    let tokens = tokenize("(2 + 2) * 2;").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::ParenOpen);
    assert_eq!(tokens[1].kind, TokenKind::Number);
    assert_eq!(tokens[2].kind, TokenKind::AdditiveOperator);
    assert_eq!(tokens[3].kind, TokenKind::Number);
    assert_eq!(tokens[4].kind, TokenKind::ParenClose);
    assert_eq!(tokens[5].kind, TokenKind::MultiplicativeOperator);
    assert_eq!(tokens[6].kind, TokenKind::Number);
    assert_eq!(tokens[7].kind, TokenKind::Semicolon);
}

#[test]
fn test_tokenize_empty_input() {
    let tokens = tokenize("").unwrap();

    assert!(tokens.is_empty());
}

#[test]
fn test_tokenize_whitespace_only_input() {
    let tokens = tokenize("   \n\t  ").unwrap();

    assert!(tokens.is_empty());
}

#[test]
fn test_next_token_past_end_of_input() {
    let mut tokenizer = Tokenizer::new();
    tokenizer.init("42");

    assert!(tokenizer.next_token().unwrap().is_some());
    assert!(tokenizer.next_token().unwrap().is_none());
    // Calling past the end keeps returning the end marker, not an error.
    assert!(tokenizer.next_token().unwrap().is_none());
}

#[test]
fn test_tokenize_unrecognised_character() {
    let result = tokenize("42 @ 7");

    assert_eq!(
        result,
        Err(LexError::UnrecognisedCharacter { character: '@' })
    );
}

#[test]
fn test_init_resets_cursor() {
    let mut tokenizer = Tokenizer::new();

    tokenizer.init("1;");
    assert_eq!(tokenizer.next_token().unwrap().unwrap().value, "1");

    tokenizer.init("2;");
    assert_eq!(tokenizer.next_token().unwrap().unwrap().value, "2");
}

#[test]
fn test_has_more_tokens() {
    let mut tokenizer = Tokenizer::new();
    tokenizer.init("1");

    assert!(tokenizer.has_more_tokens());
    tokenizer.next_token().unwrap();
    assert!(!tokenizer.has_more_tokens());
}
