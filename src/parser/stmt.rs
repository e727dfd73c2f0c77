use crate::{
    ast::statements::Stmt,
    errors::errors::Error,
    lexer::tokens::TokenKind,
    parser::expr::parse_expr,
};

use super::parser::Parser;

/// StatementList := Statement { Statement }
///
/// Accumulates statements until the lookahead equals `stop` (the closing
/// brace, inside a block) or the input is exhausted (the top-level program,
/// which has no closing delimiter). At least one statement is always parsed
/// before the stop condition is checked; immediately-terminated lists are
/// the caller's case to handle.
pub fn parse_stmt_list(parser: &mut Parser, stop: Option<TokenKind>) -> Result<Vec<Stmt>, Error> {
    let mut body = vec![parse_stmt(parser)?];

    while let Some(kind) = parser.lookahead_kind() {
        if stop == Some(kind) {
            break;
        }
        body.push(parse_stmt(parser)?);
    }

    Ok(body)
}

/// Statement := EmptyStatement | BlockStatement | ExpressionStatement
///
/// Dispatch is by the kind of the lookahead alone; anything that does not
/// open a block or terminate a statement must start an expression.
pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    match parser.lookahead_kind() {
        Some(TokenKind::Semicolon) => parse_empty_stmt(parser),
        Some(TokenKind::BraceOpen) => parse_block_stmt(parser),
        _ => parse_expression_stmt(parser),
    }
}

/// EmptyStatement := ';'
pub fn parse_empty_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.eat(TokenKind::Semicolon)?;

    Ok(Stmt::EmptyStatement)
}

/// BlockStatement := '{' [ StatementList ] '}'
///
/// An immediately-closing brace produces an empty body without touching the
/// statement list, which would otherwise insist on one statement.
pub fn parse_block_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.eat(TokenKind::BraceOpen)?;

    let body = if parser.lookahead_kind() == Some(TokenKind::BraceClose) {
        vec![]
    } else {
        parse_stmt_list(parser, Some(TokenKind::BraceClose))?
    };

    parser.eat(TokenKind::BraceClose)?;

    Ok(Stmt::BlockStatement { body })
}

/// ExpressionStatement := Expression ';'
pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let expression = parse_expr(parser)?;

    parser.eat(TokenKind::Semicolon)?;

    Ok(Stmt::ExpressionStatement { expression })
}
