use crate::{
    ast::expressions::Expr,
    errors::errors::{Error, ParseError},
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

/// Expression := AdditiveExpression
///
/// Precedence is encoded in the nesting of the rules below: each rule
/// parses its operands with the next-tighter rule, so multiplicative
/// operators always bind before additive ones.
pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parse_additive_expr(parser)
}

/// AdditiveExpression := MultiplicativeExpression { ('+' | '-') MultiplicativeExpression }
///
/// The repetition folds iteratively, combining the accumulated left side
/// with each new operand, which is what left-associates `1+2+3` into
/// `(1+2)+3`.
pub fn parse_additive_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let mut left = parse_multiplicative_expr(parser)?;

    while parser.lookahead_kind() == Some(TokenKind::AdditiveOperator) {
        let operator = parser.eat(TokenKind::AdditiveOperator)?.value;
        let right = parse_multiplicative_expr(parser)?;

        left = Expr::BinaryExpression {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        };
    }

    Ok(left)
}

/// MultiplicativeExpression := PrimaryExpression { ('*' | '/') PrimaryExpression }
pub fn parse_multiplicative_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let mut left = parse_primary_expr(parser)?;

    while parser.lookahead_kind() == Some(TokenKind::MultiplicativeOperator) {
        let operator = parser.eat(TokenKind::MultiplicativeOperator)?.value;
        let right = parse_primary_expr(parser)?;

        left = Expr::BinaryExpression {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        };
    }

    Ok(left)
}

/// PrimaryExpression := '(' Expression ')' | Literal
pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.lookahead_kind() {
        Some(TokenKind::ParenOpen) => parse_paren_expr(parser),
        _ => parse_literal(parser),
    }
}

/// A parenthesized sub-expression yields the inner expression's node
/// directly; the parentheses leave no trace in the tree.
pub fn parse_paren_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.eat(TokenKind::ParenOpen)?;
    let expr = parse_expr(parser)?;
    parser.eat(TokenKind::ParenClose)?;

    Ok(expr)
}

/// Literal := NumericalLiteral | StringLiteral
pub fn parse_literal(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.lookahead_kind() {
        Some(TokenKind::Number) => parse_number_literal(parser),
        Some(TokenKind::String) => parse_string_literal(parser),
        Some(found) => Err(ParseError::UnexpectedLiteral { found }.into()),
        None => Err(ParseError::UnexpectedEndOfInput {
            expected: TokenKind::Number,
        }
        .into()),
    }
}

pub fn parse_number_literal(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.eat(TokenKind::Number)?;

    // The lexeme is all digits, so the only way this fails is overflow.
    let value = token.value.parse().map_err(|_| ParseError::NumberOutOfRange {
        literal: token.value.clone(),
    })?;

    Ok(Expr::NumericalLiteral { value })
}

pub fn parse_string_literal(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.eat(TokenKind::String)?;

    // Strip the delimiting quotes; both quote styles arrive here.
    let value = token.value[1..token.value.len() - 1].to_string();

    Ok(Expr::StringLiteral { value })
}
