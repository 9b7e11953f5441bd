use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    compiler::{
        lexer::Token,
        parser::{
            binary::parse_comparison,
            core::{ParseResult, parse_condition, parse_expression},
            utils::expect,
        },
    },
    error::ParseError,
};

/// Parses a factor, the atomic level of the arithmetic grammar.
///
/// Supports:
/// - prefix `+` (a no-op: the operand is returned unchanged)
/// - prefix `-` (numeric negation)
/// - parenthesized expressions
/// - variable references
/// - numeric literals
///
/// Prefix signs recurse on `factor`, so they bind tighter than any binary
/// operator and stack freely (`--x` negates twice).
///
/// Grammar:
/// ```text
///     factor := "+" factor
///             | "-" factor
///             | "(" expression ")"
///             | identifier
///             | number
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a factor.
///
/// # Returns
/// The parsed factor [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_factor<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let peeked = tokens.peek()
                       .ok_or(ParseError::UnexpectedEndOfInput { line: 0 })?;

    match peeked {
        (Token::Plus, _) => {
            tokens.next();
            parse_factor(tokens)
        },
        (Token::Minus, line) => {
            let line = *line;
            tokens.next();
            let expr = parse_factor(tokens)?;
            Ok(Expr::UnaryOp { op:   UnaryOperator::Negate,
                               expr: Box::new(expr),
                               line })
        },
        (Token::LParen, _) => {
            tokens.next();
            let expr = parse_expression(tokens)?;
            expect(tokens, &Token::RParen, "')'")?;
            Ok(expr)
        },
        (Token::Identifier(name), line) => {
            let name = name.clone();
            let line = *line;
            tokens.next();
            Ok(Expr::Variable { name, line })
        },
        (Token::Real(value), line) => {
            let value = *value;
            let line = *line;
            tokens.next();
            Ok(Expr::Literal { value, line })
        },
        (token, line) => Err(ParseError::UnexpectedToken { token: token.to_string(),
                                                           line:  *line, }),
    }
}

/// Parses a factor of the boolean grammar.
///
/// `NOT` recurses on `bool_factor`, and a leading parenthesis always groups
/// a whole condition (never an arithmetic operand); everything else must be
/// a comparison.
///
/// Grammar:
/// ```text
///     bool_factor := "NOT" bool_factor
///                  | "(" condition ")"
///                  | compare
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a boolean factor.
///
/// # Returns
/// The parsed [`Expr`], normalized to a canonical truth value when
/// evaluated.
pub(crate) fn parse_bool_factor<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.peek() {
        Some((Token::Not, line)) => {
            let line = *line;
            tokens.next();
            let expr = parse_bool_factor(tokens)?;
            Ok(Expr::UnaryOp { op:   UnaryOperator::Not,
                               expr: Box::new(expr),
                               line })
        },
        Some((Token::LParen, _)) => {
            tokens.next();
            let condition = parse_condition(tokens)?;
            expect(tokens, &Token::RParen, "')'")?;
            Ok(condition)
        },
        _ => parse_comparison(tokens),
    }
}
