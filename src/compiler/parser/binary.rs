use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    compiler::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            unary::{parse_bool_factor, parse_factor},
        },
    },
    error::ParseError,
};

/// Parses addition and subtraction expressions.
///
/// Handles the left-associative binary operators `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_multiplicative(tokens)?;
    loop {
        if let Some((token, line)) = tokens.peek()
           && let Some(op) = arithmetic_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            tokens.next();
            let right = parse_multiplicative(tokens)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line: *line };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles the left-associative binary operators `*` and `/`.
///
/// The rule is: `multiplicative := factor (("*" | "/") factor)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
///
/// # Returns
/// A binary expression tree combining factor-level nodes.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_factor(tokens)?;
    loop {
        if let Some((token, line)) = tokens.peek()
           && let Some(op) = arithmetic_operator(token)
           && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            tokens.next();
            let right = parse_factor(tokens)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line: *line };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses an `OR` chain, the lowest-precedence level of the boolean grammar.
///
/// The rule is: `logical_or := logical_and ("OR" logical_and)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
///
/// # Returns
/// A left-associative `Expr::BinaryOp` chain of `OR` nodes.
pub fn parse_logical_or<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_logical_and(tokens)?;
    while let Some((Token::Or, line)) = tokens.peek() {
        tokens.next();
        let right = parse_logical_and(tokens)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op: BinaryOperator::Or,
                                right: Box::new(right),
                                line: *line };
    }
    Ok(left)
}

/// Parses an `AND` chain.
///
/// The rule is: `logical_and := bool_factor ("AND" bool_factor)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
///
/// # Returns
/// A left-associative `Expr::BinaryOp` chain of `AND` nodes.
pub fn parse_logical_and<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_bool_factor(tokens)?;
    while let Some((Token::And, line)) = tokens.peek() {
        tokens.next();
        let right = parse_bool_factor(tokens)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op: BinaryOperator::And,
                                right: Box::new(right),
                                line: *line };
    }
    Ok(left)
}

/// Parses a single relational comparison between two arithmetic expressions.
///
/// The operator is required, and exactly one comparison is consumed:
/// comparisons are non-associative, so a chained `a < b < c` leaves the
/// second `<` for the caller, where it fails against the surrounding
/// grammar.
///
/// The rule is:
/// `compare := expression ("=" | "<>" | "<" | "<=" | ">" | ">=") expression`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the left operand.
///
/// # Returns
/// An `Expr::BinaryOp` node with a comparison operator.
///
/// # Errors
/// Returns [`ParseError::ExpectedComparison`] when no comparison operator
/// follows the left operand.
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let left = parse_expression(tokens)?;

    let (op, line) = match tokens.peek() {
        Some((token, line)) => match comparison_operator(token) {
            Some(op) => (op, *line),
            None => {
                return Err(ParseError::ExpectedComparison { found: token.to_string(),
                                                            line:  *line, });
            },
        },
        None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    };
    tokens.next();

    let right = parse_expression(tokens)?;
    Ok(Expr::BinaryOp { left: Box::new(left),
                        op,
                        right: Box::new(right),
                        line })
}

/// Maps a token to its arithmetic operator, if it is one.
const fn arithmetic_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}

/// Maps a token to its comparison operator, if it is one.
const fn comparison_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Equal => Some(BinaryOperator::Equal),
        Token::NotEqual => Some(BinaryOperator::NotEqual),
        Token::Less => Some(BinaryOperator::Less),
        Token::LessEqual => Some(BinaryOperator::LessEqual),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        _ => None,
    }
}
