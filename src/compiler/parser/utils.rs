use std::iter::Peekable;

use crate::{
    compiler::{lexer::Token, parser::core::ParseResult},
    error::ParseError,
};

/// Consumes the next token, which must match `expected`.
///
/// This is the parser's single-token matcher: every terminal the grammar
/// requires (`DO`, `OD`, `THEN`, `FI`, `:=`, `)`) goes through here, so a
/// mismatch reports the expectation, the token actually found and its line.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the token to match.
/// - `expected`: The token that must come next.
/// - `describe`: How to spell the expectation in an error message.
///
/// # Errors
/// Returns a `ParseError` if the next token differs from `expected` or the
/// input ends.
pub(in crate::compiler::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                 expected: &Token,
                                                 describe: &'static str)
                                                 -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((token, _)) if token == expected => Ok(()),
        Some((token, line)) => Err(ParseError::ExpectedToken { expected: describe,
                                                               found:    token.to_string(),
                                                               line:     *line, }),
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Parses a plain identifier and returns its name.
///
/// The next token must be `Token::Identifier`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at an identifier.
///
/// # Returns
/// A `String` containing the identifier.
///
/// # Errors
/// Returns a `ParseError` if the next token is not an identifier or the
/// input ends unexpectedly.
pub(in crate::compiler::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                           -> ParseResult<String>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Identifier(name), _)) => Ok(name.clone()),
        Some((token, line)) => {
            Err(ParseError::ExpectedToken { expected: "an identifier",
                                            found:    token.to_string(),
                                            line:     *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}
