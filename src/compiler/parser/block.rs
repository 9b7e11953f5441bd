use std::iter::Peekable;

use crate::{
    ast::Statement,
    compiler::{
        lexer::Token,
        parser::{
            core::ParseResult,
            statement::{parse_statement, starts_statement},
        },
    },
};

/// Parses a block: a maximal run of statements treated as one unit.
///
/// A block has no delimiters of its own. It begins with any statement and
/// keeps absorbing statements while the lookahead token can start another
/// one; the surrounding construct's terminator (`OD`, `ELSIF`, `FI`, end of
/// input, ...) is what stops the repetition. Loop bodies, conditional
/// branches and the top-level program body all parse through here.
///
/// Grammar: `block := statement+`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the block's first statement.
///
/// # Returns
/// A `Statement::Block` containing at least one statement.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let line = tokens.peek().map_or(0, |(_, l)| *l);
    let mut statements = vec![parse_statement(tokens)?];

    while let Some((token, _)) = tokens.peek()
          && starts_statement(token)
    {
        statements.push(parse_statement(tokens)?);
    }

    Ok(Statement::Block { statements, line })
}
