//! # turtlec
//!
//! turtlec is a compiler for a small imperative turtle-graphics language.
//! Programs are built from variables, arithmetic, boolean logic, `WHILE`
//! loops, `IF`/`ELSIF`/`ELSE` conditionals and a fixed set of turtle
//! actions; compiling one produces a flat sequence of plotter commands
//! (`M 10`, `R -90`, ...), one per executed action.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]
// Exact float comparison is the language's truth encoding.
#![allow(clippy::float_cmp)]

use crate::{
    ast::Statement,
    compiler::{
        command::Command, evaluator::core::Context, lexer::tokenize, parser::core::parse_program,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums that represent the
/// syntactic structure of source code as a tree. The AST is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source line numbers to AST nodes for error reporting.
/// - Fixes the ownership discipline: every node exclusively owns its
///   children.
pub mod ast;
/// Orchestrates the entire process of compilation.
///
/// This module ties together lexing, parsing, evaluation and the plotter
/// command type to provide the full pipeline from source text to command
/// sequence.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser and evaluator.
/// - Defines the plotter command wire format.
/// - Manages the flow of data and errors between phases.
pub mod compiler;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines all errors that can be raised while compiling or
/// executing code. It standardizes error reporting and carries detailed
/// information about failures, including source line numbers.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;

/// Parses a turtle program into its statement sequence.
///
/// Tokenizes `source` and runs the recursive-descent parser over the whole
/// input. The returned statements own the entire AST; nothing is executed.
///
/// # Errors
/// Returns an error if tokenization or parsing fails; the first error aborts
/// compilation.
///
/// # Examples
/// ```
/// use turtlec::parse;
///
/// let program = parse("x := 10\nFORWARD x");
/// assert!(program.is_ok());
///
/// // A `:` that is not part of `:=` is caught by the lexer.
/// let program = parse("x : 10");
/// assert!(program.is_err());
/// ```
pub fn parse(source: &str) -> Result<Vec<Statement>, Box<dyn std::error::Error>> {
    let tokens = tokenize(source)?;

    let mut iter = tokens.iter().peekable();
    let program = parse_program(&mut iter)?;

    Ok(program)
}

/// Compiles a turtle program into its plotter command sequence.
///
/// Runs the full pipeline: lexing, parsing and evaluation. Statements
/// execute in order against a single flat variable namespace, and every
/// turtle action appends one command; the commands are returned in
/// execution order.
///
/// # Errors
/// Returns an error if parsing fails, or if evaluation reads a variable that
/// was never assigned.
///
/// # Examples
/// ```
/// use turtlec::compile;
///
/// let commands = compile("x := 10\nFORWARD x").unwrap();
/// let lines: Vec<String> = commands.iter().map(ToString::to_string).collect();
/// assert_eq!(lines, ["M 10"]);
///
/// // Reading an unset variable is an error, not zero.
/// assert!(compile("FORWARD y").is_err());
/// ```
pub fn compile(source: &str) -> Result<Vec<Command>, Box<dyn std::error::Error>> {
    let program = parse(source)?;

    let mut context = Context::new();
    for statement in &program {
        match context.eval_statement(statement) {
            Ok(()) => {},
            Err(e) => return Err(Box::new(e)),
        }
    }

    Ok(context.commands)
}
