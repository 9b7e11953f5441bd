/// The command module defines the plotter wire commands.
///
/// Executing a program produces a flat sequence of these commands. Each one
/// prints as a single ASCII line in the plotter protocol.
///
/// # Responsibilities
/// - Defines the closed `Command` enum of plotter operations.
/// - Renders commands in the wire format via `Display`.
pub mod command;
/// The evaluator module executes AST nodes and emits plotter commands.
///
/// The evaluator walks the AST, evaluates expressions to numbers, executes
/// statements against the variable namespace, and appends a plotter command
/// for every turtle action. It is the back end of the compiler.
///
/// # Responsibilities
/// - Evaluates expressions, including the numeric truth encoding.
/// - Executes assignments, loops, conditionals and blocks.
/// - Emits plotter commands in execution order.
/// - Reports runtime errors such as reading an unassigned variable.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens, each
/// corresponding to a meaningful language element such as a number, an
/// identifier, an operator or a keyword. This is the first stage of
/// compilation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with line numbers.
/// - Handles numeric literals, identifiers and the keyword table.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST that represents the syntactic structure of statements
/// and expressions, using a single token of lookahead.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (statements, expressions).
/// - Validates the grammar, reporting errors with location info.
/// - Encodes operator precedence and the two-tier expression grammar.
pub mod parser;
