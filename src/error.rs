/// Tokenization errors.
///
/// Defines the error types that can occur while turning raw source text into
/// tokens: characters that start no token, and a `:` that is not part of the
/// `:=` assignment operator.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while the parser consumes the
/// token stream: unexpected tokens, missing terminals, and constructs cut
/// short by the end of input.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the error types that can be raised while executing a program,
/// such as reading a variable that was never assigned.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
