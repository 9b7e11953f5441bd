#[derive(Debug)]
/// Represents all errors that can occur during tokenization.
pub enum LexError {
    /// Encountered a character that starts no valid token.
    UnknownLexeme {
        /// The offending piece of input.
        lexeme: String,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// A `:` was not followed by `=` to form the assignment operator.
    MalformedOperator {
        /// The offending piece of input.
        lexeme: String,
        /// The source line where the error occurred.
        line:   usize,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownLexeme { lexeme, line } => {
                write!(f, "Error on line {line}: Unknown lexeme '{lexeme}'.")
            },

            Self::MalformedOperator { lexeme, line } => {
                write!(f, "Error on line {line}: Malformed operator '{lexeme}', expected ':='.")
            },
        }
    }
}

impl std::error::Error for LexError {}
