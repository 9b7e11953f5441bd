#[derive(Debug)]
/// Represents all errors that can occur while parsing the token stream.
pub enum ParseError {
    /// Found a token that no grammar rule can begin with at this position.
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input in the middle of a construct.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A specific token was required but something else was found.
    ExpectedToken {
        /// How the expectation is spelled in the grammar.
        expected: &'static str,
        /// The token actually found.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A statement was required but the token cannot start one.
    ExpectedStatement {
        /// The token actually found.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A comparison operator was required between two arithmetic operands.
    ExpectedComparison {
        /// The token actually found.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },

            Self::ExpectedToken { expected,
                                  found,
                                  line, } => {
                write!(f, "Error on line {line}: Expected {expected}, found '{found}'.")
            },

            Self::ExpectedStatement { found, line } => {
                write!(f, "Error on line {line}: Expected a statement, found '{found}'.")
            },

            Self::ExpectedComparison { found, line } => write!(f,
                                                               "Error on line {line}: Expected a comparison operator, found '{found}'."),
        }
    }
}

impl std::error::Error for ParseError {}
