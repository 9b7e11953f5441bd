use logos::Logos;

use crate::error::LexError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
///
/// Keywords are matched case-sensitively, so `forward` is an ordinary
/// identifier while `FORWARD` is the move action.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Numeric literal tokens, such as `90` or `22.5`. There is no exponent
    /// notation and no leading sign; signs belong to the grammar.
    #[regex(r"[0-9]+(\.[0-9]+)?", parse_real)]
    Real(f64),
    /// Identifier tokens; variable names such as `x` or `angle`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `HOME`
    #[token("HOME")]
    Home,
    /// `PENUP`
    #[token("PENUP")]
    PenUp,
    /// `PENDOWN`
    #[token("PENDOWN")]
    PenDown,
    /// `FORWARD`
    #[token("FORWARD")]
    Forward,
    /// `LEFT`
    #[token("LEFT")]
    Left,
    /// `RIGHT`
    #[token("RIGHT")]
    Right,
    /// `PUSHSTATE`
    #[token("PUSHSTATE")]
    PushState,
    /// `POPSTATE`
    #[token("POPSTATE")]
    PopState,
    /// `OR`
    #[token("OR")]
    Or,
    /// `AND`
    #[token("AND")]
    And,
    /// `NOT`
    #[token("NOT")]
    Not,
    /// `WHILE`
    #[token("WHILE")]
    While,
    /// `DO`
    #[token("DO")]
    Do,
    /// `OD`
    #[token("OD")]
    Od,
    /// `IF`
    #[token("IF")]
    If,
    /// `THEN`
    #[token("THEN")]
    Then,
    /// `ELSIF`
    #[token("ELSIF")]
    Elsif,
    /// `ELSE`
    #[token("ELSE")]
    Else,
    /// `FI`
    #[token("FI")]
    Fi,
    /// `:=`
    #[token(":=")]
    Assign,
    /// `=`
    #[token("=")]
    Equal,
    /// `<>`
    #[token("<>")]
    NotEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `# Comments.` running to the end of the line.
    #[regex(r"#[^\n\r]*", logos::skip)]
    Comment,
    /// Line breaks are skipped but counted for diagnostics.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Real(value) => write!(f, "{value}"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Home => write!(f, "HOME"),
            Self::PenUp => write!(f, "PENUP"),
            Self::PenDown => write!(f, "PENDOWN"),
            Self::Forward => write!(f, "FORWARD"),
            Self::Left => write!(f, "LEFT"),
            Self::Right => write!(f, "RIGHT"),
            Self::PushState => write!(f, "PUSHSTATE"),
            Self::PopState => write!(f, "POPSTATE"),
            Self::Or => write!(f, "OR"),
            Self::And => write!(f, "AND"),
            Self::Not => write!(f, "NOT"),
            Self::While => write!(f, "WHILE"),
            Self::Do => write!(f, "DO"),
            Self::Od => write!(f, "OD"),
            Self::If => write!(f, "IF"),
            Self::Then => write!(f, "THEN"),
            Self::Elsif => write!(f, "ELSIF"),
            Self::Else => write!(f, "ELSE"),
            Self::Fi => write!(f, "FI"),
            Self::Assign => write!(f, ":="),
            Self::Equal => write!(f, "="),
            Self::NotEqual => write!(f, "<>"),
            Self::LessEqual => write!(f, "<="),
            Self::GreaterEqual => write!(f, ">="),
            Self::Less => write!(f, "<"),
            Self::Greater => write!(f, ">"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            // Skipped variants never reach a token stream.
            Self::Comment | Self::NewLine | Self::Ignored => Ok(()),
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
/// Incremented as newlines are processed.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value if successful.
/// - `None`: If the token slice is not a valid number.
fn parse_real(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Runs the lexer over `source` and collects every token together with the
/// line it appeared on.
///
/// The whole input is tokenized eagerly; the parser consumes the resulting
/// vector with one token of lookahead. The end of the vector is the end of
/// input.
///
/// # Errors
/// Returns [`LexError::MalformedOperator`] when a `:` is not followed by `=`,
/// and [`LexError::UnknownLexeme`] for any other character that starts no
/// token. The first lexical error aborts tokenization.
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        if let Ok(token) = token {
            tokens.push((token, lexer.extras.line));
        } else {
            let lexeme = lexer.slice().to_string();
            let line = lexer.extras.line;
            return Err(if lexeme.starts_with(':') {
                           LexError::MalformedOperator { lexeme, line }
                       } else {
                           LexError::UnknownLexeme { lexeme, line }
                       });
        }
    }

    Ok(tokens)
}
