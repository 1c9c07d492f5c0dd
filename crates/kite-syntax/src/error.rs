//! Error types for the Kite front end.

use thiserror::Error;

use crate::lexer::{Position, Token, TokenKind};

/// Result type for front end operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while turning source text into tokens.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// A quoted literal reached end of input before its closing delimiter
    #[error("LexError: unterminated {kind} literal starting at {position}")]
    UnterminatedLiteral {
        /// Kind of the unclosed literal
        kind: TokenKind,
        /// Position of the opening delimiter
        position: Position,
    },

    /// A numeric literal with more than one decimal point
    #[error("LexError: invalid number `{lexeme}` with multiple decimal points at {position}")]
    MultipleDecimalPoints {
        /// The full scanned numeric text
        lexeme: String,
        /// Position of the number's first character
        position: Position,
    },
}

impl LexError {
    /// Returns the position the error refers to.
    pub fn position(&self) -> Position {
        match self {
            LexError::UnterminatedLiteral { position, .. }
            | LexError::MultipleDecimalPoints { position, .. } => *position,
        }
    }
}

/// The grammar rule a [`ParseError`] violated.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// No statement can start with the current token
    #[error("Unrecognized statement")]
    UnrecognizedStatement,

    /// End of input inside a `{ ... }` scope
    #[error("Unclosed scope")]
    UnclosedScope,

    /// A `(` without its matching `)`
    #[error("Unclosed parenthesis")]
    UnclosedParenthesis,

    /// A `[` without its matching `]`
    #[error("Unclosed bracket")]
    UnclosedBracket,

    /// A parameter definition that is not `name: type`
    #[error("Malformed parameter definition")]
    MalformedParameter,

    /// A specific token was required
    #[error("Expected {0}")]
    ExpectedToken(TokenKind),

    /// A parameter definition list not followed by `->`
    #[error("Expected arrow after parameter definitions")]
    ExpectedArrow,

    /// An array element that is neither a literal nor an identifier
    #[error("Invalid array element")]
    InvalidArrayElement,

    /// A number token whose text is not a valid number
    #[error("Invalid number literal")]
    InvalidNumber,

    /// No expression can start with the current token
    #[error("Unrecognized primary expression")]
    UnrecognizedPrimary,

    /// Brackets, braces or parentheses nested past the parser's limit
    #[error("Nesting too deep")]
    NestingTooDeep,
}

/// A grammar violation, carrying the offending token first and any other
/// tokens involved after it.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("ParseError: {kind}{}", describe_tokens(.tokens))]
pub struct ParseError {
    /// The rule that was violated
    pub kind: ParseErrorKind,
    /// The offending token followed by related tokens
    pub tokens: Vec<Token>,
}

impl ParseError {
    /// Creates an error pointing at a single token.
    pub fn new(kind: ParseErrorKind, token: &Token) -> Self {
        Self {
            kind,
            tokens: vec![token.clone()],
        }
    }

    /// Creates an error pointing at several tokens.
    pub fn with_tokens(kind: ParseErrorKind, tokens: Vec<Token>) -> Self {
        Self { kind, tokens }
    }

    /// Returns the offending token.
    pub fn token(&self) -> Option<&Token> {
        self.tokens.first()
    }

    /// Returns the position of the offending token.
    pub fn position(&self) -> Option<Position> {
        self.token().map(Token::position)
    }
}

fn describe_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|token| format!("\n  {}", token))
        .collect()
}

/// Errors that can occur anywhere in the front end pipeline.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Tokenizer failure
    #[error(transparent)]
    Lex(#[from] LexError),

    /// Parser failure
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl Error {
    /// Returns the position the error refers to, if known.
    pub fn position(&self) -> Option<Position> {
        match self {
            Error::Lex(err) => Some(err.position()),
            Error::Parse(err) => err.position(),
        }
    }
}
