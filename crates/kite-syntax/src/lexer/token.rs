//! Token definitions for the Kite lexer.

use std::fmt;

/// A position in the source code. Both coordinates are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Position {
    /// Line number, incremented on every `\n`
    pub line: u32,
    /// Column number, reset to 1 after every `\n`
    pub column: u32,
}

impl Position {
    /// Creates a new position.
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// The position of the first character of a source text.
    pub fn start() -> Self {
        Self { line: 1, column: 1 }
    }

    /// Returns the position after consuming `ch` from this position.
    pub fn advance(self, ch: char) -> Self {
        if ch == '\n' {
            Self {
                line: self.line + 1,
                column: 1,
            }
        } else {
            Self {
                line: self.line,
                column: self.column + 1,
            }
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The raw text as it appears in the source
    pub lexeme: String,
    /// The kind of token
    pub kind: TokenKind,
    /// Line of the token's first character
    pub line: u32,
    /// Column of the token's first character
    pub column: u32,
    /// Whether an operator-like token is closed (not glued to the next
    /// character). `None` for every other kind.
    pub is_final: Option<bool>,
    /// Set on tokens emitted from inside a quoted literal.
    pub is_internal: bool,
}

impl Token {
    /// Creates a new token.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, position: Position) -> Self {
        Self {
            lexeme: lexeme.into(),
            kind,
            line: position.line,
            column: position.column,
            is_final: None,
            is_internal: false,
        }
    }

    /// Creates an end-of-input token at `position`.
    pub fn end_of_input(position: Position) -> Self {
        Self::new(TokenKind::EndOfInput, "EOF", position)
    }

    /// Marks whether this token is closed.
    pub fn with_final(mut self, is_final: bool) -> Self {
        self.is_final = Some(is_final);
        self
    }

    /// Marks this token as literal content.
    pub fn internal(mut self) -> Self {
        self.is_internal = true;
        self
    }

    /// Returns the position of the token's first character.
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// Returns true if the token is glued to the character that follows it.
    pub fn is_glued(&self) -> bool {
        self.is_final == Some(false)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} `{}` at {}",
            self.kind.kind_name(),
            self.lexeme,
            self.position()
        )
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Token {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut fields = 5;
        if self.is_final.is_some() {
            fields += 1;
        }
        if self.is_internal {
            fields += 1;
        }

        let mut state = serializer.serialize_struct("Token", fields)?;
        state.serialize_field("lexeme", &self.lexeme)?;
        state.serialize_field("kind", &self.kind)?;
        state.serialize_field("kindName", self.kind.kind_name())?;
        state.serialize_field("line", &self.line)?;
        state.serialize_field("column", &self.column)?;
        if let Some(is_final) = self.is_final {
            state.serialize_field("isFinal", &is_final)?;
        }
        if self.is_internal {
            state.serialize_field("isInternal", &true)?;
        }
        state.end()
    }
}

/// The different kinds of tokens in Kite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TokenKind {
    // Literals
    /// Identifier or keyword-free name
    Identifier,
    /// Numeric literal (integer or decimal)
    Number,
    /// `"` delimited string literal
    String,
    /// `'` delimited char literal
    Char,
    /// `` ` `` delimited template string
    TemplateString,

    // Operators
    /// `-` not followed by `>`
    Hyphen,
    /// Compound or custom operator
    Operator,

    // Grouping
    /// (
    OpenParenthesis,
    /// )
    CloseParenthesis,
    /// {
    OpenBrace,
    /// }
    CloseBrace,
    /// [
    OpenBracket,
    /// ]
    CloseBracket,

    // Punctuation
    /// ,
    Comma,
    /// .
    Dot,
    /// ;
    SemiColon,
    /// :
    Colon,
    /// ->
    Arrow,

    // Special
    /// Character with no dedicated kind
    Unknown,
    /// `#` line comment
    Comment,
    /// Backslash escape
    Escape,
    /// Space, tab or newline
    Whitespace,
    /// End of input
    EndOfInput,
}

impl TokenKind {
    /// Returns the stable display name of this kind.
    pub fn kind_name(self) -> &'static str {
        match self {
            TokenKind::Identifier => "Identifier",
            TokenKind::Number => "Number",
            TokenKind::String => "String",
            TokenKind::Char => "Char",
            TokenKind::TemplateString => "TemplateString",
            TokenKind::Hyphen => "Hyphen",
            TokenKind::Operator => "Operator",
            TokenKind::OpenParenthesis => "OpenParenthesis",
            TokenKind::CloseParenthesis => "CloseParenthesis",
            TokenKind::OpenBrace => "OpenBrace",
            TokenKind::CloseBrace => "CloseBrace",
            TokenKind::OpenBracket => "OpenBracket",
            TokenKind::CloseBracket => "CloseBracket",
            TokenKind::Comma => "Comma",
            TokenKind::Dot => "Dot",
            TokenKind::SemiColon => "SemiColon",
            TokenKind::Colon => "Colon",
            TokenKind::Arrow => "Arrow",
            TokenKind::Unknown => "Unknown",
            TokenKind::Comment => "Comment",
            TokenKind::Escape => "Escape",
            TokenKind::Whitespace => "Whitespace",
            TokenKind::EndOfInput => "EndOfInput",
        }
    }

    /// Returns true if this token is a literal.
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::Number | TokenKind::String | TokenKind::Char | TokenKind::TemplateString
        )
    }

    /// Returns true for the quoted literal kinds the grouper reassembles.
    pub fn is_quoted_literal(self) -> bool {
        matches!(
            self,
            TokenKind::String | TokenKind::Char | TokenKind::TemplateString
        )
    }

    /// Returns true for kinds that carry an `is_final` flag.
    pub fn is_operator_like(self) -> bool {
        matches!(
            self,
            TokenKind::Operator | TokenKind::Hyphen | TokenKind::Arrow | TokenKind::Unknown
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind_name())
    }
}
