//! Static lexer tables.
//!
//! The keyword table, compound operator table, punctuation table, quote
//! table and the operator symbol set are plain data. They are built once, handed to the
//! [`Scanner`](crate::lexer::Scanner) or [`Frontend`](crate::Frontend) at
//! construction, and never mutated afterwards.

use std::sync::LazyLock;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::lexer::TokenKind;

static DEFAULT_TABLES: LazyLock<SyntaxTables> = LazyLock::new(SyntaxTables::default);

/// Returns the shared default tables.
pub fn default_tables() -> &'static SyntaxTables {
    &DEFAULT_TABLES
}

/// Compound operators recognized by the scanner.
pub const COMPOUND_OPERATORS: &[&str] = &[
    "==", "!=", ">=", "<=", "&&", "||", "++", "--", "+=", "-=", "*=", "/=", "%=",
];

/// Single characters with a dedicated token kind.
pub const PUNCTUATION: &[(char, TokenKind)] = &[
    ('-', TokenKind::Hyphen),
    ('(', TokenKind::OpenParenthesis),
    (')', TokenKind::CloseParenthesis),
    ('{', TokenKind::OpenBrace),
    ('}', TokenKind::CloseBrace),
    ('[', TokenKind::OpenBracket),
    (']', TokenKind::CloseBracket),
    (',', TokenKind::Comma),
    ('.', TokenKind::Dot),
    (';', TokenKind::SemiColon),
    (':', TokenKind::Colon),
    ('#', TokenKind::Comment),
    ('\\', TokenKind::Escape),
];

/// Quote delimiters and the literal kind each one opens.
pub const QUOTES: &[(char, TokenKind)] = &[
    ('"', TokenKind::String),
    ('\'', TokenKind::Char),
    ('`', TokenKind::TemplateString),
];

/// Characters that may be glued together into a custom operator.
pub const OPERATOR_SYMBOLS: &[char] = &[
    '+', '-', '*', '/', '%', '<', '>', '=', '!', '&', '|', '^', '~', '?', '@',
];

/// Characters emitted as whitespace tokens.
pub const SKIPPABLE: &[char] = &[' ', '\t', '\n', '\r'];

/// The lexer's lookup tables.
#[derive(Debug, Clone)]
pub struct SyntaxTables {
    keywords: FxHashMap<String, TokenKind>,
    /// Sorted longest first so the first match is the longest match.
    compound_operators: Vec<String>,
    punctuation: FxHashMap<char, TokenKind>,
    quotes: FxHashMap<char, TokenKind>,
    operator_symbols: FxHashSet<char>,
    skippable: FxHashSet<char>,
}

impl SyntaxTables {
    /// Creates tables with no keywords and no operators.
    pub fn empty() -> Self {
        Self {
            keywords: FxHashMap::default(),
            compound_operators: Vec::new(),
            punctuation: FxHashMap::default(),
            quotes: FxHashMap::default(),
            operator_symbols: FxHashSet::default(),
            skippable: FxHashSet::default(),
        }
    }

    /// Adds a keyword mapped to `kind`.
    pub fn with_keyword(mut self, keyword: impl Into<String>, kind: TokenKind) -> Self {
        self.keywords.insert(keyword.into(), kind);
        self
    }

    /// Adds a compound operator.
    pub fn with_compound_operator(mut self, operator: impl Into<String>) -> Self {
        let operator = operator.into();
        if !operator.is_empty() && !self.compound_operators.contains(&operator) {
            self.compound_operators.push(operator);
            self.compound_operators
                .sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));
        }
        self
    }

    /// Maps a single character to a token kind. The character stops being a
    /// quote delimiter if it was one.
    pub fn with_punctuation(mut self, ch: char, kind: TokenKind) -> Self {
        self.quotes.remove(&ch);
        self.punctuation.insert(ch, kind);
        self
    }

    /// Makes `ch` a quote delimiter opening a literal of `kind`, which should
    /// be `String`, `Char` or `TemplateString`. The character stops being
    /// punctuation if it was.
    pub fn with_quote(mut self, ch: char, kind: TokenKind) -> Self {
        self.punctuation.remove(&ch);
        self.quotes.insert(ch, kind);
        self
    }

    /// Adds a character that may take part in a custom operator.
    pub fn with_operator_symbol(mut self, ch: char) -> Self {
        self.operator_symbols.insert(ch);
        self
    }

    /// Adds a character emitted as a whitespace token.
    pub fn with_skippable(mut self, ch: char) -> Self {
        self.skippable.insert(ch);
        self
    }

    /// Looks up the token kind of an identifier-shaped word.
    pub fn keyword(&self, word: &str) -> TokenKind {
        self.keywords
            .get(word)
            .copied()
            .unwrap_or(TokenKind::Identifier)
    }

    /// Returns the longest compound operator `rest` starts with.
    pub fn match_compound_operator(&self, rest: &str) -> Option<&str> {
        self.compound_operators
            .iter()
            .find(|op| rest.starts_with(op.as_str()))
            .map(String::as_str)
    }

    /// Returns the dedicated kind of a punctuation character.
    pub fn punctuation(&self, ch: char) -> Option<TokenKind> {
        self.punctuation.get(&ch).copied()
    }

    /// Returns the literal kind a quote delimiter opens.
    pub fn quote(&self, ch: char) -> Option<TokenKind> {
        self.quotes.get(&ch).copied()
    }

    /// Returns true if `ch` may be part of a custom operator.
    pub fn is_operator_symbol(&self, ch: char) -> bool {
        self.operator_symbols.contains(&ch)
    }

    /// Returns true if every character of `text` is an operator symbol.
    pub fn is_operator_text(&self, text: &str) -> bool {
        !text.is_empty() && text.chars().all(|ch| self.is_operator_symbol(ch))
    }

    /// Returns true if `ch` is emitted as a whitespace token.
    pub fn is_skippable(&self, ch: char) -> bool {
        self.skippable.contains(&ch)
    }

    /// Returns the compound operators, longest first.
    pub fn compound_operators(&self) -> impl Iterator<Item = &str> {
        self.compound_operators.iter().map(String::as_str)
    }
}

impl Default for SyntaxTables {
    fn default() -> Self {
        let tables = COMPOUND_OPERATORS
            .iter()
            .fold(Self::empty(), |tables, op| tables.with_compound_operator(*op));
        let tables = PUNCTUATION
            .iter()
            .fold(tables, |tables, (ch, kind)| tables.with_punctuation(*ch, *kind));
        let tables = QUOTES
            .iter()
            .fold(tables, |tables, (ch, kind)| tables.with_quote(*ch, *kind));
        let tables = OPERATOR_SYMBOLS
            .iter()
            .fold(tables, |tables, ch| tables.with_operator_symbol(*ch));
        SKIPPABLE
            .iter()
            .fold(tables, |tables, ch| tables.with_skippable(*ch))
    }
}
