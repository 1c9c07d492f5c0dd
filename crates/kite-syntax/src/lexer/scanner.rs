//! The scanner that produces tokens from source text.

use unicode_xid::UnicodeXID;

use super::{Position, Token, TokenKind};
use crate::config::{SyntaxTables, default_tables};
use crate::error::LexError;

/// A scanner that tokenizes Kite source code.
///
/// The scanner keeps every character of the input: whitespace and comments
/// become tokens of their own, and quoted literals are emitted as a delimiter
/// token, content tokens and a closing delimiter token. The normalization
/// passes in [`crate::normalize`] turn that raw stream into what the parser
/// consumes.
pub struct Scanner<'a> {
    source: &'a str,
    tables: &'a SyntaxTables,
    offset: usize,
    position: Position,
    tokens: Vec<Token>,
}

impl<'a> Scanner<'a> {
    /// Creates a new scanner using the default tables.
    pub fn new(source: &'a str) -> Self {
        Self::with_tables(source, default_tables())
    }

    /// Creates a new scanner using the given tables.
    pub fn with_tables(source: &'a str, tables: &'a SyntaxTables) -> Self {
        Self {
            source,
            tables,
            offset: 0,
            position: Position::start(),
            tokens: Vec::new(),
        }
    }

    /// Scans the whole source. The result always ends with exactly one
    /// end-of-input token.
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        while let Some(ch) = self.peek() {
            self.scan_token(ch)?;
        }

        self.tokens.push(Token::end_of_input(self.position));
        tracing::trace!(tokens = self.tokens.len(), "scanned source");
        Ok(self.tokens)
    }

    fn scan_token(&mut self, ch: char) -> Result<(), LexError> {
        let start = self.position;
        let tables = self.tables;

        if tables.is_skippable(ch) {
            self.advance();
            self.push(Token::new(TokenKind::Whitespace, ch.to_string(), start));
            return Ok(());
        }

        if tables.punctuation(ch) == Some(TokenKind::Comment) {
            self.scan_comment(start);
            return Ok(());
        }

        if let Some(op) = tables.match_compound_operator(self.rest()) {
            for _ in op.chars() {
                self.advance();
            }
            let closed = self.is_closed();
            self.push(Token::new(TokenKind::Operator, op, start).with_final(closed));
            return Ok(());
        }

        if ch.is_ascii_digit() || (ch == '.' && self.peek_next().is_some_and(|c| c.is_ascii_digit()))
        {
            return self.scan_number(start);
        }

        if let Some(kind) = tables.quote(ch) {
            return self.scan_quoted(kind, ch, start);
        }

        if let Some(kind) = tables.punctuation(ch) {
            self.advance();
            self.scan_punctuation(kind, ch, start);
            return Ok(());
        }

        if is_alpha(ch) {
            self.scan_identifier(start);
            return Ok(());
        }

        // Left for the operator folder to decide on
        self.advance();
        let closed = self.is_closed();
        self.push(Token::new(TokenKind::Unknown, ch.to_string(), start).with_final(closed));
        Ok(())
    }

    fn rest(&self) -> &'a str {
        &self.source[self.offset..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn peek_next(&self) -> Option<char> {
        self.rest().chars().nth(1)
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.offset += ch.len_utf8();
        self.position = self.position.advance(ch);
        Some(ch)
    }

    fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// An operator is closed unless the next character could extend it.
    fn is_closed(&self) -> bool {
        self.peek()
            .is_none_or(|ch| !self.tables.is_operator_symbol(ch))
    }

    fn scan_comment(&mut self, start: Position) {
        let mut text = String::new();

        while let Some(ch) = self.peek() {
            if ch == '\n' {
                break;
            }
            text.push(ch);
            self.advance();
        }

        self.push(Token::new(TokenKind::Comment, text, start));
    }

    fn scan_punctuation(&mut self, kind: TokenKind, ch: char, start: Position) {
        match kind {
            TokenKind::Hyphen if self.peek() == Some('>') => {
                self.advance();
                let closed = self.is_closed();
                self.push(Token::new(TokenKind::Arrow, "->", start).with_final(closed));
            }
            TokenKind::Hyphen => {
                let closed = self.is_closed();
                self.push(Token::new(TokenKind::Hyphen, "-", start).with_final(closed));
            }
            _ => self.push(Token::new(kind, ch.to_string(), start)),
        }
    }

    fn scan_number(&mut self, start: Position) -> Result<(), LexError> {
        let mut value = String::new();
        let mut dots = 0;

        while let Some(ch) = self.peek() {
            if ch == '.' {
                dots += 1;
            } else if !ch.is_ascii_digit() {
                break;
            }
            value.push(ch);
            self.advance();
        }

        if dots > 1 {
            return Err(LexError::MultipleDecimalPoints {
                lexeme: value,
                position: start,
            });
        }

        self.push(Token::new(TokenKind::Number, value, start));
        Ok(())
    }

    fn scan_quoted(&mut self, kind: TokenKind, quote: char, start: Position) -> Result<(), LexError> {
        self.advance();
        self.push(Token::new(kind, quote.to_string(), start));

        let unterminated = LexError::UnterminatedLiteral {
            kind,
            position: start,
        };
        let mut run = String::new();
        let mut run_start = self.position;

        loop {
            let here = self.position;
            let Some(ch) = self.advance() else {
                return Err(unterminated);
            };

            if ch == quote {
                self.flush_run(&mut run, run_start);
                self.push(Token::new(kind, quote.to_string(), here));
                return Ok(());
            }

            if ch == '\\' {
                self.flush_run(&mut run, run_start);
                let Some(escaped) = self.advance() else {
                    return Err(unterminated);
                };
                let lexeme: String = ['\\', escaped].iter().collect();
                self.push(Token::new(TokenKind::Escape, lexeme, here).internal());
                continue;
            }

            if self.tables.is_skippable(ch) {
                self.flush_run(&mut run, run_start);
                self.push(Token::new(TokenKind::Whitespace, ch.to_string(), here).internal());
                continue;
            }

            if let Some(other) = self.tables.quote(ch) {
                self.flush_run(&mut run, run_start);
                self.push(Token::new(other, ch.to_string(), here).internal());
                continue;
            }

            if run.is_empty() {
                run_start = here;
            }
            run.push(ch);
        }
    }

    fn flush_run(&mut self, run: &mut String, start: Position) {
        if !run.is_empty() {
            let text = std::mem::take(run);
            self.push(Token::new(TokenKind::Unknown, text, start).internal());
        }
    }

    fn scan_identifier(&mut self, start: Position) {
        let mut name = String::new();

        while let Some(ch) = self.peek() {
            if is_alpha(ch) || ch.is_ascii_digit() {
                name.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        let kind = self.tables.keyword(&name);
        self.push(Token::new(kind, name, start));
    }
}

/// Checks if a character is alphabetic for identifier purposes.
fn is_alpha(ch: char) -> bool {
    ch.is_xid_start()
}
