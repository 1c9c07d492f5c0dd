//! Literal scanning documentation.
//!
//! This module documents the literal scanning logic in `scanner.rs`.
//!
//! ## Numeric Literals
//!
//! ```text
//! 42     -> Number
//! 3.14   -> Number
//! .5     -> Number (a dot directly followed by a digit)
//! 7.     -> Number
//! 1.2.3  -> LexError::MultipleDecimalPoints
//! ```
//!
//! The lexeme is kept as written; the parser converts it to `f64`.
//!
//! ## Quoted Literals
//!
//! | Delimiter | Kind |
//! |-----------|------|
//! | `"` | `String` |
//! | `'` | `Char` |
//! | `` ` `` | `TemplateString` |
//!
//! These are the defaults of the quote table in
//! [`SyntaxTables`](crate::SyntaxTables); `with_quote` and `with_punctuation`
//! change which characters delimit literals.
//!
//! The scanner does not build the literal's value. It emits the opening
//! delimiter as a one-character token of the literal kind, then the content
//! as internal tokens, then the closing delimiter:
//!
//! ```text
//! "a b\"c"
//!   String  `"`
//!   Unknown `a`     (internal)
//!   Whitespace ` `  (internal)
//!   Unknown `b`     (internal)
//!   Escape  `\"`    (internal)
//!   Unknown `c`     (internal)
//!   String  `"`
//! ```
//!
//! A backslash escapes the next character, which therefore never closes the
//! literal. Escapes are kept verbatim; nothing is decoded. A quote character
//! of a different kind inside the literal is emitted as an internal marker
//! of its own kind. The grouper in [`crate::normalize`] stitches everything
//! back together.
//!
//! Reaching the end of input before the closing delimiter is a
//! `LexError::UnterminatedLiteral` at the opening delimiter.
//!
//! ## Identifiers
//!
//! An identifier starts with an alphabetic character (Unicode `XID_Start`)
//! and continues with alphabetic characters or ASCII digits. The word is
//! looked up in the keyword table of [`SyntaxTables`](crate::SyntaxTables);
//! the default table is empty, so every word is an `Identifier`.

// This module serves as documentation. The actual implementation is in scanner.rs.

#[cfg(test)]
mod tests {
    use crate::error::LexError;
    use crate::lexer::{Position, Scanner, Token, TokenKind};

    fn scan(src: &str) -> Vec<Token> {
        Scanner::new(src).tokenize().unwrap()
    }

    #[test]
    fn test_integer() {
        let tokens = scan("1234");
        assert_eq!(tokens[0].kind, TokenKind::Number);
        assert_eq!(tokens[0].lexeme, "1234");
    }

    #[test]
    fn test_leading_dot() {
        let tokens = scan(".25");
        assert_eq!(tokens[0].kind, TokenKind::Number);
        assert_eq!(tokens[0].lexeme, ".25");
    }

    #[test]
    fn test_two_dots_fail() {
        let err = Scanner::new("..5").tokenize();
        // A lone dot is punctuation; ".5" is then a number
        assert!(err.is_ok());

        let err = Scanner::new(".5.5").tokenize().unwrap_err();
        assert!(matches!(err, LexError::MultipleDecimalPoints { .. }));
    }

    #[test]
    fn test_string_pieces() {
        let tokens = scan(r#""a b\"c""#);
        let pieces: Vec<(TokenKind, &str, bool)> = tokens
            .iter()
            .map(|t| (t.kind, t.lexeme.as_str(), t.is_internal))
            .collect();
        assert_eq!(
            pieces,
            vec![
                (TokenKind::String, "\"", false),
                (TokenKind::Unknown, "a", true),
                (TokenKind::Whitespace, " ", true),
                (TokenKind::Unknown, "b", true),
                (TokenKind::Escape, "\\\"", true),
                (TokenKind::Unknown, "c", true),
                (TokenKind::String, "\"", false),
                (TokenKind::EndOfInput, "EOF", false),
            ]
        );
    }

    #[test]
    fn test_char_with_foreign_quote() {
        let tokens = scan(r#"'"'"#);
        assert_eq!(tokens[0].kind, TokenKind::Char);
        assert_eq!(tokens[1].kind, TokenKind::String);
        assert!(tokens[1].is_internal);
        assert_eq!(tokens[2].kind, TokenKind::Char);
    }

    #[test]
    fn test_template_string() {
        let tokens = scan("`x`");
        assert_eq!(tokens[0].kind, TokenKind::TemplateString);
        assert_eq!(tokens[2].kind, TokenKind::TemplateString);
    }

    #[test]
    fn test_empty_string() {
        let tokens = scan(r#""""#);
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[1].kind, TokenKind::String);
    }

    #[test]
    fn test_escaped_backslash_closes() {
        let tokens = scan(r#""\\""#);
        assert_eq!(tokens[1].lexeme, "\\\\");
        assert_eq!(tokens[2].kind, TokenKind::String);
        assert_eq!(tokens[3].kind, TokenKind::EndOfInput);
    }

    #[test]
    fn test_unterminated_char() {
        let err = Scanner::new("\n  'x").tokenize().unwrap_err();
        assert_eq!(
            err,
            LexError::UnterminatedLiteral {
                kind: TokenKind::Char,
                position: Position::new(2, 3),
            }
        );
    }

    #[test]
    fn test_identifier_with_digits() {
        let tokens = scan("abc123");
        assert_eq!(tokens[0].lexeme, "abc123");
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
    }

    #[test]
    fn test_underscore_is_not_alphabetic() {
        let tokens = scan("_x");
        assert_eq!(tokens[0].kind, TokenKind::Unknown);
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
    }
}
