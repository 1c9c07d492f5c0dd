//! Whitespace filtering.

use crate::lexer::{Token, TokenKind};

/// Removes every whitespace token.
///
/// Run after [`group`](super::group) so whitespace inside quotes has already
/// been folded into its literal.
pub fn filter(tokens: Vec<Token>) -> Vec<Token> {
    tokens
        .into_iter()
        .filter(|token| token.kind != TokenKind::Whitespace)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Scanner;
    use crate::normalize::group;

    fn scan(src: &str) -> Vec<Token> {
        Scanner::new(src).tokenize().unwrap()
    }

    #[test]
    fn test_removes_whitespace() {
        let tokens = filter(scan(" a \t b \n"));
        let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::EndOfInput
            ]
        );
    }

    #[test]
    fn test_idempotent() {
        for src in ["", "a b", "  { x: 1 }\n", "f(\"a b\", 'c')", "# note\nx"] {
            let once = filter(group(scan(src)));
            let twice = filter(once.clone());
            assert_eq!(once, twice, "{src}");
        }
    }

    #[test]
    fn test_keeps_whitespace_inside_literals() {
        let tokens = filter(group(scan("\"a  b\"")));
        assert_eq!(tokens[0].lexeme, "a  b");
    }

    #[test]
    fn test_comments_survive() {
        let tokens = filter(scan("# note"));
        assert_eq!(tokens[0].kind, TokenKind::Comment);
    }
}
