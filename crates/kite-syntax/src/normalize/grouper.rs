//! Literal grouping.
//!
//! Reassembles the quoted literals the scanner split into delimiter and
//! content tokens, and strips their delimiters.

use crate::lexer::Token;

/// Groups quoted literal pieces into single tokens.
///
/// A single forward scan over `tokens` that builds a new sequence:
///
/// - a literal marker opens a literal when none is open;
/// - a marker of the open literal's kind closes it;
/// - every other token met while a literal is open, including markers of a
///   different kind, is appended to the literal's lexeme and dropped.
///
/// Markers that never collected more than their own delimiter are dropped,
/// and the first and last characters of every remaining literal are removed.
pub fn group(tokens: Vec<Token>) -> Vec<Token> {
    let mut grouped: Vec<Token> = Vec::with_capacity(tokens.len());
    // Index into `grouped` of the literal being collected
    let mut open: Option<usize> = None;

    for token in tokens {
        match open {
            None if token.kind.is_quoted_literal() => {
                open = Some(grouped.len());
                grouped.push(Token {
                    is_internal: false,
                    ..token
                });
            }
            None => grouped.push(token),
            Some(index) => {
                let literal = &mut grouped[index];
                literal.lexeme.push_str(&token.lexeme);
                if token.kind == literal.kind {
                    open = None;
                }
            }
        }
    }

    if let Some(index) = open {
        tracing::trace!(
            line = grouped[index].line,
            column = grouped[index].column,
            "literal left open at end of token stream"
        );
    }

    grouped
        .into_iter()
        .filter(|token| !(token.kind.is_quoted_literal() && token.lexeme.chars().count() == 1))
        .map(|token| {
            if token.kind.is_quoted_literal() {
                strip_delimiters(token)
            } else {
                token
            }
        })
        .collect()
}

fn strip_delimiters(mut token: Token) -> Token {
    let mut chars = token.lexeme.chars();
    chars.next();
    chars.next_back();
    token.lexeme = chars.as_str().to_string();
    token
}
