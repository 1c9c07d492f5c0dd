//! Custom operator folding.
//!
//! Kite lets programs use any run of operator symbols as a binary operator.
//! The scanner only recognizes the compound operator table; everything else
//! arrives here as glued `Operator`, `Hyphen` and `Unknown` pieces.
//!
//! A hyphen glued directly to a lone compound operator is not folded into
//! it: `a==-1` stays `==` followed by `-`, instead of becoming `==-`.

use crate::config::SyntaxTables;
use crate::lexer::{Token, TokenKind};

/// Folds glued operator pieces into single `Operator` tokens.
///
/// Must run before whitespace is filtered: a piece is only glued to the
/// next one when nothing separates them in the source.
pub fn fold_operators(tokens: Vec<Token>, tables: &SyntaxTables) -> Vec<Token> {
    let mut folded: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut run: Vec<Token> = Vec::new();

    for token in tokens {
        if is_piece(&token, tables) {
            let extends =
                run.last().is_some_and(Token::is_glued) && !hyphen_after_compound(&run, &token);
            if !extends {
                flush(&mut run, &mut folded);
            }
            run.push(token);
        } else {
            flush(&mut run, &mut folded);
            folded.push(token);
        }
    }
    flush(&mut run, &mut folded);

    folded
}

fn is_piece(token: &Token, tables: &SyntaxTables) -> bool {
    match token.kind {
        TokenKind::Operator | TokenKind::Hyphen => true,
        TokenKind::Unknown => !token.is_internal && tables.is_operator_text(&token.lexeme),
        _ => false,
    }
}

fn hyphen_after_compound(run: &[Token], token: &Token) -> bool {
    // only the scanner's compound table produces an `Operator` piece
    token.kind == TokenKind::Hyphen && matches!(run, [only] if only.kind == TokenKind::Operator)
}

fn flush(run: &mut Vec<Token>, folded: &mut Vec<Token>) {
    let mut pieces = std::mem::take(run).into_iter();
    let Some(first) = pieces.next() else {
        return;
    };

    let mut operator = Token {
        kind: match first.kind {
            TokenKind::Hyphen => TokenKind::Hyphen,
            _ => TokenKind::Operator,
        },
        ..first
    };
    for piece in pieces {
        operator.kind = TokenKind::Operator;
        operator.lexeme.push_str(&piece.lexeme);
        operator.is_final = piece.is_final;
    }

    folded.push(operator);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Scanner;

    fn fold_source(src: &str) -> Vec<Token> {
        let tables = SyntaxTables::default();
        fold_operators(Scanner::new(src).tokenize().unwrap(), &tables)
            .into_iter()
            .filter(|t| t.kind != TokenKind::Whitespace)
            .collect()
    }

    fn operator_lexemes(src: &str) -> Vec<(TokenKind, String)> {
        fold_source(src)
            .into_iter()
            .filter(|t| matches!(t.kind, TokenKind::Operator | TokenKind::Hyphen))
            .map(|t| (t.kind, t.lexeme))
            .collect()
    }

    #[test]
    fn test_single_symbol_becomes_operator() {
        assert_eq!(
            operator_lexemes("a + b"),
            vec![(TokenKind::Operator, "+".to_string())]
        );
    }

    #[test]
    fn test_glued_pieces_fold() {
        let tokens = fold_source("a <=> b");
        assert_eq!(tokens[1].kind, TokenKind::Operator);
        assert_eq!(tokens[1].lexeme, "<=>");
        assert_eq!(tokens[1].column, 3);
        assert_eq!(tokens[1].is_final, Some(true));
    }

    #[test]
    fn test_lone_hyphen_stays_hyphen() {
        assert_eq!(
            operator_lexemes("a - b"),
            vec![(TokenKind::Hyphen, "-".to_string())]
        );
    }

    #[test]
    fn test_hyphen_run_becomes_operator() {
        assert_eq!(
            operator_lexemes("a -* b"),
            vec![(TokenKind::Operator, "-*".to_string())]
        );
    }

    #[test]
    fn test_hyphen_does_not_extend_compound_operator() {
        assert_eq!(
            operator_lexemes("a==-1"),
            vec![
                (TokenKind::Operator, "==".to_string()),
                (TokenKind::Hyphen, "-".to_string()),
            ]
        );
        assert_eq!(
            operator_lexemes("x+=-y"),
            vec![
                (TokenKind::Operator, "+=".to_string()),
                (TokenKind::Hyphen, "-".to_string()),
            ]
        );
    }

    #[test]
    fn test_hyphen_extends_custom_operator() {
        assert_eq!(
            operator_lexemes("a <>- b"),
            vec![(TokenKind::Operator, "<>-".to_string())]
        );
        assert_eq!(
            operator_lexemes("a <== b"),
            vec![(TokenKind::Operator, "<==".to_string())]
        );
    }

    #[test]
    fn test_spaced_symbols_stay_apart() {
        assert_eq!(
            operator_lexemes("a + + b"),
            vec![
                (TokenKind::Operator, "+".to_string()),
                (TokenKind::Operator, "+".to_string()),
            ]
        );
    }

    #[test]
    fn test_symbol_glued_to_identifier() {
        let tokens = fold_source("a+b");
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[1].kind, TokenKind::Operator);
        assert_eq!(tokens[1].lexeme, "+");
    }

    #[test]
    fn test_non_symbol_unknown_untouched() {
        let tokens = fold_source("$");
        assert_eq!(tokens[0].kind, TokenKind::Unknown);
    }

    #[test]
    fn test_arrow_is_not_folded() {
        let tokens = fold_source("(a: x) -> a");
        assert!(tokens.iter().any(|t| t.kind == TokenKind::Arrow));
    }

    #[test]
    fn test_literal_content_untouched() {
        let tokens = fold_source(r#""+""#);
        assert_eq!(tokens[1].kind, TokenKind::Unknown);
        assert!(tokens[1].is_internal);
    }
}
