//! Token stream normalization.
//!
//! The scanner's output is lossless and over-split. These passes run between
//! the scanner and the parser, in this order:
//!
//! 1. [`group`] - reassembles quoted literals and strips their delimiters
//! 2. [`fold_operators`] - glues operator pieces into custom operators
//! 3. [`filter`] - removes whitespace tokens
//!
//! Grouping must see whitespace tokens to fold them into open literals, and
//! operator folding must see them to know which pieces are adjacent, so the
//! whitespace filter always runs last.
//!
//! ```rust
//! use kite_syntax::lexer::{tokenize, TokenKind};
//! use kite_syntax::normalize;
//!
//! let tokens = normalize::normalize(tokenize("say(\"hi you\")").unwrap());
//! assert_eq!(tokens[2].kind, TokenKind::String);
//! assert_eq!(tokens[2].lexeme, "hi you");
//! ```

mod grouper;
mod operators;
mod whitespace;

pub use grouper::group;
pub use operators::fold_operators;
pub use whitespace::filter;

use crate::config::{SyntaxTables, default_tables};
use crate::lexer::Token;

/// Runs every normalization pass with the default tables.
pub fn normalize(tokens: Vec<Token>) -> Vec<Token> {
    normalize_with(tokens, default_tables())
}

/// Runs every normalization pass with the given tables.
pub fn normalize_with(tokens: Vec<Token>, tables: &SyntaxTables) -> Vec<Token> {
    let raw = tokens.len();
    let tokens = filter(fold_operators(group(tokens), tables));
    tracing::trace!(raw, normalized = tokens.len(), "normalized token stream");
    tokens
}
