//! Lexical analysis (tokenization) for Kite source code.
//!
//! The lexer transforms Kite source text into a flat sequence of
//! position-tagged tokens. It is deliberately lossless: whitespace, comments
//! and the pieces of quoted literals all come out as tokens, and the passes
//! in [`crate::normalize`] clean the stream up for the parser.
//!
//! ## Structure
//!
//! - `scanner.rs` - Main `Scanner` struct that produces tokens
//! - `token.rs` - `Token`, `TokenKind` and `Position` definitions
//!
//! ## Documentation Submodules
//!
//! - `operators` - Compound operators, hyphens and arrows
//! - `literals` - Number, quoted literal and identifier scanning
//!
//! ## Usage
//!
//! ```rust
//! use kite_syntax::lexer::{tokenize, TokenKind};
//!
//! let tokens = tokenize("x: 42").unwrap();
//! assert_eq!(tokens.last().unwrap().kind, TokenKind::EndOfInput);
//! ```

mod scanner;
mod token;

// Documentation and test submodules
pub mod literals;
pub mod operators;

pub use scanner::Scanner;
pub use token::{Position, Token, TokenKind};

use crate::error::LexError;

/// Tokenizes `source` with the default tables.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Scanner::new(source).tokenize()
}
