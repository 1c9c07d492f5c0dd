//! Parser for Kite source code.
//!
//! Transforms a normalized token stream into a list of AST statements.
//!
//! ## Structure
//!
//! - `parser` - Main recursive descent parser implementation
//!
//! ## Documentation Submodules
//!
//! The following submodules provide documentation and additional tests
//! for specific parsing areas:
//!
//! - `statements` - Statement parsing (scopes, assignments, expressions)
//! - `expressions` - Expression parsing (operators, literals, calls, functions)
//!
//! ## Usage
//!
//! ```rust
//! use kite_syntax::parser::Parser;
//!
//! let mut parser = Parser::from_source("x: 1 + 2").unwrap();
//! let program = parser.parse_program().expect("Should parse");
//! assert_eq!(program.len(), 2);
//! ```

#[allow(clippy::module_inception)]
mod parser;

// Documentation and test submodules
pub mod expressions;
pub mod statements;

pub use parser::Parser;

use crate::ast::Statement;
use crate::error::ParseError;
use crate::lexer::Token;

/// Parses a normalized token sequence into statements.
pub fn parse(tokens: Vec<Token>) -> Result<Vec<Statement>, ParseError> {
    Parser::new(tokens).parse_program()
}
