//! Statement parsing utilities and documentation.
//!
//! This module documents the statement parsing logic found in `parser.rs`.
//!
//! ## Statement Types
//!
//! | Statement | Starts with | Method |
//! |-----------|-------------|--------|
//! | Scope | `{` | `parse_scope` |
//! | Assignment | identifier followed by `:` | `parse_assignment` |
//! | Expression | literal, identifier or `(` | `parse_expression` |
//! | Empty | `;` | inline in `parse_statement` |
//!
//! Any other leading token is an unrecognized statement. Every statement may
//! be followed by one `;`, which is consumed and otherwise ignored. The
//! program's statement list always ends with `Statement::EndOfInput`.
//!
//! ## Grammar Overview
//!
//! ```text
//! Program :
//!     Statement* EOF
//!
//! Statement :
//!     Scope ;?
//!     Identifier : Expression ;?
//!     Expression ;?
//!     ;
//!
//! Scope :
//!     { Statement* }
//! ```
//!
//! ## Example
//!
//! ```rust
//! use kite_syntax::ast::Statement;
//! use kite_syntax::parser::Parser;
//!
//! let program = Parser::from_source("{ a: 1; log(a) }").unwrap().parse_program().unwrap();
//! assert!(matches!(program[0], Statement::Scope(_)));
//! ```

// This module serves as documentation. The actual implementation is in parser.rs.
