// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! # kite-syntax
//!
//! The front end of Kite, a small experimental language, implemented in Rust.
//!
//! ## Overview
//!
//! This crate turns Kite source text into a typed syntax tree:
//! - A lossless tokenizer with line and column tracking
//! - Normalization passes that group quoted literals, fold custom operators
//!   and drop whitespace
//! - A recursive descent parser producing scopes, assignments and expressions
//! - An optional pass that rewrites binary operators into function calls
//! - Parallel batch parsing over a thread pool (`parallel` feature)
//!
//! ## Quick Start
//!
//! ```rust
//! use kite_syntax::Frontend;
//! use kite_syntax::ast::{Expression, Statement};
//!
//! let frontend = Frontend::new();
//! let program = frontend.parse_source("x: 5").unwrap();
//!
//! let Statement::Assignment(assignment) = &program[0] else { unreachable!() };
//! assert_eq!(assignment.target.name, "x");
//! assert_eq!(assignment.value, Expression::number(5.0));
//! assert_eq!(program[1], Statement::EndOfInput);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ast;
pub mod config;
pub mod error;
pub mod lexer;
pub mod normalize;
pub mod parser;

#[cfg(feature = "parallel")]
mod batch;

// Re-exports for convenience
pub use ast::Statement;
pub use config::SyntaxTables;
pub use error::{Error, LexError, ParseError, ParseErrorKind, Result};
pub use lexer::{Position, Token, TokenKind};

#[cfg(feature = "parallel")]
pub use batch::ParallelFrontend;

use tracing::{debug, instrument};

/// The Kite front end.
///
/// Owns the syntax tables and runs the pipeline stages with them:
/// tokenize, normalize, then parse. A `Frontend` holds no per-source state,
/// so one instance can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Frontend {
    tables: SyntaxTables,
}

impl Frontend {
    /// Creates a front end with the default tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a front end with custom tables.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kite_syntax::{Frontend, SyntaxTables, TokenKind};
    ///
    /// let tables = SyntaxTables::default().with_compound_operator("|>");
    /// let frontend = Frontend::with_tables(tables);
    /// let tokens = frontend.tokenize("a |> b").unwrap();
    /// assert_eq!(tokens[2].kind, TokenKind::Operator);
    /// assert_eq!(tokens[2].lexeme, "|>");
    /// ```
    pub fn with_tables(tables: SyntaxTables) -> Self {
        Self { tables }
    }

    /// Returns the tables this front end was built with.
    pub fn tables(&self) -> &SyntaxTables {
        &self.tables
    }

    /// Tokenizes `source` without normalizing.
    ///
    /// The result keeps whitespace and comments, and splits quoted literals
    /// into their delimiter and content tokens.
    pub fn tokenize(&self, source: &str) -> std::result::Result<Vec<Token>, LexError> {
        lexer::Scanner::with_tables(source, &self.tables).tokenize()
    }

    /// Tokenizes and normalizes `source` into the stream the parser consumes.
    pub fn lex(&self, source: &str) -> std::result::Result<Vec<Token>, LexError> {
        let tokens = self.tokenize(source)?;
        Ok(normalize::normalize_with(tokens, &self.tables))
    }

    /// Parses an already normalized token sequence.
    pub fn parse_tokens(&self, tokens: Vec<Token>) -> std::result::Result<Vec<Statement>, ParseError> {
        parser::parse(tokens)
    }

    /// Runs the whole pipeline over `source`.
    ///
    /// The result always ends with [`Statement::EndOfInput`].
    #[instrument(level = "debug", skip(self, source), fields(len = source.len()))]
    pub fn parse_source(&self, source: &str) -> Result<Vec<Statement>> {
        let tokens = self.lex(source).inspect_err(|err| debug!(%err, "lexing failed"))?;
        let count = tokens.len();

        let statements = self
            .parse_tokens(tokens)
            .inspect_err(|err| debug!(%err, "parsing failed"))?;

        debug!(tokens = count, statements = statements.len(), "parsed source");
        Ok(statements)
    }
}

/// Tokenizes `source` with the default tables, without normalizing.
pub fn tokenize(source: &str) -> std::result::Result<Vec<Token>, LexError> {
    lexer::tokenize(source)
}

/// Tokenizes and normalizes `source` with the default tables.
pub fn lex(source: &str) -> std::result::Result<Vec<Token>, LexError> {
    Ok(normalize::normalize(lexer::tokenize(source)?))
}

/// Parses `source` with the default tables.
pub fn parse_source(source: &str) -> Result<Vec<Statement>> {
    Ok(parser::parse(lex(source)?)?)
}
