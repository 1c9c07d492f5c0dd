//! Expression parsing utilities and documentation.
//!
//! This module documents the expression parsing logic found in `parser.rs`.
//!
//! ## Operators
//!
//! Kite has no operator precedence. An expression is a primary followed by
//! any number of `operator primary` pairs, folded to the left:
//!
//! ```text
//! a + b * c   =>   (a + b) * c
//! ```
//!
//! Any operator token works, including custom ones such as `<=>` or `|>`
//! assembled by [`crate::normalize::fold_operators`]. Parentheses group.
//!
//! ## Primary Expressions
//!
//! - Identifiers: `foo`
//! - Literals: `42`, `.5`, `"text"`, `'c'`, `` `template` ``
//! - Function calls: `foo(1, { bar() })`
//! - Function definitions: `(a: int, b: int) -> a + b`, `() -> { ... }`
//! - Array literals: `[1, a, "b"]`
//! - Scopes: `{ ... }`
//! - Parenthesized: `(a + b)`
//!
//! ## Telling definitions from groups
//!
//! A `(` starts a function definition when it is followed by `)`, by
//! `identifier :` or by `identifier ,`. Anything else is a parenthesized
//! expression. `(x) -> ...` is rejected as a malformed parameter.
//!
//! ## Grammar
//!
//! ```text
//! Expression :
//!     Primary (Operator Primary)*
//!
//! Primary :
//!     Identifier
//!     Identifier ( Params? )
//!     Literal
//!     ( Expression )
//!     ( ParamDefinitions? ) -> Body
//!     [ ArrayElements? ]
//!     Scope
//!
//! Params :
//!     (Expression | Scope) (, (Expression | Scope))*
//!
//! ParamDefinitions :
//!     Identifier : Identifier (, Identifier : Identifier)*
//!
//! Body :
//!     Scope
//!     Expression
//! ```

// This module serves as documentation. The actual implementation is in parser.rs.
