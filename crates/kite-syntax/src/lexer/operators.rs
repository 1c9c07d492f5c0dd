//! Operator scanning documentation.
//!
//! This module documents the operator scanning logic in `scanner.rs`.
//! Kite has no fixed set of binary operators. The scanner only knows a small
//! table of compound operators and leaves every other symbol to the operator
//! folder in [`crate::normalize`].
//!
//! ## Compound Operators
//!
//! Matched against the remaining input longest-match-first, before any
//! single-character rule:
//!
//! | Category | Operators |
//! |----------|-----------|
//! | Equality | `==`, `!=` |
//! | Relational | `>=`, `<=` |
//! | Logical | `&&`, `\|\|` |
//! | Increment | `++`, `--` |
//! | Compound assignment | `+=`, `-=`, `*=`, `/=`, `%=` |
//!
//! ## Hyphen and Arrow
//!
//! `-` is a punctuation character of its own kind. The scanner looks one
//! character ahead: `->` becomes a single `Arrow` token, anything else leaves
//! a `Hyphen`.
//!
//! ```text
//! "->"  -> Arrow
//! "- >" -> Hyphen, Whitespace, Unknown
//! "--"  -> Operator (compound table wins)
//! ```
//!
//! ## Closed Operators
//!
//! Operator-like tokens (`Operator`, `Hyphen`, `Arrow`, `Unknown`) record in
//! `is_final` whether the next character could extend them. `<=>` scans as
//! `<=` (not final) followed by `>` (final), which the folder then glues
//! into one custom operator.

// This module serves as documentation. The actual implementation is in scanner.rs.
