//! # Introduction
//!
//! Kaleido is the front end of a small expression language: a character-level
//! lexer and a Pratt parser that together turn source text into an AST.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Parser → AST (+ diagnostics)
//! ```
//!
//! 1. [`Lexer`] scans one [`Token`] at a time and never fails; anything it
//!    does not recognize becomes an `Illegal` token.
//! 2. [`Parser`] pulls tokens with one token of lookahead and builds a
//!    [`Program`]. Malformed input is recorded as [`ParseError`]s while
//!    parsing carries on, so the result may be a partial tree.
//! 3. Every AST node renders to a fully parenthesized string, which makes
//!    operator nesting easy to compare.
//!
//! ```
//! use kaleido::Parser;
//!
//! let mut parser = Parser::from_source("1 + 2 * 3; foo(1, 2 + 3)");
//! let program = parser.parse_program();
//!
//! assert!(parser.errors().is_empty());
//! assert_eq!(program.to_string(), "(1 + (2 * 3))foo(1, (2 + 3))");
//! ```

pub mod parser;

pub use parser::ast::{Expression, Program, SourceLocation, Statement};
pub use parser::error::ParseError;
pub use parser::lexer::Lexer;
pub use parser::parser::{parse, Parser};
pub use parser::token::{Token, TokenKind};
