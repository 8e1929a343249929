//! Language front end
//!
//! This module transforms source text into an Abstract Syntax Tree (AST):
//! - [`chars`]: Character classes (letters, digits, whitespace)
//! - [`token`]: Token kinds and the keyword table
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parser`]: Parsing (tokens → AST)
//! - [`ast`]: AST node definitions and their canonical rendering
//!
//! # Language
//!
//! - Expressions: identifiers, numbers, `!`/`-` prefixes, arithmetic,
//!   comparison and logical operators, grouping, calls
//! - Statements: expressions, optionally terminated by `;`
//! - Keywords `def` and `extern` are recognized by the lexer only
//!
//! # Parser Implementation
//!
//! Hand-written Pratt parser with table-driven prefix/infix dispatch.
//! No external parser generator dependencies.

pub mod ast;
pub mod chars;
pub mod error;
mod expressions;
pub mod lexer;
#[allow(clippy::module_inception)]
pub mod parser;
pub mod precedence;
mod statements;
pub mod token;
