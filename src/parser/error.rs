//! Parse error types
//!
//! Parse errors are diagnostics, not failures: the parser records them and
//! keeps going. See [`Parser::errors`](super::parser::Parser::errors).

use super::ast::SourceLocation;
use super::token::TokenKind;
use thiserror::Error;

/// A problem found while parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No prefix handler is registered for a token that starts an expression
    #[error("no prefix parse function for {kind} found at {location}")]
    NoPrefixParseFn {
        kind: TokenKind,
        location: SourceLocation,
    },

    /// Number literal text that does not parse as a float
    #[error("could not parse {literal:?} as a number at {location}")]
    InvalidNumber {
        literal: String,
        location: SourceLocation,
    },

    /// A required token was not next in the stream
    #[error("expected next token to be {expected}, got {found} instead at {location}")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
        location: SourceLocation,
    },

    /// Expression nesting exceeded the parser's depth limit
    #[error("expression nested deeper than {limit} levels at {location}")]
    NestingTooDeep {
        limit: usize,
        location: SourceLocation,
    },
}

impl ParseError {
    /// Where the problem was detected.
    pub fn location(&self) -> SourceLocation {
        match self {
            ParseError::NoPrefixParseFn { location, .. }
            | ParseError::InvalidNumber { location, .. }
            | ParseError::UnexpectedToken { location, .. }
            | ParseError::NestingTooDeep { location, .. } => *location,
        }
    }
}
