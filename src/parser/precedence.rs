//! Operator precedence table for expression parsing.

use super::token::TokenKind;

/// Operator precedence level (higher = tighter binding).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Lowest = 1,
    AndOr = 2,             // &&, ||
    Equals = 3,            // ==, !=
    LessGreaterEqual = 4,  // <=, >=
    LessGreater = 5,       // <, >
    Sum = 6,               // +, -
    Product = 7,           // *, /, %
    Prefix = 8,            // !x, -x
    Call = 9,              // f(x)
    Index = 10,            // Reserved: nothing parses a[i] yet
}

/// Binding power of a token when it appears after an operand.
/// Tokens that cannot continue an expression are `Lowest`.
pub fn get_precedence(kind: TokenKind) -> Precedence {
    match kind {
        TokenKind::And | TokenKind::Or => Precedence::AndOr,

        TokenKind::EqualTo | TokenKind::NotEqualTo => Precedence::Equals,

        TokenKind::GreaterThanEqualTo | TokenKind::LessThanEqualTo => Precedence::LessGreaterEqual,

        TokenKind::LessThan | TokenKind::GreaterThan => Precedence::LessGreater,

        TokenKind::Plus | TokenKind::Minus => Precedence::Sum,

        TokenKind::Slash | TokenKind::Star | TokenKind::Modulo => Precedence::Product,

        TokenKind::LeftParen => Precedence::Call,

        TokenKind::LeftSquareBracket => Precedence::Index,

        _ => Precedence::Lowest,
    }
}
