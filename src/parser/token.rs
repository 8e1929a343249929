//! Token definitions
//!
//! A [`Token`] is a [`TokenKind`] plus the literal text it was scanned from.
//! Tokens also remember where they started so parse errors can point at
//! the offending line and column.

use super::ast::SourceLocation;
use std::fmt;

/// Every kind of token the lexer can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Literals
    Identifier,
    Number,
    String,

    // Keywords
    Def,
    Extern,

    // Grouping and punctuation
    LeftParen,          // (
    RightParen,         // )
    LeftCurlyBracket,   // {
    RightCurlyBracket,  // }
    LeftSquareBracket,  // [
    RightSquareBracket, // ]
    Semicolon,          // ;
    Comma,              // ,
    Colon,              // :
    Dot,                // .

    // Single-character operators
    Plus,        // +
    Minus,       // -
    Slash,       // /
    Star,        // *
    Modulo,      // %
    Assign,      // =
    GreaterThan, // >
    LessThan,    // <
    Bang,        // !

    // Two-character operators
    EqualTo,            // ==
    GreaterThanEqualTo, // >=
    LessThanEqualTo,    // <=
    NotEqualTo,         // !=
    And,                // &&
    Or,                 // ||

    Eof,
    Illegal,
}

impl TokenKind {
    /// Stable name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Identifier => "Identifier",
            TokenKind::Number => "Number",
            TokenKind::String => "String",
            TokenKind::Def => "Def",
            TokenKind::Extern => "Extern",
            TokenKind::LeftParen => "LeftParen",
            TokenKind::RightParen => "RightParen",
            TokenKind::LeftCurlyBracket => "LeftCurlyBracket",
            TokenKind::RightCurlyBracket => "RightCurlyBracket",
            TokenKind::LeftSquareBracket => "LeftSquareBracket",
            TokenKind::RightSquareBracket => "RightSquareBracket",
            TokenKind::Semicolon => "Semicolon",
            TokenKind::Comma => "Comma",
            TokenKind::Colon => "Colon",
            TokenKind::Dot => "Dot",
            TokenKind::Plus => "Plus",
            TokenKind::Minus => "Minus",
            TokenKind::Slash => "Slash",
            TokenKind::Star => "Star",
            TokenKind::Modulo => "Modulus",
            TokenKind::Assign => "Assign",
            TokenKind::GreaterThan => "GreaterThan",
            TokenKind::LessThan => "LessThan",
            TokenKind::Bang => "Bang",
            TokenKind::EqualTo => "Equality",
            TokenKind::GreaterThanEqualTo => "GreaterThanEqualTo",
            TokenKind::LessThanEqualTo => "LessThanEqualTo",
            TokenKind::NotEqualTo => "NotEqual",
            TokenKind::And => "And",
            TokenKind::Or => "Or",
            TokenKind::Eof => "EOF",
            TokenKind::Illegal => "Illegal",
        }
    }

    /// Kind for a single punctuation or operator character that never
    /// combines with the character after it.
    pub fn from_single_char(ch: char) -> Option<TokenKind> {
        let kind = match ch {
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '{' => TokenKind::LeftCurlyBracket,
            '}' => TokenKind::RightCurlyBracket,
            '[' => TokenKind::LeftSquareBracket,
            ']' => TokenKind::RightSquareBracket,
            ';' => TokenKind::Semicolon,
            ',' => TokenKind::Comma,
            ':' => TokenKind::Colon,
            '.' => TokenKind::Dot,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '%' => TokenKind::Modulo,
            _ => return None,
        };
        Some(kind)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolve an identifier against the keyword table.
pub fn lookup_ident(ident: &str) -> TokenKind {
    match ident {
        "def" => TokenKind::Def,
        "extern" => TokenKind::Extern,
        _ => TokenKind::Identifier,
    }
}

/// A scanned token.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub location: SourceLocation,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            kind,
            literal: literal.into(),
            location,
        }
    }

    /// Token whose literal is the single character it was scanned from.
    pub fn from_char(kind: TokenKind, ch: char, location: SourceLocation) -> Self {
        Self {
            kind,
            literal: ch.to_string(),
            location,
        }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => write!(f, "end of file"),
            TokenKind::Identifier => write!(f, "identifier '{}'", self.literal),
            TokenKind::Number => write!(f, "number {}", self.literal),
            TokenKind::String => write!(f, "string literal \"{}\"", self.literal),
            _ => write!(f, "'{}'", self.literal),
        }
    }
}
