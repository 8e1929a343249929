//! Character classes used by the lexer
//!
//! Identifiers and numbers are ASCII only; anything else falls through to
//! an illegal token in the lexer.

/// ASCII letter or underscore.
pub fn is_alpha(ch: char) -> bool {
    matches!(ch, 'a'..='z' | 'A'..='Z' | '_')
}

/// ASCII decimal digit.
pub fn is_numeric(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// Space, tab, newline or carriage return.
pub fn is_skippable(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r')
}
