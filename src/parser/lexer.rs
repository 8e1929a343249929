//! Lexer (tokenizer)
//!
//! Converts raw source text into [`Token`]s one at a time. The parser pulls
//! tokens on demand through [`Lexer::next_token`]; [`Lexer::tokenize`]
//! drains the whole input for callers that want a flat list.
//!
//! The lexer never fails. Unknown characters (including a lone `&` or `|`)
//! become [`TokenKind::Illegal`] tokens, an unterminated string runs to the
//! end of input, and number literals are taken as any run of digits and dots.
//! Malformed numbers are reported later, when the parser converts them.

use super::ast::SourceLocation;
use super::chars::{is_alpha, is_numeric, is_skippable};
use super::token::{lookup_ident, Token, TokenKind};

/// Character-level scanner over an in-memory source.
///
/// `position` indexes `current`; `read_position` is always one past it.
/// Once the input is exhausted `current` is `None` and every further call
/// to [`Lexer::next_token`] returns an `Eof` token.
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    read_position: usize,
    current: Option<char>,
    line: usize,
    column: usize,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        let mut lexer = Self {
            input: input.chars().collect(),
            position: 0,
            read_position: 0,
            current: None,
            line: 1,
            column: 1,
        };
        lexer.read_char();
        lexer
    }

    /// Scan the next token.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let loc = self.current_location();
        let Some(ch) = self.current else {
            return Token::new(TokenKind::Eof, "", loc);
        };

        let token = match ch {
            '"' => {
                let literal = self.read_string();
                Token::new(TokenKind::String, literal, loc)
            }
            '=' => self.two_char_token('=', TokenKind::EqualTo, TokenKind::Assign, loc),
            '>' => {
                self.two_char_token('=', TokenKind::GreaterThanEqualTo, TokenKind::GreaterThan, loc)
            }
            '<' => self.two_char_token('=', TokenKind::LessThanEqualTo, TokenKind::LessThan, loc),
            '!' => self.two_char_token('=', TokenKind::NotEqualTo, TokenKind::Bang, loc),
            // A lone '&' or '|' is not an operator
            '&' => self.two_char_token('&', TokenKind::And, TokenKind::Illegal, loc),
            '|' => self.two_char_token('|', TokenKind::Or, TokenKind::Illegal, loc),

            // The identifier and number scanners stop on the first character
            // after the token, so they return without the trailing advance.
            _ if is_alpha(ch) => {
                let ident = self.read_identifier();
                return Token::new(lookup_ident(&ident), ident, loc);
            }
            _ if is_numeric(ch) => {
                let number = self.read_number();
                return Token::new(TokenKind::Number, number, loc);
            }

            _ => match TokenKind::from_single_char(ch) {
                Some(kind) => Token::from_char(kind, ch, loc),
                None => Token::from_char(TokenKind::Illegal, ch, loc),
            },
        };

        self.read_char();
        token
    }

    /// Tokenize the entire input, up to and including the `Eof` token.
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token();
            let done = token.is(TokenKind::Eof);
            tokens.push(token);
            if done {
                break;
            }
        }

        tokens
    }

    /// Emit `paired` if the next character is `second` (consuming both),
    /// otherwise `single` for the current character alone.
    fn two_char_token(
        &mut self,
        second: char,
        paired: TokenKind,
        single: TokenKind,
        loc: SourceLocation,
    ) -> Token {
        let first = self.current.unwrap_or_default();
        if self.peek_char() == Some(second) {
            self.read_char();
            Token::new(paired, format!("{first}{second}"), loc)
        } else {
            Token::from_char(single, first, loc)
        }
    }

    /// Read the body of a string literal. Leaves `current` on the closing
    /// quote, or at end of input if the string is unterminated.
    fn read_string(&mut self) -> String {
        let start = self.position + 1;

        loop {
            self.read_char();
            match self.current {
                Some('"') | None => break,
                Some(_) => {}
            }
        }

        self.slice(start, self.position)
    }

    fn read_identifier(&mut self) -> String {
        let start = self.position;
        while self.current.is_some_and(is_alpha) {
            self.read_char();
        }
        self.slice(start, self.position)
    }

    /// Digits and dots, unvalidated: "1.2.3" is one token.
    fn read_number(&mut self) -> String {
        let start = self.position;
        while self.current.is_some_and(|ch| is_numeric(ch) || ch == '.') {
            self.read_char();
        }
        self.slice(start, self.position)
    }

    fn skip_whitespace(&mut self) {
        while self.current.is_some_and(is_skippable) {
            self.read_char();
        }
    }

    /// Advance one character. Saturates at end of input.
    fn read_char(&mut self) {
        match self.current {
            Some('\n') => {
                self.line += 1;
                self.column = 1;
            }
            Some(_) => self.column += 1,
            None => {}
        }

        self.position = self.read_position.min(self.input.len());
        self.current = self.input.get(self.position).copied();
        self.read_position = self.position + 1;
    }

    /// Peek at the character after `current` without consuming
    fn peek_char(&self) -> Option<char> {
        self.input.get(self.read_position).copied()
    }

    fn slice(&self, start: usize, end: usize) -> String {
        let end = end.min(self.input.len());
        let start = start.min(end);
        self.input[start..end].iter().collect()
    }

    /// Get current source location
    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }
}
