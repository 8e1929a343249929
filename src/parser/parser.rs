//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure:
//! the token buffer, the handler registries, diagnostics, and the
//! [`Parser::parse_program`] entry point.
//!
//! # Parser Architecture
//!
//! The parser is a Pratt (precedence climbing) parser:
//! - This module: Parser struct, token helpers, registries, and coordination
//! - `statements`: statement parsing
//! - `expressions`: `parse_expression` and the prefix/infix handlers
//! - `precedence`: the binding power of each operator
//!
//! Which handler runs for a token is decided by table lookup on its
//! [`TokenKind`]: a [`PrefixRule`] when the token starts an expression, an
//! [`InfixRule`] when it follows a complete left operand. The tables start
//! from [`PREFIX_RULES`] and [`INFIX_RULES`] and can be extended per parser.
//!
//! # Errors
//!
//! Parsing never stops early. Every problem is recorded as a [`ParseError`]
//! and the affected sub-tree is left as `None`; the caller inspects
//! [`Parser::errors`] once [`Parser::parse_program`] returns.

use crate::parser::ast::*;
use crate::parser::error::ParseError;
use crate::parser::lexer::Lexer;
use crate::parser::precedence::{get_precedence, Precedence};
use crate::parser::token::{Token, TokenKind};
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

/// Maximum nesting of sub-expressions before the parser gives up on an
/// expression instead of recursing further.
pub const MAX_NESTING_DEPTH: usize = 128;

/// Handlers for tokens that begin an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixRule {
    /// `foo`
    Identifier,
    /// `3.14`
    Number,
    /// `!x`, `-x`
    Prefix,
    /// `( expr )`
    Grouped,
}

/// Handlers for tokens that continue an expression after a left operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfixRule {
    /// `left <op> right`, binding at the operator's own precedence
    Binary,
    /// `callee(args...)`
    Call,
}

/// Prefix handlers every parser starts with.
pub const PREFIX_RULES: &[(TokenKind, PrefixRule)] = &[
    (TokenKind::Identifier, PrefixRule::Identifier),
    (TokenKind::Number, PrefixRule::Number),
    (TokenKind::Bang, PrefixRule::Prefix),
    (TokenKind::Minus, PrefixRule::Prefix),
    (TokenKind::LeftParen, PrefixRule::Grouped),
];

/// Infix handlers every parser starts with.
pub const INFIX_RULES: &[(TokenKind, InfixRule)] = &[
    (TokenKind::Plus, InfixRule::Binary),
    (TokenKind::Minus, InfixRule::Binary),
    (TokenKind::Slash, InfixRule::Binary),
    (TokenKind::Star, InfixRule::Binary),
    (TokenKind::Modulo, InfixRule::Binary),
    (TokenKind::EqualTo, InfixRule::Binary),
    (TokenKind::NotEqualTo, InfixRule::Binary),
    (TokenKind::GreaterThanEqualTo, InfixRule::Binary),
    (TokenKind::LessThanEqualTo, InfixRule::Binary),
    (TokenKind::GreaterThan, InfixRule::Binary),
    (TokenKind::LessThan, InfixRule::Binary),
    (TokenKind::And, InfixRule::Binary),
    (TokenKind::Or, InfixRule::Binary),
    (TokenKind::LeftParen, InfixRule::Call),
];

/// Pratt parser over a pull-based [`Lexer`]
pub struct Parser {
    lexer: Lexer,
    pub(crate) current: Token,
    pub(crate) peek: Token,
    errors: Vec<ParseError>,
    prefix_rules: FxHashMap<TokenKind, PrefixRule>,
    infix_rules: FxHashMap<TokenKind, InfixRule>,
    pub(crate) depth: usize,
}

impl Parser {
    /// Create a parser and load the first two tokens.
    pub fn new(lexer: Lexer) -> Self {
        let placeholder = Token::new(TokenKind::Eof, "", SourceLocation::default());
        let mut parser = Self {
            lexer,
            current: placeholder.clone(),
            peek: placeholder,
            errors: Vec::new(),
            prefix_rules: PREFIX_RULES.iter().copied().collect(),
            infix_rules: INFIX_RULES.iter().copied().collect(),
            depth: 0,
        };

        // Fill peek, then current and peek
        parser.next_token();
        parser.next_token();
        parser
    }

    pub fn from_source(source: &str) -> Self {
        Self::new(Lexer::new(source))
    }

    /// Parse the entire program.
    ///
    /// Always returns a program; check [`Parser::errors`] afterwards.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::new();

        while !self.current_is(TokenKind::Eof) {
            program.statements.push(self.parse_statement());
            self.next_token();
        }

        debug!(
            statements = program.statements.len(),
            errors = self.errors.len(),
            "parsed program"
        );
        program
    }

    /// Diagnostics recorded so far, in the order they were found.
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// Route `kind` to a prefix handler, returning the handler it replaces.
    pub fn register_prefix(&mut self, kind: TokenKind, rule: PrefixRule) -> Option<PrefixRule> {
        self.prefix_rules.insert(kind, rule)
    }

    /// Route `kind` to an infix handler, returning the handler it replaces.
    ///
    /// Binary operators bind at [`get_precedence`] of their kind, so a kind
    /// with `Lowest` precedence never continues an expression.
    pub fn register_infix(&mut self, kind: TokenKind, rule: InfixRule) -> Option<InfixRule> {
        self.infix_rules.insert(kind, rule)
    }

    pub fn prefix_rule(&self, kind: TokenKind) -> Option<PrefixRule> {
        self.prefix_rules.get(&kind).copied()
    }

    pub fn infix_rule(&self, kind: TokenKind) -> Option<InfixRule> {
        self.infix_rules.get(&kind).copied()
    }

    pub fn current_token(&self) -> &Token {
        &self.current
    }

    pub fn peek_token(&self) -> &Token {
        &self.peek
    }

    // ===== Helper methods =====

    pub(crate) fn next_token(&mut self) {
        let next = self.lexer.next_token();
        trace!(kind = %next.kind, literal = %next.literal, "pulled token");
        self.current = std::mem::replace(&mut self.peek, next);
    }

    pub(crate) fn current_is(&self, kind: TokenKind) -> bool {
        self.current.is(kind)
    }

    pub(crate) fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.is(kind)
    }

    /// Advance if the next token is `kind`; otherwise record an error and
    /// stay put.
    pub(crate) fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_is(kind) {
            self.next_token();
            true
        } else {
            self.error(ParseError::UnexpectedToken {
                expected: kind,
                found: self.peek.kind,
                location: self.peek.location,
            });
            false
        }
    }

    pub(crate) fn current_precedence(&self) -> Precedence {
        get_precedence(self.current.kind)
    }

    pub(crate) fn peek_precedence(&self) -> Precedence {
        get_precedence(self.peek.kind)
    }

    pub(crate) fn error(&mut self, err: ParseError) {
        debug!(%err, "parse error recorded");
        self.errors.push(err);
    }
}

/// Parse `source` in one go, treating any diagnostic as failure.
pub fn parse(source: &str) -> Result<Program, Vec<ParseError>> {
    let mut parser = Parser::from_source(source);
    let program = parser.parse_program();

    if parser.errors.is_empty() {
        Ok(program)
    } else {
        Err(parser.errors)
    }
}
