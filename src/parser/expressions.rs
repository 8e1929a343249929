//! Expression parsing implementation
//!
//! Pratt-style precedence climbing. [`Parser::parse_expression`] runs the
//! prefix handler for the current token, then keeps folding the result into
//! infix handlers while the next token binds tighter than the caller's
//! precedence.
//!
//! # Supported Expressions
//!
//! - Identifiers and number literals
//! - Prefix operators: `!`, `-`
//! - Binary operators: `&& ||`, `== !=`, `>= <=`, `< >`, `+ -`, `* / %`
//! - Grouping: `( expr )`
//! - Calls: `callee(arg, ...)`
//!
//! Every binary operator parses its right operand at its own precedence,
//! which makes all of them left-associative.
//!
//! Handlers never fail hard. A handler that cannot build its node records a
//! [`ParseError`] and returns `None`, or leaves the missing operand as `None`.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::error::ParseError;
use crate::parser::parser::{InfixRule, Parser, PrefixRule, MAX_NESTING_DEPTH};
use crate::parser::precedence::Precedence;
use crate::parser::token::TokenKind;

impl Parser {
    /// Parse an expression whose operators bind tighter than `precedence`.
    ///
    /// Starts at the current token and leaves the current token on the last
    /// token of the expression.
    pub(crate) fn parse_expression(&mut self, precedence: Precedence) -> Option<Expression> {
        if self.depth >= MAX_NESTING_DEPTH {
            self.error(ParseError::NestingTooDeep {
                limit: MAX_NESTING_DEPTH,
                location: self.current.location,
            });
            return None;
        }

        self.depth += 1;
        let expr = self.parse_precedence(precedence);
        self.depth -= 1;
        expr
    }

    fn parse_precedence(&mut self, precedence: Precedence) -> Option<Expression> {
        let Some(prefix) = self.prefix_rule(self.current.kind) else {
            self.error(ParseError::NoPrefixParseFn {
                kind: self.current.kind,
                location: self.current.location,
            });
            return None;
        };

        let mut left = self.parse_prefix(prefix);

        while !self.peek_is(TokenKind::Semicolon) && precedence < self.peek_precedence() {
            let Some(infix) = self.infix_rule(self.peek.kind) else {
                return left;
            };

            self.next_token();
            left = Some(self.parse_infix(infix, left));
        }

        left
    }

    fn parse_prefix(&mut self, rule: PrefixRule) -> Option<Expression> {
        match rule {
            PrefixRule::Identifier => Some(self.parse_identifier()),
            PrefixRule::Number => self.parse_number_literal(),
            PrefixRule::Prefix => Some(self.parse_prefix_expression()),
            PrefixRule::Grouped => self.parse_grouped_expression(),
        }
    }

    fn parse_infix(&mut self, rule: InfixRule, left: Option<Expression>) -> Expression {
        match rule {
            InfixRule::Binary => self.parse_infix_expression(left),
            InfixRule::Call => self.parse_call_expression(left),
        }
    }

    // ===== Prefix handlers =====

    fn parse_identifier(&mut self) -> Expression {
        Expression::Identifier(Identifier {
            token: self.current.clone(),
            value: self.current.literal.clone(),
        })
    }

    /// Malformed literals like `1.2.3` are caught here, not in the lexer.
    /// Literals too large for an `f64` are rejected rather than read as
    /// infinity.
    fn parse_number_literal(&mut self) -> Option<Expression> {
        match self.current.literal.parse::<f64>() {
            Ok(value) if value.is_finite() => Some(Expression::Number(NumberLiteral {
                token: self.current.clone(),
                value,
            })),
            _ => {
                self.error(ParseError::InvalidNumber {
                    literal: self.current.literal.clone(),
                    location: self.current.location,
                });
                None
            }
        }
    }

    fn parse_prefix_expression(&mut self) -> Expression {
        let token = self.current.clone();
        let operator = token.literal.clone();

        self.next_token(); // consume operator
        let right = self.parse_expression(Precedence::Prefix).map(Box::new);

        Expression::Prefix(PrefixExpression {
            token,
            operator,
            right,
        })
    }

    fn parse_grouped_expression(&mut self) -> Option<Expression> {
        self.next_token(); // consume '('

        let expr = self.parse_expression(Precedence::Lowest);
        if !self.expect_peek(TokenKind::RightParen) {
            return None;
        }

        expr
    }

    // ===== Infix handlers =====

    fn parse_infix_expression(&mut self, left: Option<Expression>) -> Expression {
        let token = self.current.clone();
        let operator = token.literal.clone();
        let precedence = self.current_precedence();

        self.next_token(); // consume operator
        let right = self.parse_expression(precedence).map(Box::new);

        Expression::Infix(InfixExpression {
            token,
            left: left.map(Box::new),
            operator,
            right,
        })
    }

    fn parse_call_expression(&mut self, function: Option<Expression>) -> Expression {
        let token = self.current.clone();
        let arguments = self.parse_expression_list(TokenKind::RightParen);

        Expression::Call(CallExpression {
            token,
            function: function.map(Box::new),
            arguments,
        })
    }

    /// Parse `expr, expr, ...` up to `end`, starting on the opening token.
    ///
    /// Returns `None` if `end` is missing. Arguments that fail to parse are
    /// left out; their errors are already recorded.
    fn parse_expression_list(&mut self, end: TokenKind) -> Option<Vec<Expression>> {
        let mut list = Vec::new();

        if self.peek_is(end) {
            self.next_token();
            return Some(list);
        }

        self.next_token(); // consume opening token
        list.extend(self.parse_expression(Precedence::Lowest));

        while self.peek_is(TokenKind::Comma) {
            self.next_token(); // onto ','
            self.next_token(); // past ','
            list.extend(self.parse_expression(Precedence::Lowest));
        }

        if !self.expect_peek(end) {
            return None;
        }

        Some(list)
    }
}
