//! Statement parsing implementation
//!
//! The only statement form is an expression statement with an optional
//! trailing semicolon:
//!
//! ```text
//! statement ::= expr [';']
//! ```

use crate::parser::ast::*;
use crate::parser::parser::Parser;
use crate::parser::precedence::Precedence;
use crate::parser::token::TokenKind;

impl Parser {
    /// Parse a statement starting at the current token.
    ///
    /// The current token is left on the statement's last token (or its `;`).
    pub(crate) fn parse_statement(&mut self) -> Statement {
        Statement::Expression(self.parse_expression_statement())
    }

    /// A statement is built even when its expression is not; the
    /// expression is then `None` and its diagnostics are recorded.
    fn parse_expression_statement(&mut self) -> ExpressionStatement {
        let token = self.current.clone();
        let expression = self.parse_expression(Precedence::Lowest);

        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }

        ExpressionStatement { token, expression }
    }
}
