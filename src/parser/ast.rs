//! AST (Abstract Syntax Tree) definitions
//!
//! The tree is a closed set of node kinds: a [`Program`] of [`Statement`]s,
//! each wrapping an [`Expression`]. Every node keeps the token it started
//! from. Sub-expressions the parser could not build are `None` and render
//! as the empty string.
//!
//! [`Display`](fmt::Display) gives the canonical fully parenthesized form:
//!
//! ```text
//! 1 + 2 * 3      =>  (1 + (2 * 3))
//! -a - b         =>  ((-a) - b)
//! foo(1, 2 + 3)  =>  foo(1, (2 + 3))
//! ```

use super::token::Token;
use std::fmt;

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Top-level program structure
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub statements: Vec<Statement>, // In source order
}

impl Program {
    pub fn new() -> Self {
        Program::default()
    }

    /// Literal of the first statement's token, or "" for an empty program.
    pub fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map(Statement::token_literal)
            .unwrap_or("")
    }
}

/// Statements
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Expression(ExpressionStatement),
}

impl Statement {
    pub fn token(&self) -> &Token {
        match self {
            Statement::Expression(stmt) => &stmt.token,
        }
    }

    pub fn token_literal(&self) -> &str {
        &self.token().literal
    }
}

/// An expression used as a statement: `a + b;`
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStatement {
    pub token: Token, // First token of the expression
    pub expression: Option<Expression>,
}

/// Expressions
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(Identifier),
    Number(NumberLiteral),
    Prefix(PrefixExpression),
    Infix(InfixExpression),
    Call(CallExpression),
}

impl Expression {
    /// Token this expression was built from. For operators this is the
    /// operator token; for calls it is the opening parenthesis.
    pub fn token(&self) -> &Token {
        match self {
            Expression::Identifier(e) => &e.token,
            Expression::Number(e) => &e.token,
            Expression::Prefix(e) => &e.token,
            Expression::Infix(e) => &e.token,
            Expression::Call(e) => &e.token,
        }
    }

    pub fn token_literal(&self) -> &str {
        &self.token().literal
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub token: Token,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NumberLiteral {
    pub token: Token,
    pub value: f64,
}

/// `!x`, `-x`
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpression {
    pub token: Token,
    pub operator: String,
    pub right: Option<Box<Expression>>,
}

/// `left <op> right`
#[derive(Debug, Clone, PartialEq)]
pub struct InfixExpression {
    pub token: Token,
    pub left: Option<Box<Expression>>,
    pub operator: String,
    pub right: Option<Box<Expression>>,
}

/// `function(arg, ...)`
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpression {
    pub token: Token,
    pub function: Option<Box<Expression>>,
    pub arguments: Option<Vec<Expression>>, // None if the closing ')' was missing
}

/// Renders a missing sub-expression as nothing.
struct Maybe<'a>(&'a Option<Box<Expression>>);

impl fmt::Display for Maybe<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(expr) => fmt::Display::fmt(expr, f),
            None => Ok(()),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(ident) => f.write_str(&ident.value),
            // The literal text, not the parsed value, so "3.10" stays "3.10"
            Expression::Number(num) => f.write_str(&num.token.literal),
            Expression::Prefix(prefix) => {
                write!(f, "({}{})", prefix.operator, Maybe(&prefix.right))
            }
            Expression::Infix(infix) => write!(
                f,
                "({} {} {})",
                Maybe(&infix.left),
                infix.operator,
                Maybe(&infix.right)
            ),
            Expression::Call(call) => {
                write!(f, "{}(", Maybe(&call.function))?;
                for (i, arg) in call.arguments.iter().flatten().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str(")")
            }
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Expression(stmt) => match &stmt.expression {
                Some(expr) => fmt::Display::fmt(expr, f),
                None => Ok(()),
            },
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            write!(f, "{stmt}")?;
        }
        Ok(())
    }
}
