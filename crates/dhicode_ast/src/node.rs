//! AST node definitions.
//!
//! Every node lives in an [`AstArena`](dhicode_core::AstArena) and refers to
//! its children through `&'a` borrows. A child is referenced by exactly one
//! parent; trees are never shared or cyclic and never change once built.

use dhicode_scanner::TokenKind;
use std::fmt;

/// A list of nodes, allocated in the arena.
pub type NodeList<'a, T> = &'a [T];

/// Capabilities shared by every node.
pub trait Node: fmt::Display {
    /// The literal text of the token that defines this node.
    fn token_literal(&self) -> &str;

    /// The canonical rendering of this node.
    fn string_render(&self) -> String {
        self.to_string()
    }
}

// ============================================================================
// Token
// ============================================================================

/// The token a node was built from, with its literal copied into the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeToken<'a> {
    pub kind: TokenKind,
    pub literal: &'a str,
}

impl<'a> NodeToken<'a> {
    pub fn new(kind: TokenKind, literal: &'a str) -> Self {
        Self { kind, literal }
    }
}

// ============================================================================
// Program
// ============================================================================

/// The root of a tree: statements in source order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Program<'a> {
    pub statements: NodeList<'a, Statement<'a>>,
}

impl<'a> Program<'a> {
    pub fn new(statements: NodeList<'a, Statement<'a>>) -> Self {
        Self { statements }
    }

    pub fn empty() -> Self {
        Self { statements: &[] }
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl Node for Program<'_> {
    fn token_literal(&self) -> &str {
        self.statements.first().map_or("", |stmt| stmt.token_literal())
    }
}

// ============================================================================
// Statements
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Statement<'a> {
    Let(LetStatement<'a>),
    Expression(ExpressionStatement<'a>),
}

impl Node for Statement<'_> {
    fn token_literal(&self) -> &str {
        match self {
            Statement::Let(n) => n.token_literal(),
            Statement::Expression(n) => n.token_literal(),
        }
    }
}

/// `<declare> <name> = <value>`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LetStatement<'a> {
    /// The declaring keyword.
    pub token: NodeToken<'a>,
    pub name: Identifier<'a>,
    pub value: &'a Expression<'a>,
}

impl Node for LetStatement<'_> {
    fn token_literal(&self) -> &str {
        self.token.literal
    }
}

/// A statement made of a single expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpressionStatement<'a> {
    /// The first token of the expression.
    pub token: NodeToken<'a>,
    pub expression: &'a Expression<'a>,
}

impl Node for ExpressionStatement<'_> {
    fn token_literal(&self) -> &str {
        self.token.literal
    }
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Expression<'a> {
    Identifier(Identifier<'a>),
    NumberLiteral(NumberLiteral<'a>),
    StringLiteral(StringLiteral<'a>),
    Infix(InfixExpression<'a>),
}

impl Node for Expression<'_> {
    fn token_literal(&self) -> &str {
        match self {
            Expression::Identifier(n) => n.token_literal(),
            Expression::NumberLiteral(n) => n.token_literal(),
            Expression::StringLiteral(n) => n.token_literal(),
            Expression::Infix(n) => n.token_literal(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Identifier<'a> {
    pub token: NodeToken<'a>,
    pub value: &'a str,
}

impl Node for Identifier<'_> {
    fn token_literal(&self) -> &str {
        self.token.literal
    }
}

/// A numeric literal. The scanner only produces digit runs, but the value is
/// kept as a real number so arithmetic results fit the same node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberLiteral<'a> {
    pub token: NodeToken<'a>,
    pub value: f64,
}

impl Node for NumberLiteral<'_> {
    fn token_literal(&self) -> &str {
        self.token.literal
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StringLiteral<'a> {
    pub token: NodeToken<'a>,
    /// The text between the quotes.
    pub value: &'a str,
}

impl Node for StringLiteral<'_> {
    fn token_literal(&self) -> &str {
        self.token.literal
    }
}

/// `<left> <operator> <right>`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InfixExpression<'a> {
    /// The operator token.
    pub token: NodeToken<'a>,
    pub left: &'a Expression<'a>,
    pub operator: &'a str,
    pub right: &'a Expression<'a>,
}

impl Node for InfixExpression<'_> {
    fn token_literal(&self) -> &str {
        self.token.literal
    }
}
