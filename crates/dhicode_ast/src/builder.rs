//! Node construction from scanner tokens.
//!
//! A parser hands tokens and already-built children to [`NodeBuilder`], which
//! copies literals into the arena and allocates child expressions there. Each
//! method checks that it was given the kind of token the node is defined by.
//!
//! # Example
//! ```
//! use dhicode_ast::{Node, NodeBuilder};
//! use dhicode_core::AstArena;
//! use dhicode_scanner::Lexer;
//!
//! let arena = AstArena::new();
//! let builder = NodeBuilder::new(&arena);
//! let mut lexer = Lexer::new("ކަނޑައަޅާ އުމުރު = 25");
//!
//! let declare = lexer.next_token();
//! let name = builder.identifier(&lexer.next_token()).unwrap();
//! let _assign = lexer.next_token();
//! let value = builder.number_literal(&lexer.next_token()).unwrap();
//!
//! let stmt = builder.let_statement(&declare, name, value).unwrap();
//! assert_eq!(stmt.string_render(), "ކަނޑައަޅާ އުމުރު = 25;");
//! ```

use crate::node::*;
use dhicode_core::AstArena;
use dhicode_scanner::{Keyword, Token, TokenKind};
use std::num::ParseFloatError;
use thiserror::Error;

/// Errors from building a node out of the wrong token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NodeError {
    #[error("expected {expected}, found {found} '{literal}'")]
    UnexpectedToken {
        expected: &'static str,
        found: TokenKind,
        literal: String,
    },

    #[error("'{literal}' is not a valid number")]
    InvalidNumber {
        literal: String,
        #[source]
        source: ParseFloatError,
    },
}

impl NodeError {
    fn unexpected(expected: &'static str, token: &Token) -> Self {
        NodeError::UnexpectedToken {
            expected,
            found: token.kind,
            literal: token.literal.clone(),
        }
    }
}

/// Builds arena-allocated nodes.
#[derive(Clone, Copy)]
pub struct NodeBuilder<'a> {
    arena: &'a AstArena,
}

impl<'a> NodeBuilder<'a> {
    pub fn new(arena: &'a AstArena) -> Self {
        Self { arena }
    }

    /// Copy a scanner token into the arena.
    pub fn token(&self, token: &Token) -> NodeToken<'a> {
        NodeToken::new(token.kind, self.arena.alloc_str(&token.literal))
    }

    fn expect_kind(
        &self,
        token: &Token,
        kind: TokenKind,
        expected: &'static str,
    ) -> Result<NodeToken<'a>, NodeError> {
        if token.kind == kind {
            Ok(self.token(token))
        } else {
            Err(NodeError::unexpected(expected, token))
        }
    }

    /// Move an expression into the arena so a parent can own it.
    pub fn alloc_expression(&self, expression: Expression<'a>) -> &'a Expression<'a> {
        self.arena.alloc(expression)
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    pub fn identifier(&self, token: &Token) -> Result<Identifier<'a>, NodeError> {
        let token = self.expect_kind(token, TokenKind::Identifier, "an identifier")?;
        Ok(Identifier {
            token,
            value: token.literal,
        })
    }

    /// Build a number literal, parsing the digit run into a real value.
    pub fn number_literal(&self, token: &Token) -> Result<Expression<'a>, NodeError> {
        let node_token = self.expect_kind(token, TokenKind::Number, "a number")?;
        let value = token
            .literal
            .parse::<f64>()
            .map_err(|source| NodeError::InvalidNumber {
                literal: token.literal.clone(),
                source,
            })?;
        Ok(Expression::NumberLiteral(NumberLiteral {
            token: node_token,
            value,
        }))
    }

    pub fn string_literal(&self, token: &Token) -> Result<Expression<'a>, NodeError> {
        let token = self.expect_kind(token, TokenKind::String, "a string")?;
        Ok(Expression::StringLiteral(StringLiteral {
            token,
            value: token.literal,
        }))
    }

    /// Join two expressions with the operator `operator_token` spells.
    pub fn infix(
        &self,
        left: Expression<'a>,
        operator_token: &Token,
        right: Expression<'a>,
    ) -> Result<Expression<'a>, NodeError> {
        if !operator_token.kind.is_infix_operator() {
            return Err(NodeError::unexpected("an infix operator", operator_token));
        }
        let token = self.token(operator_token);
        Ok(Expression::Infix(InfixExpression {
            token,
            left: self.alloc_expression(left),
            operator: token.literal,
            right: self.alloc_expression(right),
        }))
    }

    // ========================================================================
    // Statements
    // ========================================================================

    /// Build a declaration; `keyword_token` must be the declaring keyword.
    pub fn let_statement(
        &self,
        keyword_token: &Token,
        name: Identifier<'a>,
        value: Expression<'a>,
    ) -> Result<Statement<'a>, NodeError> {
        if keyword_token.keyword() != Some(Keyword::Declare) {
            return Err(NodeError::unexpected("the declaring keyword", keyword_token));
        }
        Ok(Statement::Let(LetStatement {
            token: self.token(keyword_token),
            name,
            value: self.alloc_expression(value),
        }))
    }

    /// Wrap an expression; `first_token` is the token the expression starts with.
    pub fn expression_statement(
        &self,
        first_token: &Token,
        expression: Expression<'a>,
    ) -> Statement<'a> {
        Statement::Expression(ExpressionStatement {
            token: self.token(first_token),
            expression: self.alloc_expression(expression),
        })
    }

    pub fn program(&self, statements: Vec<Statement<'a>>) -> Program<'a> {
        Program::new(self.arena.alloc_slice(statements))
    }
}
