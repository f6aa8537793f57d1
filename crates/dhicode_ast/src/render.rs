//! Canonical text rendering of AST nodes.
//!
//! The rendering is for display and round-trip debugging, not a pretty
//! printer: statements are concatenated without separators, and every infix
//! expression is fully parenthesized regardless of how the source was written.

use crate::node::*;
use std::fmt;

impl fmt::Display for Program<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}

impl fmt::Display for Statement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Let(n) => fmt::Display::fmt(n, f),
            Statement::Expression(n) => fmt::Display::fmt(n, f),
        }
    }
}

impl fmt::Display for LetStatement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} = {};", self.token.literal, self.name, self.value)
    }
}

impl fmt::Display for ExpressionStatement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.expression, f)
    }
}

impl fmt::Display for Expression<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(n) => fmt::Display::fmt(n, f),
            Expression::NumberLiteral(n) => fmt::Display::fmt(n, f),
            Expression::StringLiteral(n) => fmt::Display::fmt(n, f),
            Expression::Infix(n) => fmt::Display::fmt(n, f),
        }
    }
}

impl fmt::Display for Identifier<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value)
    }
}

impl fmt::Display for NumberLiteral<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value.is_finite() && self.value.fract() == 0.0 {
            // `+ 0.0` turns -0.0 into 0.0
            write!(f, "{:.0}", self.value + 0.0)
        } else {
            write!(f, "{}", self.value)
        }
    }
}

impl fmt::Display for StringLiteral<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.value)
    }
}

impl fmt::Display for InfixExpression<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {})", self.left, self.operator, self.right)
    }
}
