//! AST visitor trait for traversing the syntax tree.

use crate::node::*;

/// A visitor that traverses the AST. Implement this trait to perform
/// operations on each node kind. Default implementations walk into children,
/// left to right.
pub trait AstVisitor<'a> {
    fn visit_program(&mut self, node: &Program<'a>) {
        for stmt in node.statements.iter() {
            self.visit_statement(stmt);
        }
    }

    fn visit_statement(&mut self, stmt: &Statement<'a>) {
        match stmt {
            Statement::Let(n) => self.visit_let_statement(n),
            Statement::Expression(n) => self.visit_expression_statement(n),
        }
    }

    // -- Statements --

    fn visit_let_statement(&mut self, node: &LetStatement<'a>) {
        self.visit_identifier(&node.name);
        self.visit_expression(node.value);
    }

    fn visit_expression_statement(&mut self, node: &ExpressionStatement<'a>) {
        self.visit_expression(node.expression);
    }

    // -- Expressions --

    fn visit_expression(&mut self, expr: &Expression<'a>) {
        match expr {
            Expression::Identifier(n) => self.visit_identifier(n),
            Expression::NumberLiteral(n) => self.visit_number_literal(n),
            Expression::StringLiteral(n) => self.visit_string_literal(n),
            Expression::Infix(n) => self.visit_infix_expression(n),
        }
    }

    fn visit_identifier(&mut self, _node: &Identifier<'a>) {}

    fn visit_number_literal(&mut self, _node: &NumberLiteral<'a>) {}

    fn visit_string_literal(&mut self, _node: &StringLiteral<'a>) {}

    fn visit_infix_expression(&mut self, node: &InfixExpression<'a>) {
        self.visit_expression(node.left);
        self.visit_expression(node.right);
    }
}
