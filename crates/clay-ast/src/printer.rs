//! Canonical text printer for Clay AST
//!
//! Serializes AST back to canonical `.clay` text: one statement per line,
//! single spaces between tokens, blank lines dropped.

use crate::{Expr, ExprKind, Literal, LiteralKind, Program, Statement, StatementKind};

/// Trait for converting AST nodes to canonical Clay text.
pub trait ToClay {
    fn to_clay(&self) -> String;
}

impl ToClay for Program<'_> {
    fn to_clay(&self) -> String {
        let mut out = String::new();
        for stmt in &self.statements {
            out.push_str(&stmt.to_clay());
            out.push('\n');
        }
        out
    }
}

impl ToClay for Statement<'_> {
    fn to_clay(&self) -> String {
        match &self.kind {
            StatementKind::Print(expr) => format!("print {}", expr.to_clay()),
        }
    }
}

impl ToClay for Expr<'_> {
    fn to_clay(&self) -> String {
        match &self.kind {
            ExprKind::Literal(lit) => lit.to_clay(),
            ExprKind::Add { left, right } => {
                format!("{} + {}", left.to_clay(), right.to_clay())
            }
        }
    }
}

impl ToClay for Literal<'_> {
    fn to_clay(&self) -> String {
        // Clay strings have no escapes, the contents go back between quotes as-is
        match self.kind {
            LiteralKind::String => format!("\"{}\"", self.value),
            LiteralKind::Int | LiteralKind::Float => self.value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Location, Span};

    fn lit(kind: LiteralKind, value: &str) -> Expr<'_> {
        Expr::literal(kind, value, Span::dummy(), Location::start())
    }

    #[test]
    fn test_print_literals() {
        let mut program = Program::new();
        program.push(Statement::print(lit(LiteralKind::String, "hi there"), Span::dummy(), Location::start()));
        program.push(Statement::print(lit(LiteralKind::Int, "42"), Span::dummy(), Location::start()));
        program.push(Statement::print(lit(LiteralKind::Float, "2.5"), Span::dummy(), Location::start()));

        assert_eq!(program.to_clay(), "print \"hi there\"\nprint 42\nprint 2.5\n");
    }

    #[test]
    fn test_empty_program_prints_nothing() {
        assert_eq!(Program::new().to_clay(), "");
    }

    #[test]
    fn test_add_expression() {
        let expr = Expr::add(lit(LiteralKind::Int, "1"), lit(LiteralKind::Int, "2"));
        assert_eq!(expr.to_clay(), "1 + 2");
    }
}
