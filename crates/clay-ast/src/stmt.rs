//! Statement AST nodes

use serde::Serialize;
use crate::{Expr, Location, Span};

/// A statement
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statement<'src> {
    pub kind: StatementKind<'src>,
    pub span: Span,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum StatementKind<'src> {
    /// Print statement: `print "hello"`
    Print(Expr<'src>),
}

impl<'src> Statement<'src> {
    /// `span` and `location` point at the `print` keyword; the span is
    /// widened to cover the expression.
    pub fn print(expr: Expr<'src>, span: Span, location: Location) -> Self {
        Self {
            span: span.merge(expr.span),
            kind: StatementKind::Print(expr),
            location,
        }
    }

    pub fn expr(&self) -> &Expr<'src> {
        match &self.kind {
            StatementKind::Print(expr) => expr,
        }
    }
}
