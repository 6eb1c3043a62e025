//! Expression AST nodes

use serde::Serialize;
use crate::{Location, Span};

/// An expression
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Expr<'src> {
    pub kind: ExprKind<'src>,
    pub span: Span,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ExprKind<'src> {
    /// Literal value: `"hello"`, `42`, `3.14`
    Literal(Literal<'src>),

    /// Addition: `a + b`
    ///
    /// Not produced by the parser yet; reserved for an arithmetic grammar.
    Add {
        left: Box<Expr<'src>>,
        right: Box<Expr<'src>>,
    },
}

/// A literal borrowing its text from the source buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Literal<'src> {
    pub kind: LiteralKind,
    /// String contents without the quotes, or the digits of a number
    pub value: &'src str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LiteralKind {
    String,
    Int,
    Float,
}

impl LiteralKind {
    pub fn describe(&self) -> &'static str {
        match self {
            LiteralKind::String => "string",
            LiteralKind::Int => "integer",
            LiteralKind::Float => "float",
        }
    }
}

impl<'src> Expr<'src> {
    pub fn literal(kind: LiteralKind, value: &'src str, span: Span, location: Location) -> Self {
        Self {
            kind: ExprKind::Literal(Literal { kind, value }),
            span,
            location,
        }
    }

    /// Build `left + right`, spanning both operands
    pub fn add(left: Expr<'src>, right: Expr<'src>) -> Self {
        let span = left.span.merge(right.span);
        let location = left.location;
        Self {
            kind: ExprKind::Add {
                left: Box::new(left),
                right: Box::new(right),
            },
            span,
            location,
        }
    }

    pub fn as_literal(&self) -> Option<&Literal<'src>> {
        match &self.kind {
            ExprKind::Literal(lit) => Some(lit),
            ExprKind::Add { .. } => None,
        }
    }

    /// Number of nodes in this subtree, including self
    pub fn node_count(&self) -> usize {
        match &self.kind {
            ExprKind::Literal(_) => 1,
            ExprKind::Add { left, right } => 1 + left.node_count() + right.node_count(),
        }
    }
}
