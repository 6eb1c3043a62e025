//! Clay AST - Core types for the abstract syntax tree
//!
//! Literal text is borrowed from the source buffer, so a `Program<'src>`
//! cannot outlive the string it was parsed from. Ownership is strictly
//! hierarchical (program, statement, expression) and teardown is plain `Drop`.

mod span;
mod expr;
mod stmt;
mod printer;

pub use span::*;
pub use expr::*;
pub use stmt::*;
pub use printer::*;

use serde::Serialize;

/// A complete Clay program
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Program<'src> {
    /// Statements in source order, which is also emission order
    pub statements: Vec<Statement<'src>>,
    pub span: Span,
}

impl<'src> Program<'src> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a statement, extending the program span to cover it
    pub fn push(&mut self, statement: Statement<'src>) {
        self.span = if self.statements.is_empty() {
            statement.span
        } else {
            self.span.merge(statement.span)
        };
        self.statements.push(statement);
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Statement<'src>> {
        self.statements.iter()
    }
}

impl<'a, 'src> IntoIterator for &'a Program<'src> {
    type Item = &'a Statement<'src>;
    type IntoIter = std::slice::Iter<'a, Statement<'src>>;

    fn into_iter(self) -> Self::IntoIter {
        self.statements.iter()
    }
}
