//! Single-line diagnostics
//!
//! Renders `[line:column] Error: <message> at '<lexeme>'`. Line breaks and
//! tabs in the lexeme are escaped so a newline token or a multi-line string
//! stays on one line; everything else is shown as written.

use std::fmt;

use clay_ast::{Location, Span};

use crate::ParseError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub location: Location,
    pub message: String,
    pub lexeme: String,
    pub span: Span,
}

impl Diagnostic {
    pub fn new(
        location: Location,
        message: impl Into<String>,
        lexeme: impl Into<String>,
        span: Span,
    ) -> Self {
        Self {
            location,
            message: message.into(),
            lexeme: lexeme.into(),
            span,
        }
    }
}

impl From<&ParseError> for Diagnostic {
    fn from(err: &ParseError) -> Self {
        Diagnostic::new(err.location(), err.to_string(), err.lexeme(), err.span())
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}:{}] Error: {} at '{}'",
            self.location.line,
            self.location.column,
            self.message,
            escape_line_breaks(&self.lexeme)
        )
    }
}

fn escape_line_breaks(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}
