//! Clay Parser - Recursive descent parser
//!
//! Grammar:
//!
//! ```text
//! program   := statement* EOF
//! statement := PRINT literal (NEWLINE | EOF)
//!            | NEWLINE
//! literal   := STRING | INT | FLOAT
//! ```
//!
//! Parsing is fail-fast: the first lexical or syntax error is returned and
//! whatever was built so far is dropped.

mod diagnostic;
mod error;
mod parser;

pub use diagnostic::*;
pub use error::*;
pub use parser::*;

use clay_ast::Program;

/// Parse a source string into a Program AST
pub fn parse(source: &str) -> Result<Program<'_>, ParseError> {
    let mut parser = Parser::new(source)?;
    parser.parse_program()
}
