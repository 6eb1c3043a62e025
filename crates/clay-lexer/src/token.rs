//! Token definitions for Clay

use logos::{Lexer, Logos};

/// Why logos gave up on a stretch of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexErrorKind {
    #[default]
    UnexpectedCharacter,
    UnterminatedString,
    UnknownIdentifier,
}

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(error = LexErrorKind)]
#[logos(skip r"[ \t\r\x0B\x0C]+")] // Horizontal whitespace only, newline is a token
pub enum TokenKind {
    // === Keywords ===
    #[token("print")]
    Print,
    #[token("then")]
    Then,

    // === Literals ===
    #[regex(r"[0-9]+", priority = 2)]
    Int,

    #[regex(r"[0-9]+\.[0-9]+")]
    Float,

    #[token("\"", lex_string)]
    String,

    // Only keywords are valid identifiers; the scanner rejects the rest
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,

    #[token("\n")]
    Newline,

    // === Special ===
    Eof,
}

/// Consume up to and including the closing quote. No escapes; may span lines.
fn lex_string(lex: &mut Lexer<TokenKind>) -> Result<(), LexErrorKind> {
    match lex.remainder().find('"') {
        Some(end) => {
            lex.bump(end + 1);
            Ok(())
        }
        None => {
            lex.bump(lex.remainder().len());
            Err(LexErrorKind::UnterminatedString)
        }
    }
}

impl TokenKind {
    pub fn is_keyword(&self) -> bool {
        matches!(self, TokenKind::Print | TokenKind::Then)
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, TokenKind::Int | TokenKind::Float | TokenKind::String)
    }

    pub fn describe(&self) -> &'static str {
        match self {
            TokenKind::Print => "'print'",
            TokenKind::Then => "'then'",
            TokenKind::Int => "integer",
            TokenKind::Float => "float",
            TokenKind::String => "string",
            TokenKind::Ident => "identifier",
            TokenKind::Newline => "newline",
            TokenKind::Eof => "end of file",
        }
    }
}
