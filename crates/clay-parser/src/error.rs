//! Parser error types

use clay_ast::{Location, Span};
use clay_lexer::{LexError, Token, TokenKind};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Scanner failure surfacing through the lookahead
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error("Expected 'print' statement")]
    ExpectedStatement {
        found: TokenKind,
        lexeme: String,
        span: Span,
        location: Location,
    },

    #[error("Expected a literal after 'print'")]
    ExpectedLiteral {
        found: TokenKind,
        lexeme: String,
        span: Span,
        location: Location,
    },

    #[error("Expected newline after print statement")]
    ExpectedTerminator {
        found: TokenKind,
        lexeme: String,
        span: Span,
        location: Location,
    },
}

impl ParseError {
    pub fn expected_statement(token: &Token<'_>) -> Self {
        ParseError::ExpectedStatement {
            found: token.kind,
            lexeme: token.lexeme.to_string(),
            span: token.span,
            location: token.location,
        }
    }

    pub fn expected_literal(token: &Token<'_>) -> Self {
        ParseError::ExpectedLiteral {
            found: token.kind,
            lexeme: token.lexeme.to_string(),
            span: token.span,
            location: token.location,
        }
    }

    pub fn expected_terminator(token: &Token<'_>) -> Self {
        ParseError::ExpectedTerminator {
            found: token.kind,
            lexeme: token.lexeme.to_string(),
            span: token.span,
            location: token.location,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            ParseError::Lex(err) => err.span(),
            ParseError::ExpectedStatement { span, .. } => *span,
            ParseError::ExpectedLiteral { span, .. } => *span,
            ParseError::ExpectedTerminator { span, .. } => *span,
        }
    }

    pub fn location(&self) -> Location {
        match self {
            ParseError::Lex(err) => err.location(),
            ParseError::ExpectedStatement { location, .. } => *location,
            ParseError::ExpectedLiteral { location, .. } => *location,
            ParseError::ExpectedTerminator { location, .. } => *location,
        }
    }

    /// Source text of the token the error points at
    pub fn lexeme(&self) -> &str {
        match self {
            ParseError::Lex(err) => err.lexeme(),
            ParseError::ExpectedStatement { lexeme, .. } => lexeme,
            ParseError::ExpectedLiteral { lexeme, .. } => lexeme,
            ParseError::ExpectedTerminator { lexeme, .. } => lexeme,
        }
    }

    pub fn is_lexical(&self) -> bool {
        matches!(self, ParseError::Lex(_))
    }
}
