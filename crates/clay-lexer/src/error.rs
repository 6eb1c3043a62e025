//! Lexer error types

use clay_ast::{Location, Span};
use thiserror::Error;

use crate::LexErrorKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("Unexpected character")]
    UnexpectedCharacter {
        lexeme: String,
        span: Span,
        location: Location,
    },

    #[error("Unterminated string")]
    UnterminatedString {
        lexeme: String,
        span: Span,
        location: Location,
    },

    #[error("Unknown identifier")]
    UnknownIdentifier {
        lexeme: String,
        span: Span,
        location: Location,
    },
}

impl LexError {
    pub fn new(kind: LexErrorKind, lexeme: impl Into<String>, span: Span, location: Location) -> Self {
        let lexeme = lexeme.into();
        match kind {
            LexErrorKind::UnexpectedCharacter => LexError::UnexpectedCharacter { lexeme, span, location },
            LexErrorKind::UnterminatedString => LexError::UnterminatedString { lexeme, span, location },
            LexErrorKind::UnknownIdentifier => LexError::UnknownIdentifier { lexeme, span, location },
        }
    }

    pub fn kind(&self) -> LexErrorKind {
        match self {
            LexError::UnexpectedCharacter { .. } => LexErrorKind::UnexpectedCharacter,
            LexError::UnterminatedString { .. } => LexErrorKind::UnterminatedString,
            LexError::UnknownIdentifier { .. } => LexErrorKind::UnknownIdentifier,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            LexError::UnexpectedCharacter { span, .. } => *span,
            LexError::UnterminatedString { span, .. } => *span,
            LexError::UnknownIdentifier { span, .. } => *span,
        }
    }

    /// Position of the first character of the offending token
    pub fn location(&self) -> Location {
        match self {
            LexError::UnexpectedCharacter { location, .. } => *location,
            LexError::UnterminatedString { location, .. } => *location,
            LexError::UnknownIdentifier { location, .. } => *location,
        }
    }

    pub fn lexeme(&self) -> &str {
        match self {
            LexError::UnexpectedCharacter { lexeme, .. } => lexeme,
            LexError::UnterminatedString { lexeme, .. } => lexeme,
            LexError::UnknownIdentifier { lexeme, .. } => lexeme,
        }
    }
}
