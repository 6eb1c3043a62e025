//! Clay Lexer - Tokenization using logos
//!
//! Newlines are significant (they terminate statements) so only horizontal
//! whitespace is skipped. The scanner never prints anything: every failure
//! comes back as a `LexError` for the caller to report.

mod error;
mod token;

pub use error::*;
pub use token::*;

use logos::Logos;
use clay_ast::{Location, Span};

/// A token with its source text and position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    /// Full source text of the token, quotes included for strings
    pub lexeme: &'src str,
    /// String contents between the quotes, or the digits of a number
    pub literal: Option<&'src str>,
    pub span: Span,
    pub location: Location,
}

/// Stateful cursor over a source buffer, producing one token per call
pub struct Scanner<'src> {
    source: &'src str,
    lexer: logos::Lexer<'src, TokenKind>,
    line: u32,
    /// Byte offset where the current line begins
    line_start: usize,
}

impl<'src> Scanner<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            lexer: TokenKind::lexer(source),
            line: 1,
            line_start: 0,
        }
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Scan the next token. Keeps returning `Eof` once input is exhausted.
    pub fn next_token(&mut self) -> Result<Token<'src>, LexError> {
        let Some(result) = self.lexer.next() else {
            let end = self.source.len();
            return Ok(Token {
                kind: TokenKind::Eof,
                lexeme: "",
                literal: None,
                span: Span::new(end, end),
                location: self.location_of(end),
            });
        };

        let span = Span::new(self.lexer.span().start, self.lexer.span().end);
        let location = self.location_of(span.start);

        match result {
            Ok(kind) => self.classify(kind, span, location),
            Err(LexErrorKind::UnexpectedCharacter) => {
                // Report one whole character even if logos stopped mid-codepoint
                let lexeme = self.source[span.start..]
                    .chars()
                    .next()
                    .map(String::from)
                    .unwrap_or_default();
                Err(LexError::new(LexErrorKind::UnexpectedCharacter, lexeme, span, location))
            }
            Err(kind) => Err(LexError::new(kind, &self.source[span.start..span.end], span, location)),
        }
    }

    fn classify(&mut self, kind: TokenKind, span: Span, location: Location) -> Result<Token<'src>, LexError> {
        let lexeme = &self.source[span.start..span.end];

        let literal = match kind {
            TokenKind::Ident => {
                return Err(LexError::new(LexErrorKind::UnknownIdentifier, lexeme, span, location));
            }
            TokenKind::String => {
                self.track_newlines(lexeme, span.start);
                Some(&lexeme[1..lexeme.len() - 1])
            }
            TokenKind::Int | TokenKind::Float => Some(lexeme),
            TokenKind::Newline => {
                self.line += 1;
                self.line_start = span.end;
                None
            }
            TokenKind::Print | TokenKind::Then | TokenKind::Eof => None,
        };

        Ok(Token { kind, lexeme, literal, span, location })
    }

    /// Advance line accounting past newlines embedded in a multi-line token
    fn track_newlines(&mut self, text: &str, offset: usize) {
        for (i, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                self.line += 1;
                self.line_start = offset + i + 1;
            }
        }
    }

    fn location_of(&self, offset: usize) -> Location {
        let column = self.source[self.line_start..offset].chars().count() as u32 + 1;
        Location::new(self.line, column)
    }
}

/// Tokenize a whole source string, ending with an `Eof` token
pub fn tokenize(source: &str) -> Result<Vec<Token<'_>>, LexError> {
    let mut scanner = Scanner::new(source);
    let mut tokens = Vec::new();

    loop {
        let token = scanner.next_token()?;
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}
