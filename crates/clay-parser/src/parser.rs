//! Recursive descent parser implementation

use clay_ast::*;
use clay_lexer::{Scanner, Token, TokenKind};
use tracing::{debug, trace};

use crate::ParseError;

/// Single-token lookahead parser pulling tokens from a `Scanner` on demand
pub struct Parser<'src> {
    scanner: Scanner<'src>,
    current: Token<'src>,
}

impl<'src> Parser<'src> {
    /// Prime the lookahead with the first token
    pub fn new(source: &'src str) -> Result<Self, ParseError> {
        let mut scanner = Scanner::new(source);
        let current = scanner.next_token()?;
        Ok(Self { scanner, current })
    }

    // === Utilities ===

    fn peek(&self) -> TokenKind {
        self.current.kind
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.peek() == kind
    }

    /// Move to the next token, returning the one just passed
    fn advance(&mut self) -> Result<Token<'src>, ParseError> {
        let next = self.scanner.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    // === Program ===

    pub fn parse_program(&mut self) -> Result<Program<'src>, ParseError> {
        let mut program = Program::new();

        while !self.at(TokenKind::Eof) {
            if let Some(statement) = self.parse_statement()? {
                program.push(statement);
            }
        }

        debug!(statements = program.len(), "parsed program");
        Ok(program)
    }

    // === Statements ===

    /// `None` for a blank line
    fn parse_statement(&mut self) -> Result<Option<Statement<'src>>, ParseError> {
        match self.peek() {
            TokenKind::Newline => {
                self.advance()?;
                Ok(None)
            }
            TokenKind::Print => self.parse_print().map(Some),
            _ => Err(ParseError::expected_statement(&self.current)),
        }
    }

    fn parse_print(&mut self) -> Result<Statement<'src>, ParseError> {
        let keyword = self.advance()?;
        let expr = self.parse_literal()?;

        match self.peek() {
            TokenKind::Newline => {
                self.advance()?;
            }
            TokenKind::Eof => {}
            _ => return Err(ParseError::expected_terminator(&self.current)),
        }

        trace!(line = keyword.location.line, "print statement");
        Ok(Statement::print(expr, keyword.span, keyword.location))
    }

    // === Expressions ===

    fn parse_literal(&mut self) -> Result<Expr<'src>, ParseError> {
        let kind = match self.peek() {
            TokenKind::String => LiteralKind::String,
            TokenKind::Int => LiteralKind::Int,
            TokenKind::Float => LiteralKind::Float,
            _ => return Err(ParseError::expected_literal(&self.current)),
        };

        let token = self.advance()?;
        let value = token.literal.unwrap_or(token.lexeme);
        Ok(Expr::literal(kind, value, token.span, token.location))
    }
}
