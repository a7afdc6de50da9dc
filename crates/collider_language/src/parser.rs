//! Parser for the collider rule language.
//!
//! A recursive-descent parser over the lexer's token sequence. Each source
//! line is parsed independently: a grammar violation yields a [`ParseError`]
//! for that line, which is logged, and parsing resumes on the next line.
//!
//! ```text
//! line                 := (EOL | POUND) | EOF | statement (EOL | EOF | POUND)
//! statement            := groupDeclaration | collisionDeclaration
//! groupDeclaration     := KEY_GROUP QUOTE STRING_LIT QUOTE OPEN_BRACE operandList CLOSE_BRACE
//! operandList          := ε | operand (COMMA operand)*
//! operand              := [DOLLAR_SIGN] STRING_LIT
//! collisionDeclaration := operand operator operand
//! operator             := GREATER_THAN | LESS_THAN | EQUAL | TILDE | X
//! ```

use collider_foundation::{Error, ErrorKind};
use thiserror::Error;
use tracing::warn;

use crate::ast::{CollisionDeclaration, GroupDeclaration, Operand, Operator, Statement};
use crate::lexer::Lexer;
use crate::span::Span;
use crate::token::{Token, TokenKind};

/// A grammar violation on a single line.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unexpected {} found on line {}: {message}", found.name(), span.line)]
pub struct ParseError {
    /// What the grammar expected.
    pub message: String,
    /// Kind of the offending token.
    pub found: TokenKind,
    /// Location of the offending token.
    pub span: Span,
}

impl ParseError {
    /// Returns the 1-based source line of the offending token.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.span.line
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::new(ErrorKind::Syntax {
            message: err.message,
            found: err.found.name().to_string(),
            line: err.span.line,
            column: err.span.column,
        })
    }
}

/// Output of a full parse.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Parsed {
    /// Well-formed statements in source order.
    pub statements: Vec<Statement>,
    /// Syntax errors, one per rejected line, in source order.
    pub errors: Vec<ParseError>,
}

/// Parser for collider source.
pub struct Parser<'t> {
    /// Tokens being parsed.
    tokens: &'t [Token],
    /// Index of the current token.
    cursor: usize,
    /// Stands in for `Eof` when the token sequence was truncated.
    end: Token,
}

impl<'t> Parser<'t> {
    /// Creates a new parser over a token sequence.
    ///
    /// The sequence normally ends in `Eof`; a truncated sequence is parsed
    /// up to its last token.
    #[must_use]
    pub fn new(tokens: &'t [Token]) -> Self {
        let line = tokens.last().map_or(1, |token| token.span.line + 1);
        Self {
            tokens,
            cursor: 0,
            end: Token::eof(Span::new(line, 1)),
        }
    }

    /// Parses every line.
    ///
    /// Each syntax error is logged and recorded, and the rest of its line is
    /// discarded. The returned statements contain one entry per accepted line.
    pub fn parse_statements(&mut self) -> Parsed {
        let mut parsed = Parsed::default();
        while !self.check(TokenKind::Eof) {
            match self.parse_line() {
                Ok(statement) => parsed.statements.push(statement),
                Err(err) => {
                    warn!(line = err.line(), column = err.span.column, "{err}");
                    parsed.errors.push(err);
                    self.synchronize();
                }
            }
        }
        parsed
    }

    /// Parses a single line.
    ///
    /// # Errors
    /// Returns a [`ParseError`] if the line violates the grammar. The cursor
    /// is left on the offending token.
    pub fn parse_line(&mut self) -> Result<Statement, ParseError> {
        if self.match_kind(TokenKind::Eol) {
            return Ok(Statement::Empty);
        }
        if self.match_kind(TokenKind::Pound) {
            self.match_kind(TokenKind::Eol);
            return Ok(Statement::Empty);
        }
        if self.check(TokenKind::Eof) {
            // Leave the cursor so the caller's loop terminates
            return Ok(Statement::Empty);
        }

        let statement = self.parse_statement()?;
        match self.peek().kind {
            TokenKind::Eol => self.advance(),
            TokenKind::Pound => {
                self.advance();
                self.match_kind(TokenKind::Eol);
            }
            TokenKind::Eof => {}
            _ => {
                return Err(self.error(
                    "expected a new line, end of file, or comment marker at the end of a complete statement",
                ));
            }
        }
        Ok(statement)
    }

    /// Parses a statement: `groupDeclaration | collisionDeclaration`.
    fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        match self.peek().kind {
            TokenKind::StringLit | TokenKind::DollarSign => {
                self.parse_collision().map(Statement::Collision)
            }
            TokenKind::KeyGroup => self.parse_group().map(Statement::Group),
            _ => Err(self.error("expected a collision declaration or group declaration")),
        }
    }

    /// Parses `group "Name" {operands}`.
    fn parse_group(&mut self) -> Result<GroupDeclaration, ParseError> {
        let span = self.peek().span;
        self.expect(
            TokenKind::KeyGroup,
            "group declarations must start with the keyword 'group'",
        )?;
        self.expect(
            TokenKind::Quote,
            "group names must be specified in quotations, missing opening '\"'",
        )?;
        let name = self.parse_string_literal()?.text.clone();
        self.expect(
            TokenKind::Quote,
            "group names must be specified in quotations, missing closing '\"'",
        )?;
        self.expect(
            TokenKind::OpenBrace,
            "group contents must be declared in braces, missing '{'",
        )?;
        let operands = self.parse_operand_list()?;
        self.expect(
            TokenKind::CloseBrace,
            "group contents must be declared in braces, missing '}'",
        )?;
        Ok(GroupDeclaration {
            name,
            operands,
            span,
        })
    }

    /// Parses `ε | operand (COMMA operand)*`.
    fn parse_operand_list(&mut self) -> Result<Vec<Operand>, ParseError> {
        let mut operands = Vec::new();
        if self.check(TokenKind::CloseBrace) {
            return Ok(operands);
        }
        loop {
            operands.push(self.parse_operand()?);
            if !self.match_kind(TokenKind::Comma) {
                return Ok(operands);
            }
        }
    }

    /// Parses `[DOLLAR_SIGN] STRING_LIT`.
    fn parse_operand(&mut self) -> Result<Operand, ParseError> {
        let is_group_reference = self.match_kind(TokenKind::DollarSign);
        let token = self.parse_string_literal()?;
        Ok(Operand {
            is_group_reference,
            literal: token.text.clone(),
            span: token.span,
        })
    }

    /// Parses `operand operator operand`.
    fn parse_collision(&mut self) -> Result<CollisionDeclaration, ParseError> {
        let left = self.parse_operand()?;
        let operator = self.parse_operator()?;
        let right = self.parse_operand()?;
        Ok(CollisionDeclaration {
            left,
            operator,
            right,
        })
    }

    /// Parses one of `> < = ~ x`.
    fn parse_operator(&mut self) -> Result<Operator, ParseError> {
        match Operator::from_token_kind(self.peek().kind) {
            Some(operator) => {
                self.advance();
                Ok(operator)
            }
            None => Err(self.error(
                "an operator is required in collision declarations, use one of: >, <, =, ~, x",
            )),
        }
    }

    /// Consumes a string literal and returns its token.
    fn parse_string_literal(&mut self) -> Result<&'t Token, ParseError> {
        let tokens = self.tokens;
        match tokens.get(self.cursor) {
            Some(token) if token.kind == TokenKind::StringLit => {
                self.advance();
                Ok(token)
            }
            _ => Err(self.error("expected a string literal")),
        }
    }

    /// Discards the rest of the current line, including its end of line.
    fn synchronize(&mut self) {
        while !self.check(TokenKind::Eol) && !self.check(TokenKind::Eof) {
            self.advance();
        }
        self.match_kind(TokenKind::Eol);
    }

    /// Returns the current token.
    fn peek(&self) -> &Token {
        self.tokens.get(self.cursor).unwrap_or(&self.end)
    }

    /// Advances past the current token, stopping at the end of input.
    fn advance(&mut self) {
        if self.cursor < self.tokens.len() && self.peek().kind != TokenKind::Eof {
            self.cursor += 1;
        }
    }

    /// Returns true if the current token has the given kind.
    fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    /// Consumes the current token if it has the given kind.
    fn match_kind(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes a token of the given kind or fails with `message`.
    fn expect(&mut self, kind: TokenKind, message: &str) -> Result<(), ParseError> {
        if self.match_kind(kind) {
            Ok(())
        } else {
            Err(self.error(message))
        }
    }

    /// Creates a parse error at the current token.
    fn error(&self, message: &str) -> ParseError {
        let token = self.peek();
        ParseError {
            message: message.to_string(),
            found: token.kind,
            span: token.span,
        }
    }
}

/// Tokenizes and parses in-memory source.
#[must_use]
pub fn parse(source: &str) -> Parsed {
    let tokens = Lexer::tokenize_all(source);
    Parser::new(&tokens).parse_statements()
}
