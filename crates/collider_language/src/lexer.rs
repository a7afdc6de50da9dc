//! Lexer for the collider rule language.
//!
//! The lexer converts line-oriented source text into a stream of tokens.
//! Every physical line ends in exactly one [`TokenKind::Eol`], and the
//! stream ends in exactly one [`TokenKind::Eof`]. A `#` is followed by a
//! synthetic `Eol` and the remainder of its line is never lexed.

use std::io::{self, BufRead};

use thiserror::Error;
use tracing::warn;

use crate::span::Span;
use crate::token::{Token, TokenKind};

/// Reading the source failed part way through.
///
/// `tokens` holds everything lexed before the failure. It always ends on a
/// line boundary and never contains an `Eof`.
#[derive(Debug, Error)]
#[error("source read failed after {} tokens: {source}", tokens.len())]
pub struct Truncated {
    /// Tokens produced before the failure.
    pub tokens: Vec<Token>,
    /// The underlying I/O failure.
    #[source]
    pub source: io::Error,
}

/// Physical lines of an in-memory source.
pub struct SourceLines<'src>(std::str::Lines<'src>);

impl Iterator for SourceLines<'_> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|line| Ok(line.to_owned()))
    }
}

/// Lexer for collider source.
///
/// Pulls physical lines from `L` one at a time and produces tokens.
pub struct Lexer<L> {
    /// Remaining physical lines.
    lines: L,
    /// The line currently being tokenized.
    line: Option<String>,
    /// Byte offset into `line`.
    cursor: usize,
    /// Current column number (1-based).
    column: u32,
    /// Current line number (1-based, 0 before the first line is read).
    line_number: u32,
    /// A `#` was just emitted and its synthetic end of line is owed.
    comment: bool,
    /// The line source has been drained.
    exhausted: bool,
}

impl<'src> Lexer<SourceLines<'src>> {
    /// Creates a new lexer for in-memory source.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self::from_lines(SourceLines(source.lines()))
    }
}

/// Physical lines of a byte stream.
///
/// Bytes that are not valid UTF-8 decode to U+FFFD instead of failing the
/// read. Only a real I/O error ends the stream early.
pub struct ReaderLines<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> Iterator for ReaderLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                let mut line = self.buf.as_slice();
                if let Some(rest) = line.strip_suffix(b"\n") {
                    line = rest.strip_suffix(b"\r").unwrap_or(rest);
                }
                Some(Ok(String::from_utf8_lossy(line).into_owned()))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

impl<R: BufRead> Lexer<ReaderLines<R>> {
    /// Creates a new lexer reading lines from `reader`.
    #[must_use]
    pub fn from_reader(reader: R) -> Self {
        Self::from_lines(ReaderLines {
            reader,
            buf: Vec::new(),
        })
    }
}

impl<L> Lexer<L>
where
    L: Iterator<Item = io::Result<String>>,
{
    /// Creates a new lexer over an arbitrary line source.
    #[must_use]
    pub fn from_lines(lines: L) -> Self {
        Self {
            lines,
            line: None,
            cursor: 0,
            column: 1,
            line_number: 0,
            comment: false,
            exhausted: false,
        }
    }

    /// Returns the next token from the source.
    ///
    /// Once the line source is drained this keeps returning `Eof`.
    ///
    /// # Errors
    /// Returns the I/O error if the next physical line cannot be read.
    pub fn next_token(&mut self) -> io::Result<Token> {
        if self.line.is_none() && !self.next_line()? {
            return Ok(Token::eof(Span::new(self.line_number + 1, 1)));
        }

        if self.comment {
            self.comment = false;
            return Ok(self.end_line());
        }

        self.skip_whitespace();
        let Some(c) = self.peek_char() else {
            return Ok(self.end_line());
        };

        let span = Span::new(self.line_number, self.column);
        if let Some(kind) = TokenKind::from_special(c) {
            self.advance();
            self.comment = kind == TokenKind::Pound;
            return Ok(Token::new(kind, c.to_string(), span));
        }

        let text = self.scan_run();
        let kind = if text.eq_ignore_ascii_case("group") {
            TokenKind::KeyGroup
        } else {
            TokenKind::StringLit
        };
        Ok(Token::new(kind, text, span))
    }

    /// Tokenizes the whole source.
    ///
    /// # Errors
    /// Returns [`Truncated`] with the tokens produced so far if a line
    /// cannot be read. The failure is logged.
    pub fn read_tokens(mut self) -> Result<Vec<Token>, Truncated> {
        let mut tokens = Vec::new();
        loop {
            match self.next_token() {
                Ok(token) => {
                    let is_eof = token.kind == TokenKind::Eof;
                    tokens.push(token);
                    if is_eof {
                        return Ok(tokens);
                    }
                }
                Err(source) => {
                    warn!(
                        line = self.line_number + 1,
                        error = %source,
                        "failed to read collision source, token stream truncated"
                    );
                    return Err(Truncated { tokens, source });
                }
            }
        }
    }

    /// Loads the next physical line. Returns false once the source is drained.
    fn next_line(&mut self) -> io::Result<bool> {
        if self.exhausted {
            return Ok(false);
        }
        let Some(line) = self.lines.next() else {
            self.exhausted = true;
            return Ok(false);
        };
        self.line = Some(line?);
        self.cursor = 0;
        self.column = 1;
        self.line_number += 1;
        Ok(true)
    }

    /// Emits the end-of-line token and discards the rest of the line.
    fn end_line(&mut self) -> Token {
        self.line = None;
        Token::eol(Span::new(self.line_number, self.column))
    }

    /// Peeks at the next character of the current line.
    fn peek_char(&self) -> Option<char> {
        self.line
            .as_deref()
            .and_then(|line| line[self.cursor..].chars().next())
    }

    /// Advances past the next character.
    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            self.cursor += c.len_utf8();
            self.column += 1;
        }
    }

    /// Skips whitespace characters.
    fn skip_whitespace(&mut self) {
        while self.peek_char().is_some_and(is_separator) {
            self.advance();
        }
    }

    /// Scans a maximal run of characters that are neither whitespace nor special.
    fn scan_run(&mut self) -> String {
        let start = self.cursor;
        while self.peek_char().is_some_and(is_literal_char) {
            self.advance();
        }
        self.line
            .as_deref()
            .map_or_else(String::new, |line| line[start..self.cursor].to_owned())
    }
}

impl Lexer<SourceLines<'_>> {
    /// Tokenizes all of an in-memory source.
    ///
    /// In-memory lines cannot fail to read, so the result always ends in `Eof`.
    #[must_use]
    pub fn tokenize_all(source: &str) -> Vec<Token> {
        Lexer::new(source)
            .read_tokens()
            .unwrap_or_else(|truncated| truncated.tokens)
    }
}

/// Returns true if `c` separates tokens.
///
/// No-break spaces and NEL are not separators and stay inside literals. The
/// ASCII information separators U+001C to U+001F are.
pub(crate) fn is_separator(c: char) -> bool {
    match c {
        '\u{00A0}' | '\u{2007}' | '\u{202F}' | '\u{0085}' => false,
        '\u{001C}'..='\u{001F}' => true,
        _ => c.is_whitespace(),
    }
}

/// Returns true if `c` can appear in a string literal.
fn is_literal_char(c: char) -> bool {
    !is_separator(c) && TokenKind::from_special(c).is_none()
}
