//! Token types for the collider rule language.
//!
//! Tokens are the output of the lexer and input to the parser.

use crate::span::Span;

/// A token from lexical analysis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// The lexical category of this token.
    pub kind: TokenKind,
    /// The literal text of this token (empty for `Eol` and `Eof`).
    pub text: String,
    /// Source location of this token.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    /// Creates an end-of-line token.
    #[must_use]
    pub fn eol(span: Span) -> Self {
        Self::new(TokenKind::Eol, "", span)
    }

    /// Creates an end-of-input token.
    #[must_use]
    pub fn eof(span: Span) -> Self {
        Self::new(TokenKind::Eof, "", span)
    }

    /// Returns the 1-based source line of this token.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.span.line
    }
}

/// Token types for the collider rule language.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Keywords
    /// `group`, matched case-insensitively
    KeyGroup,

    // Operators
    /// `>`
    GreaterThan,
    /// `<`
    LessThan,
    /// `=`
    Equal,
    /// `~`
    Tilde,
    /// `x`
    X,

    // Non-operator terminals
    /// `"`
    Quote,
    /// `{`
    OpenBrace,
    /// `}`
    CloseBrace,
    /// `,`
    Comma,
    /// `#`, starts a comment
    Pound,
    /// `$`, prefixes a group reference
    DollarSign,
    /// Any maximal run of non-whitespace, non-special characters
    StringLit,
    /// End of a physical line
    Eol,
    /// End of input
    Eof,
}

impl TokenKind {
    /// Returns the token kind for a special character, if `c` is one.
    #[must_use]
    pub const fn from_special(c: char) -> Option<Self> {
        match c {
            '#' => Some(Self::Pound),
            '"' => Some(Self::Quote),
            '{' => Some(Self::OpenBrace),
            '}' => Some(Self::CloseBrace),
            ',' => Some(Self::Comma),
            '>' => Some(Self::GreaterThan),
            '<' => Some(Self::LessThan),
            '=' => Some(Self::Equal),
            'x' => Some(Self::X),
            '~' => Some(Self::Tilde),
            '$' => Some(Self::DollarSign),
            _ => None,
        }
    }

    /// Returns true if this token kind is a collision operator.
    #[must_use]
    pub const fn is_operator(self) -> bool {
        matches!(
            self,
            Self::GreaterThan | Self::LessThan | Self::Equal | Self::Tilde | Self::X
        )
    }

    /// Returns true if this token kind ends a statement.
    #[must_use]
    pub const fn is_terminator(self) -> bool {
        matches!(self, Self::Eol | Self::Eof | Self::Pound)
    }

    /// Returns a human-readable name for this token kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::KeyGroup => "keyword 'group'",
            Self::GreaterThan => "'>'",
            Self::LessThan => "'<'",
            Self::Equal => "'='",
            Self::Tilde => "'~'",
            Self::X => "'x'",
            Self::Quote => "'\"'",
            Self::OpenBrace => "'{'",
            Self::CloseBrace => "'}'",
            Self::Comma => "','",
            Self::Pound => "'#'",
            Self::DollarSign => "'$'",
            Self::StringLit => "string literal",
            Self::Eol => "end of line",
            Self::Eof => "end of input",
        }
    }
}
