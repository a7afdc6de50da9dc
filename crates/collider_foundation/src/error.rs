//! Error types for the collider system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The main error type for collider operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an I/O error for the given path.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::new(ErrorKind::Io {
            path: path.into(),
            source,
        })
    }

    /// Creates an unknown ability error.
    #[must_use]
    pub fn unknown_ability(name: impl Into<String>, line: u32) -> Self {
        Self::new(ErrorKind::UnknownAbility {
            name: name.into(),
            line,
        })
    }

    /// Creates an unknown group error.
    #[must_use]
    pub fn unknown_group(name: impl Into<String>, line: u32) -> Self {
        Self::new(ErrorKind::UnknownGroup {
            name: name.into(),
            line,
        })
    }

    /// Creates a settings error.
    #[must_use]
    pub fn settings(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Settings(message.into()))
    }

    /// Returns the source line this error refers to, if any.
    #[must_use]
    pub fn line(&self) -> Option<u32> {
        match &self.kind {
            ErrorKind::Syntax { line, .. }
            | ErrorKind::UnknownAbility { line, .. }
            | ErrorKind::UnknownGroup { line, .. } => Some(*line),
            ErrorKind::Io { .. } | ErrorKind::Settings(_) => {
                self.context.as_ref().and_then(|ctx| ctx.line)
            }
        }
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A source or settings file could not be read.
    #[error("could not read '{}': {source}", path.display())]
    Io {
        /// The file being read.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// Grammar violation in a collision source.
    #[error("unexpected {found} found on line {line}:{column}: {message}")]
    Syntax {
        /// Description of what the grammar expected.
        message: String,
        /// Human-readable name of the offending token.
        found: String,
        /// Line number (1-indexed).
        line: u32,
        /// Column number (1-indexed).
        column: u32,
    },

    /// A literal operand named no known ability.
    #[error("could not find ability with the name '{name}' on line {line}")]
    UnknownAbility {
        /// The literal as written.
        name: String,
        /// Line number (1-indexed).
        line: u32,
    },

    /// A `$group` operand named no group declared so far.
    #[error("could not find a group with the name '{name}' on line {line}")]
    UnknownGroup {
        /// The group name as written (without `$`).
        name: String,
        /// Line number (1-indexed).
        line: u32,
    },

    /// The host settings file is malformed.
    #[error("invalid settings: {0}")]
    Settings(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Source file name.
    pub source: Option<String>,
    /// Line number in source.
    pub line: Option<u32>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source location.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the line.
    #[must_use]
    pub fn with_line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
            if let Some(line) = self.line {
                write!(f, ":{line}")?;
            }
        }
        Ok(())
    }
}

/// Result type alias for collider operations.
pub type Result<T> = std::result::Result<T, Error>;
