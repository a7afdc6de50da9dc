//! Lexer, parser, and syntax tree for the collider rule language.
//!
//! This crate provides:
//! - [`Lexer`] - Tokenization of line-oriented collision source
//! - [`Parser`] - Recursive-descent parsing with per-line error recovery
//! - [`Statement`] - The closed set of parsed statements

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod span;
pub mod token;

pub use ast::{
    CollisionDeclaration, CollisionEffect, GroupDeclaration, Operand, Operator, Statement,
};
pub use lexer::{Lexer, ReaderLines, SourceLines, Truncated};
pub use parser::{ParseError, Parsed, Parser, parse};
pub use span::Span;
pub use token::{Token, TokenKind};
