//! Core types and errors for the collider rule language.
//!
//! This crate provides:
//! - [`AbilityId`] - Opaque handle for a resolved ability
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod ability;
pub mod error;

pub use ability::AbilityId;
pub use error::{Error, ErrorContext, ErrorKind, Result};
