//! Group table, alias table, and rule resolution for the collider rule language.
//!
//! This crate provides:
//! - [`AbilityRegistry`] and [`CollisionRegistry`] - The host capabilities the
//!   resolver depends on, with in-memory implementations
//! - [`Resolver`] - The single-pass semantic stage over parsed statements
//! - [`Loader`] - The full lex, parse, resolve pipeline for one load
//! - [`alias`] - Fixed alternate names for ambiguous abilities

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod alias;
pub mod collision;
pub mod config;
pub mod group;
pub mod loader;
pub mod registry;
pub mod resolver;

pub use collision::{Collision, CollisionManager};
pub use config::LoaderConfig;
pub use group::GroupTable;
pub use loader::{LoadReport, Loader};
pub use registry::{AbilityRegistry, AbilityTable, CollisionRegistry};
pub use resolver::Resolver;
