//! Settings, host lifecycle, and CLI for the collider rule language.
//!
//! This crate provides:
//! - [`Settings`] - The YAML settings file and its mapping to a load
//! - [`Host`] - Owns the registries and runs loads and reloads
//! - [`roster`] - Ability rosters for hosts without their own registry
//! - [`logging`] - Subscriber setup for binaries

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod host;
pub mod logging;
pub mod roster;
pub mod settings;

pub use host::Host;
pub use settings::{Properties, Settings};
