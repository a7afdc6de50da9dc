//! Collider - Line-oriented collision rule language
//!
//! This crate re-exports all layers of the collider system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: collider_runtime    - Settings file, host lifecycle, CLI
//! Layer 2: collider_engine     - Alias table, registries, groups, resolution
//! Layer 1: collider_language   - Spans, tokens, lexer, syntax tree, parser
//! Layer 0: collider_foundation - Core types (AbilityId, Error)
//! ```

pub use collider_engine as engine;
pub use collider_foundation as foundation;
pub use collider_language as language;
pub use collider_runtime as runtime;
