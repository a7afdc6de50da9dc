//! Cross-layer integration tests for collider
//!
//! Tests that verify correct interaction between multiple crates.

mod end_to_end;
