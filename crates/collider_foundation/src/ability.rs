//! Ability handles.

use std::fmt;
use std::sync::Arc;

/// Handle for a live ability known to a registry.
///
/// Two handles are the same ability when their indices match. The canonical
/// name travels with the handle so diagnostics can print it without a
/// registry lookup.
#[derive(Clone, Eq)]
pub struct AbilityId {
    index: u32,
    name: Arc<str>,
}

impl AbilityId {
    /// Creates a new handle.
    #[must_use]
    pub fn new(index: u32, name: impl Into<Arc<str>>) -> Self {
        Self {
            index,
            name: name.into(),
        }
    }

    /// Returns the registry index of this ability.
    #[must_use]
    pub const fn index(&self) -> u32 {
        self.index
    }

    /// Returns the canonical name of this ability.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for AbilityId {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl std::hash::Hash for AbilityId {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.index.hash(state);
    }
}

impl fmt::Debug for AbilityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AbilityId({}:{})", self.index, self.name)
    }
}

impl fmt::Display for AbilityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
