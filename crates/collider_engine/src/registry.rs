//! Host capabilities the resolver depends on.
//!
//! The resolver never owns abilities or rules. It looks abilities up through
//! an [`AbilityRegistry`] and issues rule operations to a
//! [`CollisionRegistry`]. [`AbilityTable`] and
//! [`CollisionManager`](crate::CollisionManager) are in-memory
//! implementations for hosts without their own.

use std::collections::HashMap;
use std::fmt;

use collider_foundation::AbilityId;

use crate::collision::Collision;

/// Maps a canonical ability name to a live handle.
pub trait AbilityRegistry {
    /// Handle for a resolved ability.
    type Handle: Clone + PartialEq + fmt::Display;

    /// Looks up an ability by its exact, case-sensitive name.
    fn resolve(&self, name: &str) -> Option<Self::Handle>;
}

/// Stores collision rules between abilities.
pub trait CollisionRegistry<H> {
    /// Adds a rule.
    fn register(&mut self, collision: Collision<H>);

    /// Removes every rule between `first` and `second` in either order.
    ///
    /// Returns the number of rules removed.
    fn remove_between(&mut self, first: &H, second: &H) -> usize;

    /// Removes every rule.
    fn clear(&mut self);
}

impl<R: AbilityRegistry + ?Sized> AbilityRegistry for &R {
    type Handle = R::Handle;

    fn resolve(&self, name: &str) -> Option<Self::Handle> {
        (**self).resolve(name)
    }
}

/// In-memory ability registry keyed by canonical name.
#[derive(Clone, Debug, Default)]
pub struct AbilityTable {
    by_name: HashMap<String, AbilityId>,
}

impl AbilityTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an ability, returning its handle.
    ///
    /// Registering a name twice returns the existing handle.
    pub fn insert(&mut self, name: &str) -> AbilityId {
        let next = u32::try_from(self.by_name.len()).unwrap_or(u32::MAX);
        self.by_name
            .entry(name.to_owned())
            .or_insert_with(|| AbilityId::new(next, name))
            .clone()
    }

    /// Returns the number of registered abilities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Returns true if no abilities are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Returns true if `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }
}

impl AbilityRegistry for AbilityTable {
    type Handle = AbilityId;

    fn resolve(&self, name: &str) -> Option<AbilityId> {
        self.by_name.get(name).cloned()
    }
}

impl<'a> FromIterator<&'a str> for AbilityTable {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut table = Self::new();
        for name in iter {
            table.insert(name);
        }
        table
    }
}
