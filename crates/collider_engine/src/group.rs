//! Group table.
//!
//! Maps a group name to its flattened member list. One table lives for one
//! load and is discarded with it. Member lists are persistent vectors so a
//! `$group` reference shares its members instead of copying them.

use std::collections::HashMap;

use im::Vector;

/// Group name to resolved members, in declaration order.
#[derive(Clone, Debug)]
pub struct GroupTable<H: Clone> {
    groups: HashMap<String, Vector<H>>,
}

impl<H: Clone> GroupTable<H> {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            groups: HashMap::new(),
        }
    }

    /// Binds `name` to `members`, replacing any earlier binding.
    ///
    /// Returns the previous members, if any.
    pub fn bind(&mut self, name: impl Into<String>, members: Vector<H>) -> Option<Vector<H>> {
        self.groups.insert(name.into(), members)
    }

    /// Returns the members of `name`, or None if no such group is bound.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Vector<H>> {
        self.groups.get(name)
    }

    /// Returns true if `name` is bound.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.groups.contains_key(name)
    }

    /// Returns the number of bound groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns true if no groups are bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Iterates over group names in arbitrary order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }
}

impl<H: Clone> Default for GroupTable<H> {
    fn default() -> Self {
        Self::new()
    }
}
