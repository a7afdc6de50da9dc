//! Collision rules and an in-memory rule store.

use std::fmt;

use collider_language::Operator;

use crate::registry::CollisionRegistry;

/// A rule stating what happens when two abilities collide.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Collision<H> {
    /// The left-hand ability.
    pub first: H,
    /// The right-hand ability.
    pub second: H,
    /// Remove `first` when the two collide.
    pub remove_first: bool,
    /// Remove `second` when the two collide.
    pub remove_second: bool,
}

impl<H> Collision<H> {
    /// Creates a new rule.
    #[must_use]
    pub const fn new(first: H, second: H, remove_first: bool, remove_second: bool) -> Self {
        Self {
            first,
            second,
            remove_first,
            remove_second,
        }
    }

    /// Returns the registering operator that produces this rule.
    #[must_use]
    pub const fn operator(&self) -> Operator {
        match (self.remove_first, self.remove_second) {
            (false, false) => Operator::Tilde,
            (true, false) => Operator::LessThan,
            (false, true) => Operator::GreaterThan,
            (true, true) => Operator::Equal,
        }
    }
}

impl<H: PartialEq> Collision<H> {
    /// Returns true if this rule is between `a` and `b`, in either order.
    #[must_use]
    pub fn is_between(&self, a: &H, b: &H) -> bool {
        (self.first == *a && self.second == *b) || (self.first == *b && self.second == *a)
    }
}

impl<H: fmt::Display> fmt::Display for Collision<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.first, self.operator(), self.second)
    }
}

/// Ordered in-memory rule store.
#[derive(Clone, Debug)]
pub struct CollisionManager<H> {
    collisions: Vec<Collision<H>>,
}

impl<H> CollisionManager<H> {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            collisions: Vec::new(),
        }
    }

    /// Returns the number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.collisions.len()
    }

    /// Returns true if there are no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.collisions.is_empty()
    }

    /// Iterates over rules in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Collision<H>> {
        self.collisions.iter()
    }
}

impl<H: PartialEq> CollisionManager<H> {
    /// Returns every rule between `a` and `b`, in either order.
    pub fn between<'a>(&'a self, a: &'a H, b: &'a H) -> impl Iterator<Item = &'a Collision<H>> {
        self.collisions.iter().filter(move |c| c.is_between(a, b))
    }
}

impl<H> Default for CollisionManager<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: PartialEq> CollisionRegistry<H> for CollisionManager<H> {
    fn register(&mut self, collision: Collision<H>) {
        self.collisions.push(collision);
    }

    fn remove_between(&mut self, first: &H, second: &H) -> usize {
        let before = self.collisions.len();
        self.collisions.retain(|c| !c.is_between(first, second));
        before - self.collisions.len()
    }

    fn clear(&mut self) {
        self.collisions.clear();
    }
}
