//! Single-pass resolution of parsed statements into rule operations.
//!
//! Statements are applied in source order against one group table. A
//! `$group` reference only sees groups bound by earlier statements, and a
//! later declaration with the same name replaces the earlier binding for
//! everything after it.
//!
//! A collision declaration expands both sides to ability lists and applies
//! its operator to every pair in their Cartesian product, left-major. Pairs
//! are not deduplicated. An operand that cannot be resolved is logged and
//! contributes no abilities; it never stops the pass.

use collider_foundation::Error;
use collider_language::{
    CollisionDeclaration, CollisionEffect, GroupDeclaration, Operand, Statement,
};
use im::Vector;
use tracing::{info, warn};

use crate::alias;
use crate::collision::Collision;
use crate::group::GroupTable;
use crate::loader::LoadReport;
use crate::registry::{AbilityRegistry, CollisionRegistry};

/// Applies statements to a rule registry.
pub struct Resolver<'a, A: AbilityRegistry, C> {
    /// Ability lookup.
    abilities: &'a A,
    /// Receives rule operations.
    collisions: &'a mut C,
    /// Groups bound so far in this pass.
    groups: GroupTable<A::Handle>,
    /// Log every binding and rule operation.
    verbose: bool,
    /// Counters for this pass.
    report: LoadReport,
}

impl<'a, A, C> Resolver<'a, A, C>
where
    A: AbilityRegistry,
    C: CollisionRegistry<A::Handle>,
{
    /// Creates a resolver with an empty group table.
    #[must_use]
    pub fn new(abilities: &'a A, collisions: &'a mut C) -> Self {
        Self {
            abilities,
            collisions,
            groups: GroupTable::new(),
            verbose: false,
            report: LoadReport::default(),
        }
    }

    /// Builder method to enable/disable verbose logging.
    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Applies statements in order.
    pub fn apply_all(&mut self, statements: &[Statement]) {
        for statement in statements {
            self.apply(statement);
        }
    }

    /// Applies one statement.
    pub fn apply(&mut self, statement: &Statement) {
        match statement {
            Statement::Empty => {}
            Statement::Group(decl) => {
                self.report.statements += 1;
                self.bind_group(decl);
            }
            Statement::Collision(decl) => {
                self.report.statements += 1;
                self.apply_collision(decl);
            }
        }
    }

    /// Returns the groups bound so far.
    #[must_use]
    pub fn groups(&self) -> &GroupTable<A::Handle> {
        &self.groups
    }

    /// Returns the counters so far.
    #[must_use]
    pub fn report(&self) -> &LoadReport {
        &self.report
    }

    /// Ends the pass, discarding the group table.
    #[must_use]
    pub fn finish(self) -> LoadReport {
        self.report
    }

    fn bind_group(&mut self, decl: &GroupDeclaration) {
        if decl.name.is_empty() {
            // Operands of a nameless group are never evaluated
            warn!(
                line = decl.span.line,
                "group declared with an empty name on line {}, binding it to no abilities",
                decl.span.line
            );
            self.report.warnings += 1;
            self.groups.bind("", Vector::new());
            self.report.groups_bound += 1;
            return;
        }

        let mut members = Vector::new();
        for operand in &decl.operands {
            members.append(self.resolve_operand(operand));
        }

        if self.verbose {
            info!(
                line = decl.span.line,
                "Bound group '{}' to {} abilities",
                decl.name,
                members.len()
            );
        }
        self.groups.bind(decl.name.clone(), members);
        self.report.groups_bound += 1;
    }

    fn apply_collision(&mut self, decl: &CollisionDeclaration) {
        let left = self.resolve_operand(&decl.left);
        let right = self.resolve_operand(&decl.right);
        let effect = decl.operator.effect();

        for first in &left {
            for second in &right {
                self.apply_pair(first, second, effect);
            }
        }
    }

    fn apply_pair(&mut self, first: &A::Handle, second: &A::Handle, effect: CollisionEffect) {
        match effect {
            CollisionEffect::Remove => {
                self.collisions.remove_between(first, second);
                self.report.removals += 1;
                if self.verbose {
                    info!("Removing collision between: {first} and {second}");
                }
            }
            CollisionEffect::Register {
                remove_first,
                remove_second,
            } => {
                self.collisions.register(Collision::new(
                    first.clone(),
                    second.clone(),
                    remove_first,
                    remove_second,
                ));
                self.report.registrations += 1;
                if self.verbose {
                    info!(
                        "Registering collision between: {first} and {second} RemoveFirst: {remove_first} RemoveSecond: {remove_second}"
                    );
                }
            }
        }
    }

    /// Resolves an operand to its abilities, logging anything unknown.
    fn resolve_operand(&mut self, operand: &Operand) -> Vector<A::Handle> {
        let line = operand.line();
        if operand.is_group_reference {
            if let Some(members) = self.groups.get(&operand.literal) {
                return members.clone();
            }
            let err = Error::unknown_group(operand.literal.as_str(), line);
            warn!(line, "{err}");
        } else {
            if let Some(handle) = alias::resolve(self.abilities, &operand.literal) {
                return Vector::unit(handle);
            }
            let err = Error::unknown_ability(operand.literal.as_str(), line);
            warn!(line, "{err}");
        }
        self.report.warnings += 1;
        Vector::new()
    }
}
