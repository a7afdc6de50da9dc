//! Integration tests for the registries
//!
//! Tests the in-memory ability and rule registries, and resolution through
//! a host-defined registry.

use std::collections::HashSet;

use collider_engine::alias;
use collider_engine::{AbilityRegistry, AbilityTable, Collision, CollisionManager, CollisionRegistry};

/// A host registry whose handles are plain names.
struct NameSet(HashSet<&'static str>);

impl AbilityRegistry for NameSet {
    type Handle = String;

    fn resolve(&self, name: &str) -> Option<String> {
        self.0.get(name).map(|name| (*name).to_string())
    }
}

// =============================================================================
// Alias Table
// =============================================================================

#[test]
fn aliases_resolve_to_same_handle() {
    let table: AbilityTable = ["FireBlast", "FireBlastCharged"].into_iter().collect();
    let canonical = alias::resolve(&table, "FireBlastCharged").unwrap();
    assert_eq!(alias::resolve(&table, "CFB"), Some(canonical.clone()));
    assert_eq!(alias::resolve(&table, "ChargedFireBlast"), Some(canonical));
    assert_ne!(
        alias::resolve(&table, "FireBlast"),
        alias::resolve(&table, "CFB")
    );
}

#[test]
fn ice_spike_is_the_pillar() {
    let names = NameSet(["IceSpikeBlast", "IceSpikePillar"].into_iter().collect());
    assert_eq!(alias::resolve(&names, "IceSpike").as_deref(), Some("IceSpikePillar"));
    assert_eq!(alias::resolve(&names, "IceSpikeBlast").as_deref(), Some("IceSpikeBlast"));
}

#[test]
fn unaliased_names_pass_through() {
    let names = NameSet(["AirBlast"].into_iter().collect());
    assert_eq!(alias::canonical_name("AirBlast"), "AirBlast");
    assert_eq!(alias::resolve(&names, "AirBlast").as_deref(), Some("AirBlast"));
    assert_eq!(alias::resolve(&names, "airblast"), None);
}

// =============================================================================
// Rule Store
// =============================================================================

#[test]
fn manager_keeps_registration_order() {
    let mut manager = CollisionManager::new();
    manager.register(Collision::new("B", "C", true, false));
    manager.register(Collision::new("A", "B", false, true));
    let rendered: Vec<_> = manager.iter().map(ToString::to_string).collect();
    assert_eq!(rendered, vec!["B < C", "A > B"]);
}

#[test]
fn remove_counts_unordered_matches() {
    let mut manager = CollisionManager::new();
    manager.register(Collision::new("A", "B", false, true));
    manager.register(Collision::new("B", "A", false, false));
    manager.register(Collision::new("A", "A", true, true));

    assert_eq!(manager.remove_between(&"B", &"A"), 2);
    assert_eq!(manager.remove_between(&"A", &"A"), 1);
    assert!(manager.is_empty());
}
