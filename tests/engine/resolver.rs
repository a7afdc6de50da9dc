//! Integration tests for the resolver
//!
//! Records every rule operation issued for a parsed source and checks it
//! against the expected sequence.

use collider_engine::{
    AbilityRegistry, AbilityTable, Collision, CollisionRegistry, LoadReport, Loader, LoaderConfig,
    Resolver,
};
use collider_foundation::AbilityId;
use collider_language::parse;

/// A rule operation, rendered by ability name.
#[derive(Debug, PartialEq, Eq)]
enum Op {
    Register(String, String, bool, bool),
    Remove(String, String),
    Clear,
}

/// Rule registry that only records what it was asked to do.
#[derive(Default)]
struct Recorder {
    ops: Vec<Op>,
}

impl CollisionRegistry<AbilityId> for Recorder {
    fn register(&mut self, c: Collision<AbilityId>) {
        self.ops.push(Op::Register(
            c.first.name().to_string(),
            c.second.name().to_string(),
            c.remove_first,
            c.remove_second,
        ));
    }

    fn remove_between(&mut self, first: &AbilityId, second: &AbilityId) -> usize {
        self.ops
            .push(Op::Remove(first.name().to_string(), second.name().to_string()));
        0
    }

    fn clear(&mut self) {
        self.ops.push(Op::Clear);
    }
}

fn register(a: &str, b: &str, remove_a: bool, remove_b: bool) -> Op {
    Op::Register(a.to_string(), b.to_string(), remove_a, remove_b)
}

fn remove(a: &str, b: &str) -> Op {
    Op::Remove(a.to_string(), b.to_string())
}

fn abilities() -> AbilityTable {
    [
        "AirBlast",
        "AirSwipe",
        "EarthBlast",
        "FireBlast",
        "FireBlastCharged",
        "IceSpikeBlast",
        "WaterSpoutWave",
    ]
    .into_iter()
    .collect()
}

fn record(source: &str) -> (Vec<Op>, LoadReport) {
    let table = abilities();
    let mut recorder = Recorder::default();
    let report = Loader::new(&table, &mut recorder, LoaderConfig::default()).load_str(source);
    (recorder.ops, report)
}

// =============================================================================
// Documented Examples
// =============================================================================

#[test]
fn fire_group_removes_against_ice() {
    let table = abilities();
    let mut recorder = Recorder::default();
    let parsed = parse("group \"Fire\" {FireBlast, CFB}\n$Fire x IceSpikeBlast");

    let mut resolver = Resolver::new(&table, &mut recorder);
    resolver.apply(&parsed.statements[0]);
    let fire: Vec<_> = resolver
        .groups()
        .get("Fire")
        .unwrap()
        .iter()
        .map(|id| id.name().to_string())
        .collect();
    assert_eq!(fire, vec!["FireBlast", "FireBlastCharged"]);

    resolver.apply(&parsed.statements[1]);
    let report = resolver.finish();
    assert_eq!(report.removals, 2);
    assert_eq!(
        recorder.ops,
        vec![
            remove("FireBlast", "IceSpikeBlast"),
            remove("FireBlastCharged", "IceSpikeBlast"),
        ]
    );
}

#[test]
fn single_register() {
    let (ops, _) = record("AirBlast > FireBlast");
    assert_eq!(ops, vec![register("AirBlast", "FireBlast", false, true)]);
}

#[test]
fn missing_operator_issues_nothing() {
    let (ops, report) = record("AirBlast FireBlast");
    assert!(ops.is_empty());
    assert_eq!(report.syntax_errors, 1);
}

#[test]
fn undeclared_group_issues_nothing() {
    let (ops, report) = record("$Ghost x FireBlast");
    assert!(ops.is_empty());
    assert_eq!(report.warnings, 1);
}

// =============================================================================
// Expansion
// =============================================================================

#[test]
fn product_is_left_major() {
    let (ops, report) = record(
        "group \"L\" {AirBlast, AirSwipe}\ngroup \"R\" {EarthBlast, WaterWave, FireBlast}\n$L < $R",
    );
    assert_eq!(report.registrations, 6);
    assert_eq!(
        ops,
        vec![
            register("AirBlast", "EarthBlast", true, false),
            register("AirBlast", "WaterSpoutWave", true, false),
            register("AirBlast", "FireBlast", true, false),
            register("AirSwipe", "EarthBlast", true, false),
            register("AirSwipe", "WaterSpoutWave", true, false),
            register("AirSwipe", "FireBlast", true, false),
        ]
    );
}

#[test]
fn overlapping_membership_repeats_pairs() {
    let (ops, _) = record("group \"A\" {FireBlast, CFB, FireBlastCharged}\n$A = AirBlast");
    assert_eq!(
        ops,
        vec![
            register("FireBlast", "AirBlast", true, true),
            register("FireBlastCharged", "AirBlast", true, true),
            register("FireBlastCharged", "AirBlast", true, true),
        ]
    );
}

#[test]
fn redeclaration_affects_only_later_lines() {
    let (ops, report) = record(
        "group \"G\" {AirBlast}\n$G ~ EarthBlast\ngroup \"G\" {FireBlast, AirSwipe}\n$G ~ EarthBlast",
    );
    assert_eq!(report.groups_bound, 2);
    assert_eq!(
        ops,
        vec![
            register("AirBlast", "EarthBlast", false, false),
            register("FireBlast", "EarthBlast", false, false),
            register("AirSwipe", "EarthBlast", false, false),
        ]
    );
}

#[test]
fn group_reference_inside_group_flattens() {
    let (ops, _) = record(
        "group \"Air\" {AirBlast, AirSwipe}\ngroup \"Both\" {$Air, EarthBlast}\nIceSpikeBlast > $Both",
    );
    assert_eq!(ops.len(), 3);
    assert_eq!(ops[2], register("IceSpikeBlast", "EarthBlast", false, true));
}

#[test]
fn unknown_side_contributes_nothing_but_line_continues() {
    let (ops, report) = record("Ghost > FireBlast\nAirBlast > Phantom\nAirBlast > FireBlast");
    assert_eq!(ops, vec![register("AirBlast", "FireBlast", false, true)]);
    assert_eq!(report.warnings, 2);
    assert_eq!(report.statements, 3);
}

#[test]
fn clear_is_issued_first() {
    let table = abilities();
    let mut recorder = Recorder::default();
    let config = LoaderConfig::default().with_clear_existing(true);
    Loader::new(&table, &mut recorder, config).load_str("AirBlast x FireBlast");
    assert_eq!(recorder.ops, vec![Op::Clear, remove("AirBlast", "FireBlast")]);
}

#[test]
fn handles_come_from_the_registry() {
    let table = abilities();
    let (ops, _) = record("CFB ~ IceSpikeBlast");
    let expected = table.resolve("FireBlastCharged").unwrap();
    assert_eq!(ops, vec![register(expected.name(), "IceSpikeBlast", false, false)]);
}
