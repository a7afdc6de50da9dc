//! End-to-end loads through the host.

use std::fs;
use std::path::PathBuf;

use collider::engine::LoaderConfig;
use collider::foundation::ErrorKind;
use collider::runtime::{Host, roster, settings};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("collider_e2e_{name}_{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn rules(host: &Host) -> Vec<String> {
    host.collisions().iter().map(ToString::to_string).collect()
}

const SAMPLE: &str = "\
# disable fire vs ice entirely
group \"Fire\" {FireBlast, CFB}
$Fire x IceSpikeBlast
AirSwipe > EarthBlast
AirBlast ~ WaterWave
";

#[test]
fn sample_file_with_core_roster() {
    let dir = scratch_dir("sample");
    fs::write(dir.join("collisions.txt"), SAMPLE).unwrap();

    let mut host = Host::new(roster::core_table(), LoaderConfig::new(dir.join("collisions.txt")));
    let report = host.load().unwrap();

    assert!(report.is_clean());
    assert_eq!(report.statements, 4);
    assert_eq!(report.removals, 2);
    assert_eq!(report.registrations, 2);
    assert_eq!(rules(&host), vec!["AirSwipe > EarthBlast", "AirBlast ~ WaterSpoutWave"]);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn later_load_removes_earlier_rules() {
    let mut host = Host::new(roster::core_table(), LoaderConfig::default());
    host.load_str("FireBlast = IceSpikeBlast\nCFB = IceSpikeBlast\nAirBlast > FireBlast");
    assert_eq!(host.collisions().len(), 3);

    host.load_str(SAMPLE);
    assert_eq!(
        rules(&host),
        vec![
            "AirBlast > FireBlast",
            "AirSwipe > EarthBlast",
            "AirBlast ~ WaterSpoutWave"
        ]
    );
}

#[test]
fn initialized_directory_loads_cleanly() {
    let dir = scratch_dir("init");
    let settings_path = settings::ensure_defaults(&dir).unwrap();

    let mut host = Host::from_settings(roster::core_table(), &settings_path).unwrap();
    let report = host.load().unwrap();
    assert!(report.is_clean());
    assert_eq!(report.operations(), 0);

    fs::write(dir.join("collisions.txt"), "AirBlast > FireBlast\n").unwrap();
    let report = host.reload().unwrap();
    assert_eq!(report.registrations, 1);
    assert_eq!(rules(&host), vec!["AirBlast > FireBlast"]);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn roster_file_limits_known_abilities() {
    let dir = scratch_dir("roster");
    let roster_path = dir.join("abilities.txt");
    fs::write(&roster_path, "# addon abilities\nFireBlast\nLavaDisc\n").unwrap();

    let mut host = Host::new(roster::load(&roster_path).unwrap(), LoaderConfig::default());
    let report = host.load_str("LavaDisc > FireBlast\nAirBlast > FireBlast");
    assert_eq!(report.warnings, 1);
    assert_eq!(rules(&host), vec!["LavaDisc > FireBlast"]);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn missing_source_file_is_reported() {
    let dir = scratch_dir("missing");
    let mut host = Host::new(roster::core_table(), LoaderConfig::new(dir.join("nope.txt")));
    let err = host.load().unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Io { .. }));
    assert!(err.to_string().contains("nope.txt"));

    let _ = fs::remove_dir_all(&dir);
}
