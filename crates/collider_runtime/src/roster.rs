//! Ability rosters.
//!
//! A roster file lists one canonical ability name per line. Text after `#`
//! is a comment and blank lines are skipped.

use std::fs;
use std::path::Path;

use collider_engine::AbilityTable;
use collider_foundation::{Error, Result};

/// Canonical names of the core abilities.
pub const CORE_ABILITIES: &[&str] = &[
    // Air
    "AirBlast",
    "AirBurst",
    "AirScooter",
    "AirShield",
    "AirSpout",
    "AirSuction",
    "AirSwipe",
    "Flight",
    "Suffocate",
    "Tornado",
    // Earth
    "Catapult",
    "Collapse",
    "EarthArmor",
    "EarthBlast",
    "EarthGrab",
    "EarthSmash",
    "EarthTunnel",
    "Extraction",
    "LavaFlow",
    "MetalClips",
    "RaiseEarth",
    "Shockwave",
    "Tremorsense",
    // Fire
    "Blaze",
    "Combustion",
    "FireBlast",
    "FireBlastCharged",
    "FireBurst",
    "FireJet",
    "FireManipulation",
    "FireShield",
    "HeatControl",
    "Illumination",
    "Lightning",
    "WallOfFire",
    // Water
    "Bloodbending",
    "HealingWaters",
    "IceBlast",
    "IceSpikeBlast",
    "IceSpikePillar",
    "OctopusForm",
    "PhaseChange",
    "SurgeWall",
    "SurgeWave",
    "Torrent",
    "TorrentWave",
    "WaterArms",
    "WaterManipulation",
    "WaterSpout",
    "WaterSpoutWave",
];

/// Returns a table holding the core abilities.
#[must_use]
pub fn core_table() -> AbilityTable {
    CORE_ABILITIES.iter().copied().collect()
}

/// Iterates over the ability names in roster text.
pub fn names(content: &str) -> impl Iterator<Item = &str> {
    content
        .lines()
        .map(|line| line.split_once('#').map_or(line, |(before, _)| before).trim())
        .filter(|name| !name.is_empty())
}

/// Builds a table from roster text.
#[must_use]
pub fn parse(content: &str) -> AbilityTable {
    names(content).collect()
}

/// Reads a roster file.
///
/// # Errors
/// Returns an I/O error if the file cannot be read.
pub fn load(path: &Path) -> Result<AbilityTable> {
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    Ok(parse(&content))
}
