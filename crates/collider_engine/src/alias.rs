//! Alternate ability names.
//!
//! Some abilities share a display name with another ability, so the host
//! registry cannot tell them apart by name. These names map to one canonical
//! identifier the registry does know. The mapping is applied once; a
//! canonical name is never looked up again.

use crate::registry::AbilityRegistry;

/// `(name as written, canonical identifier)` pairs.
pub const ALIASES: &[(&str, &str)] = &[
    ("FireBlast", "FireBlast"),
    ("FireBlastCharged", "FireBlastCharged"),
    ("ChargedFireBlast", "FireBlastCharged"),
    ("CFB", "FireBlastCharged"),
    ("IceSpikeBlast", "IceSpikeBlast"),
    ("IceSpike", "IceSpikePillar"),
    ("WaterSpout", "WaterSpout"),
    ("WaterWave", "WaterSpoutWave"),
    ("WaterSpoutWave", "WaterSpoutWave"),
    ("Torrent", "Torrent"),
    ("TorrentWave", "TorrentWave"),
    ("TorrentRing", "TorrentWave"),
    ("Surge", "SurgeWave"),
    ("SurgeWave", "SurgeWave"),
    ("SurgeWall", "SurgeWall"),
    ("SurgeShield", "SurgeWall"),
];

/// Returns the canonical identifier for `name`.
///
/// Names outside the alias table pass through unchanged.
#[must_use]
pub fn canonical_name(name: &str) -> &str {
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == name)
        .map_or(name, |&(_, canonical)| canonical)
}

/// Resolves an ability name through the alias table and then the registry.
pub fn resolve<R>(registry: &R, name: &str) -> Option<R::Handle>
where
    R: AbilityRegistry + ?Sized,
{
    registry.resolve(canonical_name(name))
}
