//! Zone ranker
//!
//! Scores each zone by the weighted match levels of the selected weapons
//! and keeps only zones where the priority weapon can roll a perfect
//! essence. An empty ranking means no zone is viable; it is not an error.

use super::level::{evaluate_weapon, MatchLevel, WeaponMatch};
use crate::catalog::{Weapon, Zone};
use crate::config::RankingWeights;
use crate::pre_engrave::PreEngraveConfig;
use crate::probability::{zone_chances, DropChanceBreakdown};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A recommended zone and how the selection fares in it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneRanking {
    pub zone: Zone,
    pub score: u32,
    pub perfect_count: u32,
    pub good_count: u32,
    /// Per-weapon match, in selection order
    pub weapon_matches: Vec<WeaponMatch>,
    /// Per-weapon perfect-essence odds, keyed by weapon name
    pub weapon_chances: IndexMap<String, DropChanceBreakdown>,
}

/// Rank zones for a selection, best first. Equal scores keep zone order.
pub fn rank_zones(
    priority: &Weapon,
    weapons: &[Weapon],
    zones: &[Zone],
    config: &PreEngraveConfig,
    weights: &RankingWeights,
) -> Vec<ZoneRanking> {
    let mut rankings: Vec<ZoneRanking> = zones
        .iter()
        .filter(|zone| evaluate_weapon(priority, zone, config).level == MatchLevel::Perfect)
        .map(|zone| rank_zone(priority, weapons, zone, config, weights))
        .collect();

    // sort_by is stable
    rankings.sort_by(|a, b| b.score.cmp(&a.score));

    debug!(
        priority = %priority.name,
        weapons = weapons.len(),
        zones = zones.len(),
        viable = rankings.len(),
        "ranked zones"
    );

    rankings
}

fn rank_zone(
    priority: &Weapon,
    weapons: &[Weapon],
    zone: &Zone,
    config: &PreEngraveConfig,
    weights: &RankingWeights,
) -> ZoneRanking {
    let weapon_matches: Vec<WeaponMatch> = weapons
        .iter()
        .map(|weapon| evaluate_weapon(weapon, zone, config))
        .collect();

    let score = weapons
        .iter()
        .zip(&weapon_matches)
        .map(|(weapon, m)| weights.zone_contribution(weapon.name == priority.name, m.level))
        .fold(0u32, u32::saturating_add);

    let count = |level: MatchLevel| weapon_matches.iter().filter(|m| m.level == level).count() as u32;

    ZoneRanking {
        zone: zone.clone(),
        score,
        perfect_count: count(MatchLevel::Perfect),
        good_count: count(MatchLevel::Good),
        weapon_chances: zone_chances(zone, weapons, config),
        weapon_matches,
    }
}
