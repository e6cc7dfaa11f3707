//! Probability calculator - exact odds of a perfect essence
//!
//! Each slot is independent:
//! - primary: one hit in [`PRIMARY_DRAW_SIZE`], never lockable
//! - secondary/skill: certain when pre-engraved to the weapon's stat,
//!   `1 / pool size` when the zone offers it, otherwise impossible
//!
//! A weapon without a secondary stat has nothing to roll in that slot, so it
//! is reported as certain.

mod simulation;

pub use simulation::{primary_draw, roll_essence, simulate_farming, Essence, SimulationReport};

use crate::catalog::{Weapon, Zone};
use crate::pre_engrave::PreEngraveConfig;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Number of primary attributes an essence's primary roll picks from
pub const PRIMARY_DRAW_SIZE: u32 = 3;

/// Per-slot odds of a perfect essence for one weapon in one zone
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DropChanceBreakdown {
    pub primary_chance: f64,
    pub secondary_chance: f64,
    pub skill_chance: f64,
    /// Product of the three slot chances, as a percentage
    pub chance: f64,
}

impl DropChanceBreakdown {
    pub fn new(primary_chance: f64, secondary_chance: f64, skill_chance: f64) -> Self {
        DropChanceBreakdown {
            primary_chance,
            secondary_chance,
            skill_chance,
            chance: primary_chance * secondary_chance * skill_chance * 100.0,
        }
    }

    /// Whether a perfect essence can drop at all
    pub fn is_possible(&self) -> bool {
        self.chance > 0.0
    }

    /// Mean number of drops until the first perfect essence
    pub fn expected_attempts(&self) -> Option<f64> {
        if self.is_possible() {
            Some(100.0 / self.chance)
        } else {
            None
        }
    }
}

/// Chance of hitting a specific primary attribute
pub fn primary_chance() -> f64 {
    1.0 / PRIMARY_DRAW_SIZE as f64
}

/// Exact odds of a perfect essence for `weapon` farmed in `zone` under `config`
pub fn calculate_drop_chance(
    weapon: &Weapon,
    zone: &Zone,
    config: &PreEngraveConfig,
) -> DropChanceBreakdown {
    let secondary_chance = match weapon.secondary_stat {
        None => 1.0,
        Some(ref stat) if config.fixed.locks_secondary(stat) => 1.0,
        Some(ref stat) if zone.offers_secondary(stat) => 1.0 / zone.secondary_stats.len() as f64,
        Some(_) => 0.0,
    };

    let skill = &weapon.skill_stat;
    let skill_chance = if config.fixed.locks_skill(skill) {
        1.0
    } else if zone.offers_skill(skill) {
        1.0 / zone.skill_stats.len() as f64
    } else {
        0.0
    };

    DropChanceBreakdown::new(primary_chance(), secondary_chance, skill_chance)
}

/// Odds for every weapon in a zone, keyed by weapon name in selection order
pub fn zone_chances(
    zone: &Zone,
    weapons: &[Weapon],
    config: &PreEngraveConfig,
) -> IndexMap<String, DropChanceBreakdown> {
    weapons
        .iter()
        .map(|weapon| (weapon.name.clone(), calculate_drop_chance(weapon, zone, config)))
        .collect()
}
