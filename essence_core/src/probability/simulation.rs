//! Farming simulation utilities
//!
//! Rolls concrete essences with the same slot model as the exact
//! calculator. Useful to sanity-check odds or show sample drops.

use super::PRIMARY_DRAW_SIZE;
use crate::catalog::{Weapon, Zone};
use crate::pre_engrave::PreEngraveConfig;
use crate::types::{PrimaryAttr, SecondaryStat, SkillStat};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A single farmed essence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Essence {
    pub primary: PrimaryAttr,
    pub secondary: SecondaryStat,
    pub skill: SkillStat,
}

impl Essence {
    /// Whether every stat the weapon requires is present
    pub fn is_perfect_for(&self, weapon: &Weapon) -> bool {
        self.primary == weapon.primary_attr
            && weapon
                .secondary_stat
                .as_ref()
                .map_or(true, |s| *s == self.secondary)
            && self.skill == weapon.skill_stat
    }
}

/// The primary attributes an essence rolls between when farming for
/// `target`: the target itself followed by the first other attributes of the
/// enumeration, up to [`PRIMARY_DRAW_SIZE`] entries.
pub fn primary_draw(target: &PrimaryAttr, pool: &[PrimaryAttr]) -> Vec<PrimaryAttr> {
    let mut draw = vec![target.clone()];
    draw.extend(
        pool.iter()
            .filter(|attr| *attr != target)
            .take(PRIMARY_DRAW_SIZE as usize - 1)
            .cloned(),
    );
    draw
}

/// Roll one essence while farming `zone` for `weapon`.
///
/// A slot pre-engraved to the weapon's stat always yields it; any other slot
/// rolls uniformly from the zone pool. A weapon without a secondary stat gets
/// whatever the pool rolls there.
pub fn roll_essence(
    weapon: &Weapon,
    zone: &Zone,
    config: &PreEngraveConfig,
    draw: &[PrimaryAttr],
    rng: &mut impl Rng,
) -> Option<Essence> {
    let primary = draw.choose(rng)?.clone();

    let secondary = match weapon.secondary_stat {
        Some(ref stat) if config.fixed.locks_secondary(stat) => stat.clone(),
        _ => zone.secondary_stats.choose(rng)?.clone(),
    };

    let skill = if config.fixed.locks_skill(&weapon.skill_stat) {
        weapon.skill_stat.clone()
    } else {
        zone.skill_stats.choose(rng)?.clone()
    };

    Some(Essence {
        primary,
        secondary,
        skill,
    })
}

/// Outcome of a farming simulation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub runs: u32,
    /// Essences matching every required stat
    pub perfect: u32,
    pub primary_hits: u32,
    pub secondary_hits: u32,
    pub skill_hits: u32,
}

impl SimulationReport {
    /// Observed perfect rate as a percentage
    pub fn perfect_rate(&self) -> f64 {
        if self.runs > 0 {
            self.perfect as f64 / self.runs as f64 * 100.0
        } else {
            0.0
        }
    }

    fn rate(&self, hits: u32) -> f64 {
        if self.runs > 0 {
            hits as f64 / self.runs as f64
        } else {
            0.0
        }
    }

    pub fn primary_rate(&self) -> f64 {
        self.rate(self.primary_hits)
    }

    pub fn secondary_rate(&self) -> f64 {
        self.rate(self.secondary_hits)
    }

    pub fn skill_rate(&self) -> f64 {
        self.rate(self.skill_hits)
    }
}

/// Farm `zone` `runs` times for `weapon` and tally the results.
/// `primary_pool` is the primary attribute enumeration of the catalog.
pub fn simulate_farming(
    weapon: &Weapon,
    zone: &Zone,
    config: &PreEngraveConfig,
    primary_pool: &[PrimaryAttr],
    runs: u32,
    rng: &mut impl Rng,
) -> SimulationReport {
    let draw = primary_draw(&weapon.primary_attr, primary_pool);
    let mut report = SimulationReport::default();

    for _ in 0..runs {
        let Some(essence) = roll_essence(weapon, zone, config, &draw, rng) else {
            break;
        };
        report.runs += 1;

        let primary_hit = essence.primary == weapon.primary_attr;
        let secondary_hit = weapon
            .secondary_stat
            .as_ref()
            .map_or(true, |s| *s == essence.secondary);
        let skill_hit = essence.skill == weapon.skill_stat;

        report.primary_hits += primary_hit as u32;
        report.secondary_hits += secondary_hit as u32;
        report.skill_hits += skill_hit as u32;
        if primary_hit && secondary_hit && skill_hit {
            report.perfect += 1;
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probability::calculate_drop_chance;
    use crate::types::WeaponType;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn pool() -> Vec<PrimaryAttr> {
        ["Strength", "Agility", "Intellect", "Will", "Main Attribute"]
            .iter()
            .map(|&s| s.into())
            .collect()
    }

    fn weapon() -> Weapon {
        Weapon {
            name: "Grand Vision".to_string(),
            rarity: 6,
            weapon_type: WeaponType::Sword,
            primary_attr: "Agility".into(),
            secondary_stat: Some("Attack Boost".into()),
            skill_stat: "Pursuit".into(),
        }
    }

    fn zone() -> Zone {
        Zone {
            id: "quarry".to_string(),
            name: "Quarry Ruins".to_string(),
            region: "Valley IV".to_string(),
            enemy: "Rockcrawler".to_string(),
            secondary_stats: vec!["Attack Boost".into(), "HP Boost".into(), "Critical Rate".into()],
            skill_stats: vec!["Assault".into(), "Pursuit".into()],
        }
    }

    #[test]
    fn test_primary_draw() {
        let draw = primary_draw(&"Intellect".into(), &pool());
        let names: Vec<_> = draw.iter().map(|a| a.as_str()).collect();
        assert_eq!(names, vec!["Intellect", "Strength", "Agility"]);
    }

    #[test]
    fn test_locked_slot_always_hits() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let config = PreEngraveConfig::fixing_secondary("Attack Boost");
        let report = simulate_farming(&weapon(), &zone(), &config, &pool(), 500, &mut rng);

        assert_eq!(report.runs, 500);
        assert_eq!(report.secondary_hits, 500);
        assert!(report.perfect <= report.skill_hits);
    }

    #[test]
    fn test_simulation_matches_exact_chance() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let config = PreEngraveConfig::fixing_skill("Pursuit");
        let exact = calculate_drop_chance(&weapon(), &zone(), &config);
        let report = simulate_farming(&weapon(), &zone(), &config, &pool(), 30_000, &mut rng);

        // exact: 1/3 * 1/3 * 1 = 11.1%
        assert!((report.perfect_rate() - exact.chance).abs() < 1.5);
        assert!((report.primary_rate() - exact.primary_chance).abs() < 0.02);
        assert!((report.secondary_rate() - exact.secondary_chance).abs() < 0.02);
        assert_eq!(report.skill_hits, report.runs);
    }

    #[test]
    fn test_empty_report_rates() {
        let report = SimulationReport::default();
        assert_eq!(report.perfect_rate(), 0.0);
        assert_eq!(report.primary_rate(), 0.0);
    }

    #[test]
    fn test_perfect_for_two_stat_weapon() {
        let mut w = weapon();
        w.secondary_stat = None;
        let essence = Essence {
            primary: "Agility".into(),
            secondary: "HP Boost".into(),
            skill: "Pursuit".into(),
        };
        assert!(essence.is_perfect_for(&w));
        assert!(!essence.is_perfect_for(&weapon()));
    }
}
