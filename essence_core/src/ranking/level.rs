//! Match levels - how close a zone gets a weapon to a perfect essence

use crate::catalog::{Weapon, Zone};
use crate::matching::MatchDetail;
use crate::pre_engrave::PreEngraveConfig;
use crate::types::StatSlot;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Quality of a zone for one weapon.
/// Counts required stats (besides the always-available primary) that the
/// zone cannot provide: none is perfect, one is good, more is partial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchLevel {
    Partial,
    Good,
    Perfect,
}

impl MatchLevel {
    fn from_missing(missing: u32) -> Self {
        match missing {
            0 => MatchLevel::Perfect,
            1 => MatchLevel::Good,
            _ => MatchLevel::Partial,
        }
    }
}

impl fmt::Display for MatchLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchLevel::Perfect => write!(f, "Perfect"),
            MatchLevel::Good => write!(f, "Good"),
            MatchLevel::Partial => write!(f, "Partial"),
        }
    }
}

/// A weapon's obtainable stats in a zone, with its level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponMatch {
    pub weapon: String,
    /// Required stats obtainable here
    pub match_count: u32,
    /// The weapon's required total (2 or 3)
    pub total: u32,
    /// One entry per required stat
    pub details: Vec<MatchDetail>,
    pub level: MatchLevel,
}

/// Work out which of a weapon's required stats a zone can provide under a
/// pre-engrave. A stat is obtainable if it is locked by the pre-engrave or
/// present in the zone's pool.
pub fn evaluate_weapon(weapon: &Weapon, zone: &Zone, config: &PreEngraveConfig) -> WeaponMatch {
    let mut details = Vec::with_capacity(3);
    details.push(MatchDetail {
        slot: StatSlot::Primary,
        stat: weapon.primary_attr.to_string(),
        matched: true,
    });

    if let Some(ref secondary) = weapon.secondary_stat {
        details.push(MatchDetail {
            slot: StatSlot::Secondary,
            stat: secondary.to_string(),
            matched: config.fixed.locks_secondary(secondary) || zone.offers_secondary(secondary),
        });
    }

    let skill = &weapon.skill_stat;
    details.push(MatchDetail {
        slot: StatSlot::Skill,
        stat: skill.to_string(),
        matched: config.fixed.locks_skill(skill) || zone.offers_skill(skill),
    });

    let match_count = details.iter().filter(|d| d.matched).count() as u32;
    let total = weapon.required_total();

    WeaponMatch {
        weapon: weapon.name.clone(),
        match_count,
        total,
        details,
        level: MatchLevel::from_missing(total - match_count),
    }
}

pub fn match_level(weapon: &Weapon, zone: &Zone, config: &PreEngraveConfig) -> MatchLevel {
    evaluate_weapon(weapon, zone, config).level
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{SecondaryStat, WeaponType};

    fn weapon(secondary: Option<&str>, skill: &str) -> Weapon {
        Weapon {
            name: "W".to_string(),
            rarity: 6,
            weapon_type: WeaponType::Greatsword,
            primary_attr: "Strength".into(),
            secondary_stat: secondary.map(SecondaryStat::from),
            skill_stat: skill.into(),
        }
    }

    fn zone() -> Zone {
        Zone {
            id: "z".to_string(),
            name: "Zone".to_string(),
            region: "Valley IV".to_string(),
            enemy: "Enemy".to_string(),
            secondary_stats: vec!["HP Boost".into()],
            skill_stats: vec!["Pursuit".into()],
        }
    }

    #[test]
    fn test_perfect_via_lock_and_pool() {
        let w = weapon(Some("Atk Boost"), "Pursuit");
        let config = PreEngraveConfig::fixing_secondary("Atk Boost");
        let m = evaluate_weapon(&w, &zone(), &config);

        assert_eq!(m.level, MatchLevel::Perfect);
        assert_eq!((m.match_count, m.total), (3, 3));
        assert!(m.details.iter().all(|d| d.matched));
    }

    #[test]
    fn test_good_when_one_missing() {
        let w = weapon(Some("Atk Boost"), "Pursuit");
        let config = PreEngraveConfig::fixing_skill("Flow");
        let m = evaluate_weapon(&w, &zone(), &config);

        assert_eq!(m.level, MatchLevel::Good);
        assert_eq!(m.match_count, 2);
        assert!(!m.details[1].matched);
    }

    #[test]
    fn test_partial_when_only_primary() {
        let w = weapon(Some("Atk Boost"), "Infliction");
        let config = PreEngraveConfig::fixing_skill("Flow");
        assert_eq!(match_level(&w, &zone(), &config), MatchLevel::Partial);
    }

    #[test]
    fn test_two_stat_weapon_levels() {
        let config = PreEngraveConfig::fixing_secondary("Atk Boost");

        let w = weapon(None, "Pursuit");
        let m = evaluate_weapon(&w, &zone(), &config);
        assert_eq!(m.level, MatchLevel::Perfect);
        assert_eq!(m.details.len(), 2);

        // Only the skill is missing: one required stat short
        let w = weapon(None, "Infliction");
        assert_eq!(match_level(&w, &zone(), &config), MatchLevel::Good);
    }

    #[test]
    fn test_level_ordering() {
        assert!(MatchLevel::Perfect > MatchLevel::Good);
        assert!(MatchLevel::Good > MatchLevel::Partial);
    }
}
