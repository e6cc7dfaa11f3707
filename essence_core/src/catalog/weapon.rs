//! Weapon table entries

use crate::types::{PrimaryAttr, SecondaryStat, SkillStat, StatSlot, WeaponType};
use serde::{Deserialize, Serialize};

/// A weapon and the essence stats it wants
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    /// Display name, unique within a catalog
    pub name: String,
    /// Star rarity (4-6 in the shipped catalog)
    pub rarity: u8,
    #[serde(rename = "type")]
    pub weapon_type: WeaponType,
    pub primary_attr: PrimaryAttr,
    /// Some weapons have no secondary requirement
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_stat: Option<SecondaryStat>,
    pub skill_stat: SkillStat,
}

impl Weapon {
    /// Number of essence slots this weapon cares about: 3, or 2 without a secondary stat
    pub fn required_total(&self) -> u32 {
        if self.secondary_stat.is_some() {
            3
        } else {
            2
        }
    }

    pub fn has_secondary(&self) -> bool {
        self.secondary_stat.is_some()
    }

    /// Stat name the weapon requires in a slot, if any
    pub fn stat_for(&self, slot: StatSlot) -> Option<&str> {
        match slot {
            StatSlot::Primary => Some(self.primary_attr.as_str()),
            StatSlot::Secondary => self.secondary_stat.as_ref().map(|s| s.as_str()),
            StatSlot::Skill => Some(self.skill_stat.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weapon(secondary: Option<&str>) -> Weapon {
        Weapon {
            name: "Test Blade".to_string(),
            rarity: 5,
            weapon_type: WeaponType::Sword,
            primary_attr: "Strength".into(),
            secondary_stat: secondary.map(SecondaryStat::from),
            skill_stat: "Pursuit".into(),
        }
    }

    #[test]
    fn test_required_total() {
        assert_eq!(weapon(Some("Attack Boost")).required_total(), 3);
        assert_eq!(weapon(None).required_total(), 2);
    }

    #[test]
    fn test_stat_for_slot() {
        let w = weapon(None);
        assert_eq!(w.stat_for(StatSlot::Primary), Some("Strength"));
        assert_eq!(w.stat_for(StatSlot::Secondary), None);
        assert_eq!(w.stat_for(StatSlot::Skill), Some("Pursuit"));
    }

    #[test]
    fn test_parse_weapon_without_secondary() {
        let toml = r#"
name = "Plain Caster"
rarity = 4
type = "arts_unit"
primary_attr = "Will"
skill_stat = "Medicant"
"#;
        let w: Weapon = toml::from_str(toml).unwrap();
        assert_eq!(w.weapon_type, WeaponType::ArtsUnit);
        assert!(w.secondary_stat.is_none());
        assert_eq!(w.required_total(), 2);
    }
}
