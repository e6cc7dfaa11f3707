//! Reference catalogs - stat enumerations, weapon table and zone table
//!
//! The catalog is read-only input to the engine. It is loaded once (see
//! [`crate::config`]) and validated; the engine never mutates it.

mod weapon;
mod zone;

pub use weapon::Weapon;
pub use zone::Zone;

use crate::config::ConfigError;
use crate::probability::PRIMARY_DRAW_SIZE;
use crate::types::{PrimaryAttr, SecondaryStat, SkillStat};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::hash::Hash;

/// The full set of reference tables consumed by the engine
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    // === Enumerations ===
    pub primary_attrs: Vec<PrimaryAttr>,
    pub secondary_stats: Vec<SecondaryStat>,
    pub skill_stats: Vec<SkillStat>,

    // === Tables ===
    #[serde(default)]
    pub weapons: Vec<Weapon>,
    #[serde(default)]
    pub zones: Vec<Zone>,
}

impl Catalog {
    /// Look up a weapon by name
    pub fn weapon(&self, name: &str) -> Option<&Weapon> {
        self.weapons.iter().find(|w| w.name == name)
    }

    /// Look up a zone by id
    pub fn zone(&self, id: &str) -> Option<&Zone> {
        self.zones.iter().find(|z| z.id == id)
    }

    pub fn weapons(&self) -> &[Weapon] {
        &self.weapons
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    /// Check the data-integrity rules the engine relies on.
    ///
    /// Every weapon and zone stat must come from its enumeration, zone pools
    /// must be non-empty sets, names/ids must be unique, and there must be
    /// enough primary attributes to fill a primary draw.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.primary_attrs.len() < PRIMARY_DRAW_SIZE as usize {
            return Err(invalid(format!(
                "primary attribute enumeration needs at least {} entries",
                PRIMARY_DRAW_SIZE
            )));
        }
        if self.secondary_stats.is_empty() {
            return Err(invalid("secondary stat enumeration is empty"));
        }
        if self.skill_stats.is_empty() {
            return Err(invalid("skill stat enumeration is empty"));
        }
        check_unique(&self.primary_attrs, "primary attribute")?;
        check_unique(&self.secondary_stats, "secondary stat")?;
        check_unique(&self.skill_stats, "skill stat")?;

        let mut names = HashSet::new();
        for weapon in &self.weapons {
            if !names.insert(weapon.name.as_str()) {
                return Err(invalid(format!("duplicate weapon '{}'", weapon.name)));
            }
            if !self.primary_attrs.contains(&weapon.primary_attr) {
                return Err(invalid(format!(
                    "weapon '{}' has unknown primary attribute '{}'",
                    weapon.name, weapon.primary_attr
                )));
            }
            if let Some(ref secondary) = weapon.secondary_stat {
                if !self.secondary_stats.contains(secondary) {
                    return Err(invalid(format!(
                        "weapon '{}' has unknown secondary stat '{}'",
                        weapon.name, secondary
                    )));
                }
            }
            if !self.skill_stats.contains(&weapon.skill_stat) {
                return Err(invalid(format!(
                    "weapon '{}' has unknown skill stat '{}'",
                    weapon.name, weapon.skill_stat
                )));
            }
        }

        let mut ids = HashSet::new();
        for zone in &self.zones {
            if !ids.insert(zone.id.as_str()) {
                return Err(invalid(format!("duplicate zone id '{}'", zone.id)));
            }
            if zone.secondary_stats.is_empty() || zone.skill_stats.is_empty() {
                return Err(invalid(format!("zone '{}' has an empty stat pool", zone.id)));
            }
            check_unique(&zone.secondary_stats, "zone secondary stat")?;
            check_unique(&zone.skill_stats, "zone skill stat")?;

            if let Some(stat) = zone
                .secondary_stats
                .iter()
                .find(|s| !self.secondary_stats.contains(s))
            {
                return Err(invalid(format!(
                    "zone '{}' offers unknown secondary stat '{}'",
                    zone.id, stat
                )));
            }
            if let Some(stat) = zone.skill_stats.iter().find(|s| !self.skill_stats.contains(s)) {
                return Err(invalid(format!(
                    "zone '{}' offers unknown skill stat '{}'",
                    zone.id, stat
                )));
            }
        }

        Ok(())
    }
}

fn invalid(msg: impl Into<String>) -> ConfigError {
    ConfigError::ValidationError(msg.into())
}

fn check_unique<T>(values: &[T], what: &str) -> Result<(), ConfigError>
where
    T: Eq + Hash + std::fmt::Display,
{
    let mut seen = HashSet::new();
    for value in values {
        if !seen.insert(value) {
            return Err(invalid(format!("duplicate {} '{}'", what, value)));
        }
    }
    Ok(())
}
