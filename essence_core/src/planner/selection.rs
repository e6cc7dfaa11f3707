//! User weapon selections
//!
//! The priority weapon is named explicitly instead of being inferred from
//! list position, so reordering or removing weapons cannot change it.

use crate::catalog::{Catalog, Weapon};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Selection resolution error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("No weapons selected")]
    EmptySelection,
    #[error("Unknown weapon: {0}")]
    UnknownWeapon(String),
}

/// Weapons the user wants essences for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponSelection {
    /// Name of the weapon whose perfect odds are guaranteed
    pub priority: String,
    /// All selected weapon names, in display order
    #[serde(default)]
    pub weapons: Vec<String>,
}

impl WeaponSelection {
    pub fn new(priority: impl Into<String>, weapons: Vec<String>) -> Self {
        WeaponSelection {
            priority: priority.into(),
            weapons,
        }
    }

    /// Build a selection whose priority is the first listed weapon
    pub fn from_ordered(weapons: Vec<String>) -> Result<Self, SelectionError> {
        let priority = weapons.first().cloned().ok_or(SelectionError::EmptySelection)?;
        Ok(Self::new(priority, weapons))
    }

    /// Look the selection up in a catalog.
    ///
    /// Duplicates are dropped (first occurrence wins) and the priority weapon
    /// is put first if the list does not already contain it.
    pub fn resolve<'a>(&self, catalog: &'a Catalog) -> Result<ResolvedSelection<'a>, SelectionError> {
        if self.priority.is_empty() {
            return Err(SelectionError::EmptySelection);
        }
        let priority = lookup(catalog, &self.priority)?;

        let mut weapons: Vec<&Weapon> = Vec::with_capacity(self.weapons.len() + 1);
        for name in &self.weapons {
            let weapon = lookup(catalog, name)?;
            if weapons.iter().any(|w| w.name == weapon.name) {
                warn!(weapon = %name, "duplicate weapon in selection ignored");
                continue;
            }
            weapons.push(weapon);
        }
        if !weapons.iter().any(|w| w.name == priority.name) {
            weapons.insert(0, priority);
        }

        Ok(ResolvedSelection { priority, weapons })
    }
}

fn lookup<'a>(catalog: &'a Catalog, name: &str) -> Result<&'a Weapon, SelectionError> {
    catalog
        .weapon(name)
        .ok_or_else(|| SelectionError::UnknownWeapon(name.to_string()))
}

/// A selection checked against the catalog
#[derive(Debug, Clone)]
pub struct ResolvedSelection<'a> {
    pub priority: &'a Weapon,
    /// Distinct weapons, always including the priority weapon
    pub weapons: Vec<&'a Weapon>,
}

impl ResolvedSelection<'_> {
    /// Owned copies of the selected weapons, for the engine functions
    pub fn weapons_owned(&self) -> Vec<Weapon> {
        self.weapons.iter().map(|&w| w.clone()).collect()
    }
}
