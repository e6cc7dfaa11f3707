//! Weapon fit against a zone's stat pools (no pre-engrave)

use crate::catalog::{Weapon, Zone};
use serde::{Deserialize, Serialize};

/// Number of a weapon's required stats a zone can roll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneFit {
    pub matched: u32,
    /// The weapon's required total (2 or 3)
    pub total: u32,
}

impl ZoneFit {
    pub fn is_full(&self) -> bool {
        self.matched == self.total
    }
}

/// Score how many of a weapon's stats a zone can drop.
/// The primary attribute always counts since every zone offers all of them.
pub fn score_zone_fit(weapon: &Weapon, zone: &Zone) -> ZoneFit {
    let mut matched = 1;
    if let Some(ref secondary) = weapon.secondary_stat {
        if zone.offers_secondary(secondary) {
            matched += 1;
        }
    }
    if zone.offers_skill(&weapon.skill_stat) {
        matched += 1;
    }

    ZoneFit {
        matched,
        total: weapon.required_total(),
    }
}

/// Fit of every zone for a weapon, best first. Equal fits keep catalog order.
pub fn best_zones<'a>(weapon: &Weapon, zones: &'a [Zone]) -> Vec<(&'a Zone, ZoneFit)> {
    let mut fits: Vec<(&Zone, ZoneFit)> = zones
        .iter()
        .map(|zone| (zone, score_zone_fit(weapon, zone)))
        .collect();
    fits.sort_by(|a, b| b.1.matched.cmp(&a.1.matched));
    fits
}

/// Best achievable fit for a weapon across all zones, taken from the first
/// best zone in catalog order
pub fn max_zone_fit(weapon: &Weapon, zones: &[Zone]) -> Option<ZoneFit> {
    best_zones(weapon, zones).into_iter().next().map(|(_, fit)| fit)
}
