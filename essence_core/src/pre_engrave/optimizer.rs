//! Pre-engrave optimizer
//!
//! Only the priority weapon's own secondary and skill stats are ever
//! considered, so the chosen lock always serves the priority weapon.
//! Each candidate is scored by the summed weight of the selected weapons
//! sharing that stat; the priority weapon weighs more than the rest.
//! On a tie the secondary candidate wins.

use super::{FixedStat, PreEngraveConfig};
use crate::catalog::Weapon;
use crate::config::RankingWeights;
use crate::types::PrimaryAttr;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A candidate lock and its weighted coverage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreEngraveCandidate {
    pub fixed: FixedStat,
    pub score: u32,
}

/// Score the priority weapon's candidate locks: secondary first (if it has
/// one), then skill.
pub fn evaluate_candidates(
    priority: &Weapon,
    weapons: &[Weapon],
    weights: &RankingWeights,
) -> Vec<PreEngraveCandidate> {
    let weight_of = |w: &Weapon| weights.weapon_weight(w.name == priority.name);
    let mut candidates = Vec::with_capacity(2);

    if let Some(ref secondary) = priority.secondary_stat {
        let score = weapons
            .iter()
            .filter(|w| w.secondary_stat.as_ref() == Some(secondary))
            .map(weight_of)
            .fold(0u32, u32::saturating_add);
        candidates.push(PreEngraveCandidate {
            fixed: FixedStat::Secondary(secondary.clone()),
            score,
        });
    }

    let skill = &priority.skill_stat;
    let score = weapons
        .iter()
        .filter(|w| &w.skill_stat == skill)
        .map(weight_of)
        .fold(0u32, u32::saturating_add);
    candidates.push(PreEngraveCandidate {
        fixed: FixedStat::Skill(skill.clone()),
        score,
    });

    candidates
}

/// Choose the stat to pre-engrave for a weapon selection
pub fn compute_optimal_pre_engrave(
    priority: &Weapon,
    weapons: &[Weapon],
    weights: &RankingWeights,
) -> PreEngraveConfig {
    let candidates = evaluate_candidates(priority, weapons, weights);

    // Strict comparison keeps the earlier (secondary) candidate on ties
    let fixed = candidates
        .into_iter()
        .reduce(|best, candidate| {
            if candidate.score > best.score {
                candidate
            } else {
                best
            }
        })
        .map(|candidate| candidate.fixed)
        .unwrap_or_else(|| FixedStat::Skill(priority.skill_stat.clone()));

    debug!(
        priority = %priority.name,
        fixed_stat = fixed.name(),
        fixed_stat_type = ?fixed.stat_type(),
        "chose pre-engrave"
    );

    PreEngraveConfig::new(distinct_primary_attrs(weapons), fixed)
}

fn distinct_primary_attrs(weapons: &[Weapon]) -> Vec<PrimaryAttr> {
    let mut attrs: Vec<PrimaryAttr> = Vec::new();
    for weapon in weapons {
        if !attrs.contains(&weapon.primary_attr) {
            attrs.push(weapon.primary_attr.clone());
        }
    }
    attrs
}
