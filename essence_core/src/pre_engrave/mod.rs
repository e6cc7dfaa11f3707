//! Pre-engrave - locking one essence slot to a chosen stat
//!
//! A pre-engrave guarantees one secondary or skill stat on every essence
//! farmed afterwards. The primary slot is never lockable.

mod optimizer;

pub use optimizer::{compute_optimal_pre_engrave, evaluate_candidates, PreEngraveCandidate};

use crate::types::{FixedStatType, PrimaryAttr, SecondaryStat, SkillStat};
use serde::{Deserialize, Serialize};

/// The stat a pre-engrave locks, tagged by slot
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "fixed_stat_type", content = "fixed_stat", rename_all = "snake_case")]
pub enum FixedStat {
    Secondary(SecondaryStat),
    Skill(SkillStat),
}

impl FixedStat {
    pub fn stat_type(&self) -> FixedStatType {
        match self {
            FixedStat::Secondary(_) => FixedStatType::Secondary,
            FixedStat::Skill(_) => FixedStatType::Skill,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            FixedStat::Secondary(s) => s.as_str(),
            FixedStat::Skill(s) => s.as_str(),
        }
    }

    /// True if this locks the given secondary stat
    pub fn locks_secondary(&self, stat: &SecondaryStat) -> bool {
        matches!(self, FixedStat::Secondary(s) if s == stat)
    }

    /// True if this locks the given skill stat
    pub fn locks_skill(&self, stat: &SkillStat) -> bool {
        matches!(self, FixedStat::Skill(s) if s == stat)
    }
}

/// A chosen pre-engrave setup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreEngraveConfig {
    /// Distinct primary attributes across the selection, first-seen order.
    /// Informational only: the primary roll is never fixed.
    pub primary_attrs: Vec<PrimaryAttr>,
    #[serde(flatten)]
    pub fixed: FixedStat,
}

impl PreEngraveConfig {
    pub fn new(primary_attrs: Vec<PrimaryAttr>, fixed: FixedStat) -> Self {
        PreEngraveConfig {
            primary_attrs,
            fixed,
        }
    }

    /// Config locking a secondary stat, with no primary attribute list
    pub fn fixing_secondary(stat: impl Into<SecondaryStat>) -> Self {
        Self::new(Vec::new(), FixedStat::Secondary(stat.into()))
    }

    /// Config locking a skill stat, with no primary attribute list
    pub fn fixing_skill(stat: impl Into<SkillStat>) -> Self {
        Self::new(Vec::new(), FixedStat::Skill(stat.into()))
    }

    pub fn fixed_stat(&self) -> &str {
        self.fixed.name()
    }

    pub fn fixed_stat_type(&self) -> FixedStatType {
        self.fixed.stat_type()
    }
}
