//! Farming zone entries

use crate::types::{SecondaryStat, SkillStat};
use serde::{Deserialize, Serialize};

/// A farming location and the stat pools its essences roll from.
/// Primary attributes are not listed: every zone offers all of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    pub region: String,
    /// Encounter that drops the essences
    pub enemy: String,
    /// Secondary pool, treated as a set
    pub secondary_stats: Vec<SecondaryStat>,
    /// Skill pool, treated as a set
    pub skill_stats: Vec<SkillStat>,
}

impl Zone {
    pub fn offers_secondary(&self, stat: &SecondaryStat) -> bool {
        self.secondary_stats.contains(stat)
    }

    pub fn offers_skill(&self, stat: &SkillStat) -> bool {
        self.skill_stats.contains(stat)
    }
}
