//! Ad-hoc stat checker
//!
//! A query supplies up to three criteria (primary, secondary, skill). Each
//! weapon is scored by how many of the supplied criteria it shares. The
//! total is the number of supplied criteria, not the weapon's own
//! requirement count.

use crate::catalog::Weapon;
use crate::types::{PrimaryAttr, SecondaryStat, SkillStat, StatSlot};
use serde::{Deserialize, Serialize};

/// Partial stat query; every criterion is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatQuery {
    #[serde(default)]
    pub primary: Option<PrimaryAttr>,
    #[serde(default)]
    pub secondary: Option<SecondaryStat>,
    #[serde(default)]
    pub skill: Option<SkillStat>,
}

impl StatQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_primary(mut self, primary: impl Into<PrimaryAttr>) -> Self {
        self.primary = Some(primary.into());
        self
    }

    pub fn with_secondary(mut self, secondary: impl Into<SecondaryStat>) -> Self {
        self.secondary = Some(secondary.into());
        self
    }

    pub fn with_skill(mut self, skill: impl Into<SkillStat>) -> Self {
        self.skill = Some(skill.into());
        self
    }

    /// True when no criterion is supplied
    pub fn is_empty(&self) -> bool {
        self.primary.is_none() && self.secondary.is_none() && self.skill.is_none()
    }

    /// Supplied criteria in slot order
    pub fn criteria(&self) -> Vec<(StatSlot, &str)> {
        let mut criteria = Vec::with_capacity(3);
        if let Some(ref p) = self.primary {
            criteria.push((StatSlot::Primary, p.as_str()));
        }
        if let Some(ref s) = self.secondary {
            criteria.push((StatSlot::Secondary, s.as_str()));
        }
        if let Some(ref s) = self.skill {
            criteria.push((StatSlot::Skill, s.as_str()));
        }
        criteria
    }
}

/// Outcome of one supplied criterion against one weapon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchDetail {
    pub slot: StatSlot,
    /// The queried stat
    pub stat: String,
    pub matched: bool,
}

/// How well a weapon matches a query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub weapon: Weapon,
    pub match_count: u32,
    /// Number of supplied criteria
    pub total: u32,
    pub details: Vec<MatchDetail>,
}

impl MatchResult {
    pub fn is_perfect(&self) -> bool {
        self.match_count == self.total
    }
}

/// Score every weapon against a query.
///
/// Weapons sharing none of the supplied criteria are left out, and an empty
/// query matches nothing. Results keep catalog order.
pub fn score_query(query: &StatQuery, weapons: &[Weapon]) -> Vec<MatchResult> {
    let criteria = query.criteria();
    if criteria.is_empty() {
        return Vec::new();
    }
    let total = criteria.len() as u32;

    weapons
        .iter()
        .filter_map(|weapon| {
            let details: Vec<MatchDetail> = criteria
                .iter()
                .map(|&(slot, stat)| MatchDetail {
                    slot,
                    stat: stat.to_string(),
                    matched: weapon.stat_for(slot) == Some(stat),
                })
                .collect();

            let match_count = details.iter().filter(|d| d.matched).count() as u32;
            if match_count == 0 {
                return None;
            }

            Some(MatchResult {
                weapon: weapon.clone(),
                match_count,
                total,
                details,
            })
        })
        .collect()
}

/// Query results split into perfect and partial matches
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryMatches {
    pub perfect: Vec<MatchResult>,
    pub partial: Vec<MatchResult>,
}

impl QueryMatches {
    /// Run a query and partition the results
    pub fn run(query: &StatQuery, weapons: &[Weapon]) -> Self {
        Self::from_results(score_query(query, weapons))
    }

    pub fn from_results(results: Vec<MatchResult>) -> Self {
        let (perfect, partial) = results.into_iter().partition(MatchResult::is_perfect);
        QueryMatches { perfect, partial }
    }

    pub fn is_empty(&self) -> bool {
        self.perfect.is_empty() && self.partial.is_empty()
    }
}
