//! Engine constants configuration
//!
//! The weighting values come from observed planner behavior rather than a
//! published formula, so they are tunable. Only their ordering matters:
//! priority weight above the others, and perfect > good > partial.

use super::ConfigError;
use crate::ranking::MatchLevel;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunable engine constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConstants {
    #[serde(default)]
    pub weights: RankingWeights,
}

impl Default for EngineConstants {
    fn default() -> Self {
        EngineConstants {
            weights: RankingWeights::default(),
        }
    }
}

impl EngineConstants {
    /// Load constants from a TOML file and validate them
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let constants: EngineConstants = super::load_toml(path)?;
        constants.validate()?;
        Ok(constants)
    }

    /// Parse constants from a TOML string and validate them
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let constants: EngineConstants = super::parse_toml(content)?;
        constants.validate()?;
        Ok(constants)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.weights.validate()
    }
}

/// Weights used by the pre-engrave optimizer and the zone ranker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingWeights {
    /// Weight of the priority weapon
    #[serde(default = "default_priority")]
    pub priority: u32,
    /// Weight of every other selected weapon
    #[serde(default = "default_other")]
    pub other: u32,
    #[serde(default = "default_perfect")]
    pub perfect: u32,
    #[serde(default = "default_good")]
    pub good: u32,
    #[serde(default = "default_partial")]
    pub partial: u32,
}

impl Default for RankingWeights {
    fn default() -> Self {
        RankingWeights {
            priority: default_priority(),
            other: default_other(),
            perfect: default_perfect(),
            good: default_good(),
            partial: default_partial(),
        }
    }
}

impl RankingWeights {
    /// Weight of a weapon depending on whether it is the priority weapon
    pub fn weapon_weight(&self, is_priority: bool) -> u32 {
        if is_priority {
            self.priority
        } else {
            self.other
        }
    }

    pub fn level_weight(&self, level: MatchLevel) -> u32 {
        match level {
            MatchLevel::Perfect => self.perfect,
            MatchLevel::Good => self.good,
            MatchLevel::Partial => self.partial,
        }
    }

    /// Weapon weight times level weight, saturating at `u32::MAX`
    pub fn zone_contribution(&self, is_priority: bool, level: MatchLevel) -> u32 {
        self.weapon_weight(is_priority)
            .saturating_mul(self.level_weight(level))
    }

    /// Reject weights that break the priority and level ordering
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.priority <= self.other {
            return Err(ConfigError::ValidationError(format!(
                "priority weight ({}) must exceed other weight ({})",
                self.priority, self.other
            )));
        }
        if !(self.perfect > self.good && self.good > self.partial) {
            return Err(ConfigError::ValidationError(format!(
                "level weights must satisfy perfect > good > partial (got {}/{}/{})",
                self.perfect, self.good, self.partial
            )));
        }
        Ok(())
    }
}

fn default_priority() -> u32 {
    10
}
fn default_other() -> u32 {
    1
}
fn default_perfect() -> u32 {
    3
}
fn default_good() -> u32 {
    2
}
fn default_partial() -> u32 {
    1
}
