//! essence_core - Essence farming optimizer for weapon planners
//!
//! This library provides:
//! - Catalog: stat enumerations, weapon table and zone table
//! - Match engine: stat checker queries and weapon/zone fit
//! - Probability calculator: exact odds of a perfect essence
//! - Pre-engrave optimizer: which stat to lock for a weapon selection
//! - Zone ranker: best farming zones for a selection
//!
//! Everything is a pure function of its inputs; identical inputs give
//! identical (and identically serialized) outputs.

pub mod catalog;
pub mod config;
pub mod matching;
pub mod planner;
pub mod pre_engrave;
pub mod prelude;
pub mod probability;
pub mod ranking;
pub mod types;

// Re-export core types for convenience
pub use catalog::{Catalog, Weapon, Zone};
pub use config::{default_catalog, ConfigError, EngineConstants, RankingWeights};
pub use matching::{
    best_zones, max_zone_fit, score_query, score_zone_fit, MatchDetail, MatchResult, QueryMatches,
    StatQuery, ZoneFit,
};
pub use planner::{EssencePlanner, FarmingPlan, SelectionError, WeaponSelection};
pub use pre_engrave::{
    compute_optimal_pre_engrave, evaluate_candidates, FixedStat, PreEngraveCandidate,
    PreEngraveConfig,
};
pub use probability::{
    calculate_drop_chance, simulate_farming, zone_chances, DropChanceBreakdown, Essence,
    SimulationReport, PRIMARY_DRAW_SIZE,
};
pub use ranking::{match_level, rank_zones, MatchLevel, WeaponMatch, ZoneRanking};
pub use types::{FixedStatType, PrimaryAttr, SecondaryStat, SkillStat, StatSlot, WeaponType};
