//! Prelude module for convenient imports
//!
//! ```rust
//! use essence_core::prelude::*;
//! ```

// Data
pub use crate::catalog::{Catalog, Weapon, Zone};
pub use crate::types::{FixedStatType, PrimaryAttr, SecondaryStat, SkillStat, StatSlot};

// Engine
pub use crate::matching::{score_query, score_zone_fit, MatchResult, QueryMatches, StatQuery};
pub use crate::pre_engrave::{compute_optimal_pre_engrave, PreEngraveConfig};
pub use crate::probability::{calculate_drop_chance, DropChanceBreakdown};
pub use crate::ranking::{rank_zones, MatchLevel, ZoneRanking};

// Config
pub use crate::config::{default_catalog, EngineConstants, RankingWeights};

// Planner
pub use crate::planner::{EssencePlanner, FarmingPlan, WeaponSelection};
