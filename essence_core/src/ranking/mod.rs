//! Zone ranking for a weapon selection under a pre-engrave

mod level;
mod ranker;

pub use level::{evaluate_weapon, match_level, MatchLevel, WeaponMatch};
pub use ranker::{rank_zones, ZoneRanking};
