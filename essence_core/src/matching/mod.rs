//! Match engine - stat queries against weapons, and weapon fit against zones

mod query;
mod zone_fit;

pub use query::{score_query, MatchDetail, MatchResult, QueryMatches, StatQuery};
pub use zone_fit::{best_zones, max_zone_fit, score_zone_fit, ZoneFit};
