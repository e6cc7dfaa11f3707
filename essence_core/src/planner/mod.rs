//! Planner facade - ties the engine components to a catalog and constants
//!
//! Typical flow:
//! 1. Resolve the user's [`WeaponSelection`] against the catalog
//! 2. Compute the optimal pre-engrave for the selection
//! 3. Rank zones under that pre-engrave

mod selection;

pub use selection::{ResolvedSelection, SelectionError, WeaponSelection};

use crate::catalog::Catalog;
use crate::config::{default_catalog, ConfigError, EngineConstants};
use crate::matching::{QueryMatches, StatQuery};
use crate::pre_engrave::{
    compute_optimal_pre_engrave, evaluate_candidates, PreEngraveCandidate, PreEngraveConfig,
};
use crate::probability::{zone_chances, DropChanceBreakdown};
use crate::ranking::{rank_zones, ZoneRanking};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Full recommendation for a weapon selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FarmingPlan {
    pub priority: String,
    pub config: PreEngraveConfig,
    /// Candidate locks that were considered, secondary first
    pub candidates: Vec<PreEngraveCandidate>,
    /// Viable zones, best first. Empty when no zone works for the priority weapon.
    pub rankings: Vec<ZoneRanking>,
}

impl FarmingPlan {
    pub fn is_viable(&self) -> bool {
        !self.rankings.is_empty()
    }

    pub fn best_zone(&self) -> Option<&ZoneRanking> {
        self.rankings.first()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Entry point for hosts: owns a catalog and the weighting constants
#[derive(Debug, Clone)]
pub struct EssencePlanner {
    catalog: Catalog,
    constants: EngineConstants,
}

impl EssencePlanner {
    pub fn new(catalog: Catalog, constants: EngineConstants) -> Self {
        EssencePlanner { catalog, constants }
    }

    /// Planner over the compiled-in catalog and default constants
    pub fn with_defaults() -> Result<Self, ConfigError> {
        Ok(Self::new(default_catalog()?, EngineConstants::default()))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn constants(&self) -> &EngineConstants {
        &self.constants
    }

    /// Stat checker: which weapons match a partial query
    pub fn check_stats(&self, query: &StatQuery) -> QueryMatches {
        QueryMatches::run(query, self.catalog.weapons())
    }

    /// Pre-engrave and zone ranking for a selection
    pub fn plan(&self, selection: &WeaponSelection) -> Result<FarmingPlan, SelectionError> {
        let resolved = selection.resolve(&self.catalog)?;
        let weapons = resolved.weapons_owned();
        let priority = resolved.priority;
        let weights = &self.constants.weights;

        let candidates = evaluate_candidates(priority, &weapons, weights);
        let config = compute_optimal_pre_engrave(priority, &weapons, weights);
        let rankings = rank_zones(priority, &weapons, self.catalog.zones(), &config, weights);

        Ok(FarmingPlan {
            priority: priority.name.clone(),
            config,
            candidates,
            rankings,
        })
    }

    /// Per-weapon odds in one zone, using the selection's optimal pre-engrave.
    /// Returns `None` for an unknown zone id.
    pub fn zone_chances(
        &self,
        zone_id: &str,
        selection: &WeaponSelection,
    ) -> Result<Option<IndexMap<String, DropChanceBreakdown>>, SelectionError> {
        let resolved = selection.resolve(&self.catalog)?;
        let weapons = resolved.weapons_owned();
        let config =
            compute_optimal_pre_engrave(resolved.priority, &weapons, &self.constants.weights);

        Ok(self
            .catalog
            .zone(zone_id)
            .map(|zone| zone_chances(zone, &weapons, &config)))
    }
}
