//! Ranking & Selection
//!
//! Scores a whole catalog against one space and keeps the best candidates.
//! Scoring is spread across the Rayon pool; `collect` preserves catalog order
//! and the sort is stable, so equal scores keep their catalog order and the
//! output is identical from run to run.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::catalog::PlantSpeciesRecord;
use crate::scoring::score_plant;
use crate::space::Space;

/// Default number of suggestions returned
pub const DEFAULT_LIMIT: usize = 12;

/// Provenance tag for suggestions computed by the local engine
pub const FALLBACK_TAG: &str = "fallback";

/// One ranked recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub plant_slug: String,
    /// 0-100, one decimal
    pub score: f64,
    pub rationale: String,
    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub common_name: String,
    #[serde(default)]
    pub scientific_name: String,
    /// Every factor reason in priority order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reasons: Vec<String>,
}

/// Stable sort, highest score first
pub(crate) fn sort_descending(suggestions: &mut [Suggestion]) {
    suggestions.sort_by(|a, b| b.score.total_cmp(&a.score));
}

/// Rank a catalog for one space.
///
/// Non-positive scores are dropped. A missing space yields no suggestions.
pub fn rank_suggestions(
    space: Option<&Space>,
    catalog: &[PlantSpeciesRecord],
    limit: usize,
) -> Vec<Suggestion> {
    let Some(space) = space else {
        return Vec::new();
    };
    if catalog.is_empty() || limit == 0 {
        return Vec::new();
    }

    let mut ranked: Vec<Suggestion> = catalog
        .par_iter()
        .map(|plant| (plant, score_plant(space, plant)))
        .filter(|(_, result)| result.score > 0.0)
        .map(|(plant, result)| Suggestion {
            plant_slug: plant.slug.clone(),
            score: result.score,
            rationale: result.rationale.clone(),
            tags: vec![FALLBACK_TAG.to_string()],
            common_name: plant.common_name.clone(),
            scientific_name: plant.scientific_name.clone(),
            reasons: result.reasons(),
        })
        .collect();

    sort_descending(&mut ranked);
    ranked.truncate(limit);
    ranked
}

/// Rank the same catalog for several spaces at once, one result per space
pub fn rank_for_spaces(
    spaces: &[Space],
    catalog: &[PlantSpeciesRecord],
    limit: usize,
) -> Vec<Vec<Suggestion>> {
    spaces
        .par_iter()
        .map(|space| rank_suggestions(Some(space), catalog, limit))
        .collect()
}
