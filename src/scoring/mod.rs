//! Plant Suitability Scoring
//!
//! Weighted additive model scoring how well one plant species fits one
//! growing space. Six independent factors contribute points:
//!
//! | factor          | points      |
//! |-----------------|-------------|
//! | sunlight fit    | 0 to 40     |
//! | indoor/outdoor  | -15 or +20  |
//! | space affinity  | +15         |
//! | difficulty      | -5 or +10   |
//! | pot vs area     | -5 or +10   |
//! | watering/light  | +5          |
//!
//! A factor with no signal on either side contributes nothing. The sum is
//! clamped to 0-100 and rounded to one decimal.
//!
//! ## Architecture
//! - `weights.rs` - The canonical weight table
//! - `factors.rs` - Per-factor evaluation
//! - `rationale.rs` - Match tiers and rationale text

pub mod weights;
pub mod factors;
pub mod rationale;

pub use factors::{Contribution, Factor};
pub use rationale::{build_rationale, MatchTier};

use smallvec::SmallVec;

use crate::catalog::PlantSpeciesRecord;
use crate::space::Space;
use weights::{MAX_SCORE, MIN_SCORE};

/// Score and explanation for one (space, plant) pair
#[derive(Debug, Clone)]
pub struct PlantScore {
    /// Final score, 0-100, one decimal
    pub score: f64,
    /// Contributions in factor priority order
    pub contributions: SmallVec<[Contribution; 6]>,
    pub rationale: String,
}

impl PlantScore {
    pub fn tier(&self) -> MatchTier {
        MatchTier::from_score(self.score)
    }

    pub fn reasons(&self) -> Vec<String> {
        self.contributions.iter().map(|c| c.reason.clone()).collect()
    }

    /// Sum of the points a single factor awarded (0 if it stayed silent)
    pub fn points_for(&self, factor: Factor) -> f64 {
        self.contributions
            .iter()
            .filter(|c| c.factor == factor)
            .map(|c| c.points)
            .sum()
    }
}

/// Clamp to the score range and round to one decimal place
pub fn finalize_score(raw: f64) -> f64 {
    let clamped = raw.clamp(MIN_SCORE, MAX_SCORE);
    (clamped * 10.0).round() / 10.0
}

/// Score one plant against one space
pub fn score_plant(space: &Space, plant: &PlantSpeciesRecord) -> PlantScore {
    let contributions: SmallVec<[Contribution; 6]> = Factor::ALL
        .iter()
        .filter_map(|factor| factor.evaluate(space, plant))
        .collect();

    let raw: f64 = contributions.iter().map(|c| c.points).sum();
    let score = finalize_score(raw);
    let rationale = build_rationale(score, &contributions);

    PlantScore {
        score,
        contributions,
        rationale,
    }
}
