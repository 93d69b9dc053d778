//! Scoring factors
//!
//! Each factor inspects one aspect of a (space, plant) pair and either stays
//! silent (no signal on one side) or yields points plus a short reason.
//! Factors are independent: none depends on another having fired.

use serde::Serialize;

use super::weights::*;
use crate::catalog::{Difficulty, PlantSpeciesRecord, WateringNeed};
use crate::space::{Space, SpaceType};

/// Scoring factors in rationale priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Factor {
    Sunlight,
    IndoorOutdoor,
    SpaceAffinity,
    Difficulty,
    PotFit,
    Watering,
}

impl Factor {
    pub const ALL: [Factor; 6] = [
        Factor::Sunlight,
        Factor::IndoorOutdoor,
        Factor::SpaceAffinity,
        Factor::Difficulty,
        Factor::PotFit,
        Factor::Watering,
    ];

    pub fn display_text(&self) -> &'static str {
        match self {
            Factor::Sunlight => "Sunlight",
            Factor::IndoorOutdoor => "Indoor/outdoor",
            Factor::SpaceAffinity => "Space type",
            Factor::Difficulty => "Difficulty",
            Factor::PotFit => "Pot size",
            Factor::Watering => "Watering",
        }
    }

    /// Evaluate this factor for one pair
    pub fn evaluate(&self, space: &Space, plant: &PlantSpeciesRecord) -> Option<Contribution> {
        match self {
            Factor::Sunlight => sunlight_fit(space, plant),
            Factor::IndoorOutdoor => indoor_outdoor_fit(space, plant),
            Factor::SpaceAffinity => space_affinity(space, plant),
            Factor::Difficulty => difficulty_bonus(plant),
            Factor::PotFit => pot_fit(space, plant),
            Factor::Watering => watering_fit(space, plant),
        }
    }
}

/// Points a factor awarded, with the reason shown to the user
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Contribution {
    pub factor: Factor,
    pub points: f64,
    pub reason: String,
}

impl Contribution {
    fn new(factor: Factor, points: f64, reason: impl Into<String>) -> Self {
        Self { factor, points, reason: reason.into() }
    }

    pub fn is_positive(&self) -> bool {
        self.points > 0.0
    }
}

/// Sunlight fit: full credit at the midpoint of the range, falling linearly
/// to zero at six hours off. Outside the range the factor records a mismatch
/// reason but awards no points.
pub fn sunlight_fit(space: &Space, plant: &PlantSpeciesRecord) -> Option<Contribution> {
    let sun = space.sunlight_hours?;
    let (min, max) = plant.sun_range()?;

    if sun >= min && sun <= max {
        let ideal = (min + max) / 2.0;
        let diff = (sun - ideal).abs();
        let points = (SUNLIGHT_MAX * (1.0 - diff / SUNLIGHT_FALLOFF_HOURS)).max(0.0);
        Some(Contribution::new(
            Factor::Sunlight,
            points,
            format!("Perfect sunlight match ({}h)", sun),
        ))
    } else {
        Some(Contribution::new(
            Factor::Sunlight,
            0.0,
            format!("Sunlight mismatch (needs {}-{}h, space has {}h)", min, max, sun),
        ))
    }
}

/// Indoor/outdoor compatibility
pub fn indoor_outdoor_fit(space: &Space, plant: &PlantSpeciesRecord) -> Option<Contribution> {
    let indoor_ok = plant.indoor_ok?;
    let is_indoor = space.space_type?.is_indoor();

    match (is_indoor, indoor_ok) {
        (true, true) => Some(Contribution::new(Factor::IndoorOutdoor, INDOOR_MATCH, "Indoor-friendly")),
        (false, false) => Some(Contribution::new(Factor::IndoorOutdoor, INDOOR_MATCH, "Outdoor-optimized")),
        (true, false) => Some(Contribution::new(
            Factor::IndoorOutdoor,
            INDOOR_MISMATCH_PENALTY,
            "Not suitable for indoor",
        )),
        // Indoor-capable plant in an outdoor space: neutral
        (false, true) => None,
    }
}

/// Space-type / tag affinity
pub fn space_affinity(space: &Space, plant: &PlantSpeciesRecord) -> Option<Contribution> {
    match space.space_type? {
        SpaceType::Balcony | SpaceType::Terrace if plant.has_any_tag(OUTDOOR_TAGS) => Some(
            Contribution::new(Factor::SpaceAffinity, SPACE_AFFINITY, "Great for outdoor growing"),
        ),
        SpaceType::Windowsill if plant.has_any_tag(INDOOR_TAGS) || plant.indoor_ok == Some(true) => Some(
            Contribution::new(Factor::SpaceAffinity, SPACE_AFFINITY, "Perfect for windowsill"),
        ),
        SpaceType::Indoor if plant.has_any_tag(INDOOR_TAGS) || plant.indoor_ok == Some(true) => Some(
            Contribution::new(Factor::SpaceAffinity, SPACE_AFFINITY, "Thrives indoors"),
        ),
        _ => None,
    }
}

/// Care difficulty bonus
pub fn difficulty_bonus(plant: &PlantSpeciesRecord) -> Option<Contribution> {
    match plant.difficulty? {
        Difficulty::Easy => Some(Contribution::new(Factor::Difficulty, DIFFICULTY_EASY, "Easy to care for")),
        Difficulty::Hard => Some(Contribution::new(
            Factor::Difficulty,
            DIFFICULTY_HARD_PENALTY,
            "Requires experience",
        )),
        Difficulty::Med => None,
    }
}

/// Minimum pot footprint against usable area
pub fn pot_fit(space: &Space, plant: &PlantSpeciesRecord) -> Option<Contribution> {
    let liters = plant.pot_size_min_liters.filter(|l| *l > 0.0)?;
    let area = space.area_sq_m.filter(|a| *a > 0.0)?;

    if area >= liters * POT_FOOTPRINT_PER_LITER {
        Some(Contribution::new(Factor::PotFit, POT_FITS, "Fits your space"))
    } else {
        Some(Contribution::new(Factor::PotFit, POT_TOO_LARGE_PENALTY, "May need larger space"))
    }
}

/// Watering need against light level (tie-break weight)
pub fn watering_fit(space: &Space, plant: &PlantSpeciesRecord) -> Option<Contribution> {
    let sun = space.sunlight_hours?;

    match plant.watering_need {
        WateringNeed::Med | WateringNeed::High if sun >= BRIGHT_SUN_HOURS => Some(Contribution::new(
            Factor::Watering,
            WATERING_MATCH,
            "Water needs match sunlight",
        )),
        WateringNeed::Low if sun < DIM_SUN_HOURS => Some(Contribution::new(
            Factor::Watering,
            WATERING_MATCH,
            "Low water need for low light",
        )),
        _ => None,
    }
}
