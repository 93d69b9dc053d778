//! Canonical Plant Species Record
//!
//! The single shape every catalog source is normalized into before scoring.
//! Serialized field names are the canonical snake_case keys, so a serialized
//! record normalizes back to itself.

use serde::{Deserialize, Serialize};

/// Care difficulty of a species
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Med,
    Hard,
}

impl Difficulty {
    /// Parse a catalog label; unknown labels yield `None`
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "med" | "medium" | "moderate" => Some(Difficulty::Med),
            "hard" | "difficult" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Med => "med",
            Difficulty::Hard => "hard",
        }
    }
}

/// Watering need of a species
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WateringNeed {
    Low,
    #[default]
    Med,
    High,
}

impl WateringNeed {
    /// Parse a catalog label, falling back to `Med` for anything unrecognized
    pub fn parse(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "low" => WateringNeed::Low,
            "high" => WateringNeed::High,
            _ => WateringNeed::Med,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WateringNeed::Low => "low",
            WateringNeed::Med => "med",
            WateringNeed::High => "high",
        }
    }
}

/// One species in the recommendation catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantSpeciesRecord {
    /// Unique identifier, used to correlate suggestions back to the catalog
    pub slug: String,

    pub common_name: String,
    pub scientific_name: String,

    /// Acceptable daily direct-sun range (hours)
    pub min_sun_hours: Option<f64>,
    pub max_sun_hours: Option<f64>,

    /// `None` means the source carries no indoor signal
    pub indoor_ok: Option<bool>,

    pub difficulty: Option<Difficulty>,

    pub pot_size_min_liters: Option<f64>,

    #[serde(default)]
    pub watering_need: WateringNeed,

    /// Lowercased category tags (e.g. "herb", "fruiting", "shade-tolerant")
    #[serde(default)]
    pub tags: Vec<String>,

    // ========================================================================
    // Display-only care metadata
    // ========================================================================

    pub fertilization_freq_days: Option<f64>,
    pub soil_type: Option<String>,
}

impl PlantSpeciesRecord {
    /// Minimal record with every optional field unset
    pub fn new(slug: impl Into<String>, common_name: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            common_name: common_name.into(),
            scientific_name: String::new(),
            min_sun_hours: None,
            max_sun_hours: None,
            indoor_ok: None,
            difficulty: None,
            pot_size_min_liters: None,
            watering_need: WateringNeed::Med,
            tags: Vec::new(),
            fertilization_freq_days: None,
            soil_type: None,
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn has_any_tag(&self, tags: &[&str]) -> bool {
        tags.iter().any(|tag| self.has_tag(tag))
    }

    /// Sunlight range with a single missing bound filled in (0h / 12h).
    /// Returns `None` when the record carries no sunlight data at all.
    pub fn sun_range(&self) -> Option<(f64, f64)> {
        match (self.min_sun_hours, self.max_sun_hours) {
            (None, None) => None,
            (min, max) => Some((min.unwrap_or(0.0), max.unwrap_or(12.0))),
        }
    }
}
