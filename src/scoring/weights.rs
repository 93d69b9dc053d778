//! Canonical weight table
//!
//! One table for every consumer of the suitability score (API responses,
//! client previews, batch jobs). Points are additive; penalties are negative.

/// Full credit for a space sitting at the midpoint of the plant's sun range
pub const SUNLIGHT_MAX: f64 = 40.0;
/// Hours of deviation from the midpoint at which sunlight credit reaches zero
pub const SUNLIGHT_FALLOFF_HOURS: f64 = 6.0;

pub const INDOOR_MATCH: f64 = 20.0;
pub const INDOOR_MISMATCH_PENALTY: f64 = -15.0;

pub const SPACE_AFFINITY: f64 = 15.0;

pub const DIFFICULTY_EASY: f64 = 10.0;
pub const DIFFICULTY_HARD_PENALTY: f64 = -5.0;

pub const POT_FITS: f64 = 10.0;
pub const POT_TOO_LARGE_PENALTY: f64 = -5.0;
/// Footprint (m²) approximated per litre of minimum pot volume
pub const POT_FOOTPRINT_PER_LITER: f64 = 0.1;

pub const WATERING_MATCH: f64 = 5.0;
/// Sun hours at or above which a space counts as bright
pub const BRIGHT_SUN_HOURS: f64 = 6.0;
/// Sun hours below which a space counts as dim
pub const DIM_SUN_HOURS: f64 = 4.0;

pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 100.0;

/// Tags that favor balconies and terraces
pub const OUTDOOR_TAGS: &[&str] = &["fruiting", "vegetable", "outdoor"];
/// Tags that favor windowsills and indoor rooms
pub const INDOOR_TAGS: &[&str] = &["herb", "shade-tolerant"];
