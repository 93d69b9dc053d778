//! Catalog Normalizer
//!
//! Maps raw catalog mappings onto `PlantSpeciesRecord`. Every canonical field
//! has one ordered alias list below; aliases are resolved here once and never
//! consulted again during scoring.

use rustc_hash::FxHashSet;
use serde_json::Value;

use super::record::{Difficulty, PlantSpeciesRecord, WateringNeed};
use crate::utils::fields::{as_bool, as_f64, as_identifier, as_tag_list, as_text, resolve};

const SLUG_KEYS: &[&str] = &["slug", "id", "_id", "plant_slug", "code"];
const COMMON_NAME_KEYS: &[&str] = &["common_name", "commonName", "name", "title"];
const SCIENTIFIC_NAME_KEYS: &[&str] = &["scientific_name", "scientificName", "scientific", "binomial"];
const MIN_SUN_KEYS: &[&str] = &["min_sun_hours", "minSunHours"];
const MAX_SUN_KEYS: &[&str] = &["max_sun_hours", "maxSunHours"];
const INDOOR_KEYS: &[&str] = &["indoor_ok", "indoorOk"];
const DIFFICULTY_KEYS: &[&str] = &["difficulty"];
const POT_SIZE_KEYS: &[&str] = &["pot_size_min_liters", "potSizeMinLiters", "pot_liters", "pot_min_liters"];
const WATERING_KEYS: &[&str] = &["watering_need", "wateringNeed", "water"];
const TAG_KEYS: &[&str] = &["tags"];
const FERTILIZATION_KEYS: &[&str] = &["fertilization_freq_days", "fertilize_days", "fert_days"];
const SOIL_KEYS: &[&str] = &["soil_type", "soil"];

/// Placeholder common name for records that carry none
const UNNAMED: &str = "-";

/// Normalize one raw record.
///
/// Returns `None` only when no identifier resolves; such a record could never
/// be returned as a suggestion.
pub fn normalize_record(raw: &Value) -> Option<PlantSpeciesRecord> {
    let slug = resolve(raw, SLUG_KEYS, as_identifier)?;

    Some(PlantSpeciesRecord {
        common_name: resolve(raw, COMMON_NAME_KEYS, as_text).unwrap_or_else(|| UNNAMED.to_string()),
        scientific_name: resolve(raw, SCIENTIFIC_NAME_KEYS, as_text).unwrap_or_default(),
        min_sun_hours: resolve(raw, MIN_SUN_KEYS, as_f64),
        max_sun_hours: resolve(raw, MAX_SUN_KEYS, as_f64),
        indoor_ok: resolve(raw, INDOOR_KEYS, as_bool),
        difficulty: resolve(raw, DIFFICULTY_KEYS, |v| v.as_str().and_then(Difficulty::parse)),
        pot_size_min_liters: resolve(raw, POT_SIZE_KEYS, as_f64),
        watering_need: resolve(raw, WATERING_KEYS, |v| v.as_str().map(WateringNeed::parse))
            .unwrap_or_default(),
        tags: resolve(raw, TAG_KEYS, as_tag_list).unwrap_or_default(),
        fertilization_freq_days: resolve(raw, FERTILIZATION_KEYS, as_f64),
        soil_type: resolve(raw, SOIL_KEYS, as_text),
        slug,
    })
}

/// Normalize a whole catalog, preserving input order.
///
/// Records without an identifier are dropped, as are later records repeating
/// a slug that was already seen.
pub fn normalize_catalog(raw: &[Value]) -> Vec<PlantSpeciesRecord> {
    let mut seen: FxHashSet<String> = FxHashSet::default();
    let mut catalog = Vec::with_capacity(raw.len());

    for (idx, entry) in raw.iter().enumerate() {
        let Some(record) = normalize_record(entry) else {
            tracing::debug!("Dropping catalog entry {}: no resolvable identifier", idx);
            continue;
        };
        if !seen.insert(record.slug.clone()) {
            tracing::debug!("Dropping catalog entry {}: duplicate slug '{}'", idx, record.slug);
            continue;
        }
        catalog.push(record);
    }

    catalog
}
