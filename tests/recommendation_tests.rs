//! Recommendation Engine Tests
//!
//! End-to-end checks of normalization -> scoring -> ranking against small
//! hand-built catalogs and the bundled sample data in `data/`.

use approx::assert_relative_eq;
use plant_recommender::scoring::Factor;
use plant_recommender::{
    normalize_catalog, normalize_record, rank_suggestions, score_plant, GardenStore,
    PlantSpeciesRecord, Space, SpaceType,
};
use serde_json::json;
use std::path::Path;

fn scenario_a_catalog() -> Vec<PlantSpeciesRecord> {
    normalize_catalog(&[
        json!({
            "slug": "basil",
            "common_name": "Basil",
            "min_sun_hours": 5,
            "max_sun_hours": 8,
            "indoor_ok": true,
            "difficulty": "easy",
            "tags": ["herb"],
        }),
        json!({
            "slug": "chilli",
            "common_name": "Chilli",
            "min_sun_hours": 6,
            "max_sun_hours": 8,
            "indoor_ok": false,
            "difficulty": "med",
            "tags": ["fruiting"],
        }),
    ])
}

/// Mixed catalog touching every factor branch
fn mixed_catalog() -> Vec<PlantSpeciesRecord> {
    normalize_catalog(&[
        json!({ "slug": "a", "min_sun_hours": 0, "max_sun_hours": 4, "indoor_ok": true, "watering_need": "low", "tags": ["shade-tolerant"] }),
        json!({ "slug": "b", "min_sun_hours": 6, "max_sun_hours": 12, "indoor_ok": false, "difficulty": "hard", "pot_size_min_liters": 60, "tags": ["fruiting"] }),
        json!({ "slug": "c", "min_sun_hours": 3, "max_sun_hours": 7, "difficulty": "easy", "tags": ["herb"] }),
        json!({ "slug": "d", "indoor_ok": false, "difficulty": "hard" }),
        json!({ "slug": "e", "max_sun_hours": 5, "watering_need": "high", "pot_size_min_liters": 2 }),
        json!({ "slug": "f", "min_sun_hours": 8, "indoor_ok": true, "difficulty": "easy", "tags": ["vegetable", "outdoor"] }),
        json!({ "slug": "g" }),
    ])
}

fn space_grid() -> Vec<Space> {
    let mut spaces = vec![Space::default()];
    for space_type in [SpaceType::Balcony, SpaceType::Windowsill, SpaceType::Terrace, SpaceType::Indoor] {
        for sun in [0.0, 2.0, 3.9, 4.0, 6.0, 8.5, 12.0] {
            for area in [0.0, 0.3, 2.0, 10.0] {
                spaces.push(Space::new(sun, space_type, area));
            }
        }
    }
    spaces
}

fn sample_store() -> GardenStore {
    GardenStore::load(&Path::new(env!("CARGO_MANIFEST_DIR")).join("data"))
        .expect("bundled sample data should load")
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_scenario_a_balcony_prefers_fruiting_chilli() {
    let space = Space::new(6.0, SpaceType::Balcony, 1.8);
    let catalog = scenario_a_catalog();

    // Basil: 40*(1-0.5/6) + easy 10 + watering 5 = 51.7
    let basil = score_plant(&space, &catalog[0]);
    assert_eq!(basil.score, 51.7);
    assert_eq!(basil.points_for(Factor::SpaceAffinity), 0.0);

    // Chilli: 40*(1-1/6) + outdoor 20 + fruiting 15 + watering 5 = 73.3
    let chilli = score_plant(&space, &catalog[1]);
    assert_eq!(chilli.score, 73.3);
    assert_eq!(chilli.points_for(Factor::SpaceAffinity), 15.0);

    let ranked = rank_suggestions(Some(&space), &catalog, 12);
    let slugs: Vec<_> = ranked.iter().map(|s| s.plant_slug.as_str()).collect();
    assert_eq!(slugs, vec!["chilli", "basil"]);
    assert_eq!(ranked[0].rationale, "Excellent match: Perfect sunlight match (6h)");
    assert_eq!(ranked[1].rationale, "Good match: Perfect sunlight match (6h)");
}

#[test]
fn test_scenario_b_empty_catalog() {
    for space in space_grid() {
        assert!(rank_suggestions(Some(&space), &[], 12).is_empty());
    }
}

#[test]
fn test_scenario_c_missing_sun_range_still_scored() {
    let catalog = normalize_catalog(&[json!({
        "slug": "mystery-pepper",
        "indoor_ok": false,
        "tags": ["fruiting"],
    })]);
    let space = Space::new(6.0, SpaceType::Balcony, 1.8);

    let result = score_plant(&space, &catalog[0]);
    assert_eq!(result.points_for(Factor::Sunlight), 0.0);
    // outdoor 20 + fruiting 15 + watering 5
    assert_eq!(result.score, 40.0);

    let ranked = rank_suggestions(Some(&space), &catalog, 12);
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].rationale, "Fair match: Outdoor-optimized");
}

#[test]
fn test_scenario_d_limit_keeps_highest() {
    // p{i} sits i*0.5h off its range midpoint; built in reverse order
    let raw: Vec<_> = (0..10)
        .rev()
        .map(|i| {
            let offset = i as f64 * 0.5;
            json!({
                "slug": format!("p{}", i),
                "min_sun_hours": 6.0 - 2.0 * offset,
                "max_sun_hours": 6.0,
            })
        })
        .collect();
    let catalog = normalize_catalog(&raw);
    let space = Space::new(6.0, SpaceType::Terrace, 1.0);

    assert_eq!(rank_suggestions(Some(&space), &catalog, 12).len(), 10);

    let top: Vec<_> = rank_suggestions(Some(&space), &catalog, 3)
        .into_iter()
        .map(|s| s.plant_slug)
        .collect();
    assert_eq!(top, vec!["p0", "p1", "p2"]);
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn test_scores_bounded_and_positive_in_output() {
    let catalog = mixed_catalog();
    for space in space_grid() {
        for plant in &catalog {
            let score = score_plant(&space, plant).score;
            assert!((0.0..=100.0).contains(&score), "{} on {:?} scored {}", plant.slug, space, score);
        }
        for suggestion in rank_suggestions(Some(&space), &catalog, 12) {
            assert!(suggestion.score > 0.0);
        }
    }
}

#[test]
fn test_output_sorted_and_limited() {
    let catalog = mixed_catalog();
    for space in space_grid() {
        for limit in [0, 1, 3, 12] {
            let ranked = rank_suggestions(Some(&space), &catalog, limit);
            assert!(ranked.len() <= limit);
            assert!(ranked.len() <= catalog.len());
            for pair in ranked.windows(2) {
                assert!(pair[0].score >= pair[1].score);
            }
        }
    }
}

#[test]
fn test_deterministic_output() {
    let catalog = mixed_catalog();
    for space in space_grid() {
        let first = serde_json::to_string(&rank_suggestions(Some(&space), &catalog, 12)).unwrap();
        for _ in 0..5 {
            let again = serde_json::to_string(&rank_suggestions(Some(&space), &catalog, 12)).unwrap();
            assert_eq!(first, again);
        }
    }
}

#[test]
fn test_sunlight_midpoint_optimality() {
    let plant = normalize_record(&json!({ "slug": "x", "min_sun_hours": 4, "max_sun_hours": 8 })).unwrap();
    let at = |sun: f64| score_plant(&Space::new(sun, SpaceType::Balcony, 1.0), &plant).points_for(Factor::Sunlight);

    assert_relative_eq!(at(6.0), 40.0);
    assert!(at(6.0) >= at(4.0));
    assert!(at(6.0) >= at(8.0));
    assert_relative_eq!(at(4.0), at(8.0));
}

#[test]
fn test_renormalization_is_fixed_point() {
    for plant in mixed_catalog().into_iter().chain(sample_store().catalog().iter().cloned()) {
        let again = normalize_record(&serde_json::to_value(&plant).unwrap()).unwrap();
        assert_eq!(plant, again);
    }
}

// ============================================================================
// Sample data
// ============================================================================

#[test]
fn test_sample_store_drops_unidentified_record() {
    let store = sample_store();
    assert_eq!(store.catalog().len(), 12);
    assert_eq!(store.space_count(), 4);
    assert!(store.catalog().iter().any(|p| p.slug == "lemon-tree"));
}

#[test]
fn test_sample_balcony_ranking() {
    let store = sample_store();
    let ranked = rank_suggestions(store.space("balcony-south"), store.catalog(), 5);
    let slugs: Vec<_> = ranked.iter().map(|s| s.plant_slug.as_str()).collect();

    // cherry-tomato and strawberry tie at 76.7; catalog order decides
    assert_eq!(slugs, vec!["chilli", "rosemary", "cherry-tomato", "strawberry", "lettuce"]);
    assert_eq!(ranked[0].score, 83.3);
    assert_eq!(ranked[2].score, ranked[3].score);
}

#[test]
fn test_sample_unknown_space_is_empty() {
    let store = sample_store();
    assert!(rank_suggestions(store.space("garage"), store.catalog(), 12).is_empty());
}
