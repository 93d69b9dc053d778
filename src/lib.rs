//! Plant Recommender
//!
//! Ranks plant species by how well they suit a growing space (sunlight,
//! space type, area) and explains each pick in one line.
//!
//! Module layout:
//! - `catalog/`: Canonical species records and the alias-based normalizer
//! - `space`: Growing space model
//! - `scoring/`: Weight table, factors, rationale text
//! - `ranking`: Catalog-wide ranking and batch ranking
//! - `fallback`: External provider output handling and local fallback
//! - `store`: In-memory catalog + spaces loaded from JSON
//! - `api_server` (feature `api`): Axum REST surface
//!
//! The engine itself is pure: same space, catalog and limit in, same
//! suggestions out, no I/O.

pub mod utils;
pub mod catalog;
pub mod space;
pub mod scoring;
pub mod ranking;
pub mod fallback;
pub mod error;
pub mod store;
pub mod config;

#[cfg(feature = "api")]
pub mod provider;
#[cfg(feature = "api")]
pub mod api_server;

// Re-export commonly used types
pub use catalog::{normalize_catalog, normalize_record, Difficulty, PlantSpeciesRecord, WateringNeed};
pub use space::{Space, SpaceType};
pub use scoring::{score_plant, MatchTier, PlantScore};
pub use ranking::{rank_for_spaces, rank_suggestions, Suggestion, DEFAULT_LIMIT};
pub use fallback::{recommend_with_fallback, ProviderSuggestion, Recommendation, SuggestionSource};
pub use error::{ProviderError, StoreError};
pub use store::GardenStore;

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};
