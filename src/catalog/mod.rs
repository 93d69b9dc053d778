//! Plant Catalog
//!
//! Canonical plant species records and the normalizer that builds them from
//! heterogeneous catalog sources (database dumps, bundled datasets, client
//! caches), each of which names the same fields differently.
//!
//! ## Architecture
//! - `record.rs` - PlantSpeciesRecord + difficulty/watering enums
//! - `normalize.rs` - Ordered alias tables and lenient field extraction

pub mod record;
pub mod normalize;

pub use record::{Difficulty, PlantSpeciesRecord, WateringNeed};
pub use normalize::{normalize_catalog, normalize_record};
