//! Garden Store - in-memory catalog and space lookup
//!
//! Holds the normalized plant catalog and the known spaces, loaded from JSON
//! exports (`catalog.json`, `spaces.json`) in a data directory. Space lookups
//! are O(1) via FxHashMap; the catalog keeps its source order, which is the
//! ranking tie-break. The catalog is shared behind an `Arc` so request
//! handlers can take a snapshot without copying it.

use rustc_hash::FxHashMap;
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::catalog::{normalize_catalog, PlantSpeciesRecord};
use crate::error::StoreError;
use crate::space::Space;

pub const CATALOG_FILE: &str = "catalog.json";
pub const SPACES_FILE: &str = "spaces.json";

#[derive(Debug, Clone)]
pub struct GardenStore {
    catalog: Arc<[PlantSpeciesRecord]>,
    spaces: FxHashMap<String, Space>,
}

impl GardenStore {
    /// Build from raw JSON records. Spaces without an id cannot be looked up
    /// and are skipped.
    pub fn from_records(raw_catalog: &[Value], raw_spaces: &[Value]) -> Self {
        let catalog: Arc<[PlantSpeciesRecord]> = normalize_catalog(raw_catalog).into();

        let mut spaces = FxHashMap::default();
        for raw in raw_spaces {
            let space = Space::from_value(raw);
            match space.id.clone() {
                Some(id) => {
                    spaces.insert(id, space);
                }
                None => tracing::debug!("Skipping space without id: {}", space.label()),
            }
        }

        Self { catalog, spaces }
    }

    /// Load `catalog.json` and (if present) `spaces.json` from a directory
    pub fn load(data_dir: &Path) -> Result<Self, StoreError> {
        let raw_catalog = read_json_array(&data_dir.join(CATALOG_FILE))?;

        let spaces_path = data_dir.join(SPACES_FILE);
        let raw_spaces = if spaces_path.exists() {
            read_json_array(&spaces_path)?
        } else {
            tracing::warn!("{} not found; no spaces loaded", spaces_path.display());
            Vec::new()
        };

        let store = Self::from_records(&raw_catalog, &raw_spaces);
        tracing::info!(
            "Loaded {} catalog plants ({} raw) and {} spaces from {}",
            store.catalog.len(),
            raw_catalog.len(),
            store.spaces.len(),
            data_dir.display()
        );
        Ok(store)
    }

    pub fn catalog(&self) -> &[PlantSpeciesRecord] {
        &self.catalog
    }

    /// Cheap handle to the catalog that outlives the store borrow
    pub fn shared_catalog(&self) -> Arc<[PlantSpeciesRecord]> {
        Arc::clone(&self.catalog)
    }

    pub fn space(&self, id: &str) -> Option<&Space> {
        self.spaces.get(id)
    }

    pub fn space_count(&self) -> usize {
        self.spaces.len()
    }
}

fn read_json_array(path: &Path) -> Result<Vec<Value>, StoreError> {
    let display = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: display.clone(),
        source,
    })?;
    let parsed: Value = serde_json::from_str(&contents).map_err(|source| StoreError::Json {
        path: display.clone(),
        source,
    })?;

    match parsed {
        Value::Array(items) => Ok(items),
        _ => Err(StoreError::Shape { path: display }),
    }
}
