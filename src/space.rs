//! Growing Space definition
//!
//! A user's declared growing environment. Every field is optional: a space
//! record from a form or database may be partially filled, and the scorer
//! treats anything missing as "unknown" rather than as zero.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::utils::fields::{as_f64, as_identifier, as_text, resolve};

/// Growing environment category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpaceType {
    Balcony,
    Windowsill,
    Terrace,
    Indoor,
}

impl SpaceType {
    /// Parse a space type label; unknown labels yield `None`
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "balcony" => Some(SpaceType::Balcony),
            "windowsill" => Some(SpaceType::Windowsill),
            "terrace" => Some(SpaceType::Terrace),
            "indoor" => Some(SpaceType::Indoor),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SpaceType::Balcony => "balcony",
            SpaceType::Windowsill => "windowsill",
            SpaceType::Terrace => "terrace",
            SpaceType::Indoor => "indoor",
        }
    }

    /// Windowsills and rooms are sheltered, indoor environments
    pub fn is_indoor(&self) -> bool {
        matches!(self, SpaceType::Windowsill | SpaceType::Indoor)
    }
}

/// A growing space as seen by the recommender
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Space {
    pub id: Option<String>,
    pub name: Option<String>,

    /// Average daily direct sun (hours, 0-12)
    pub sunlight_hours: Option<f64>,

    #[serde(rename = "type")]
    pub space_type: Option<SpaceType>,

    /// Usable footprint (m²)
    pub area_sq_m: Option<f64>,
}

impl Space {
    pub fn new(sunlight_hours: f64, space_type: SpaceType, area_sq_m: f64) -> Self {
        Self {
            id: None,
            name: None,
            sunlight_hours: Some(sunlight_hours),
            space_type: Some(space_type),
            area_sq_m: Some(area_sq_m),
        }
    }

    /// Build a space from a loose JSON record (snake_case or camelCase keys)
    pub fn from_value(raw: &Value) -> Self {
        Self {
            id: resolve(raw, &["id", "_id"], as_identifier),
            name: resolve(raw, &["name"], as_text),
            sunlight_hours: resolve(raw, &["sunlight_hours", "sunlightHours"], as_f64),
            space_type: resolve(raw, &["type", "space_type", "spaceType"], |v| {
                v.as_str().and_then(SpaceType::parse)
            }),
            area_sq_m: resolve(raw, &["area_sq_m", "areaSquareMeters", "area"], as_f64),
        }
    }

    pub fn label(&self) -> &str {
        self.name
            .as_deref()
            .or(self.id.as_deref())
            .unwrap_or("unnamed space")
    }
}
