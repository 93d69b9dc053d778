//! External Provider Fallback
//!
//! Callers may ask an external (LLM-backed) provider for suggestions first.
//! This module decides whether what came back is usable and, when it is not,
//! falls back to the local engine. Everything here is synchronous and
//! deterministic; the network call itself lives with the caller.
//!
//! Fallback triggers:
//! - no provider configured, transport failure, non-2xx status, timeout
//! - unparseable output
//! - zero entries that resolve to a catalog slug

use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;
use serde_json::Value;

use crate::catalog::PlantSpeciesRecord;
use crate::error::ProviderError;
use crate::ranking::{rank_suggestions, sort_descending, Suggestion};
use crate::scoring::finalize_score;
use crate::space::Space;
use crate::utils::fields::{as_f64, as_identifier, as_tag_list, as_text, resolve};

/// Score assumed for provider entries without a usable score
pub const DEFAULT_PROVIDER_SCORE: f64 = 50.0;
pub const DEFAULT_PROVIDER_RATIONALE: &str = "Suggested by AI.";

/// One entry as returned by the provider, before catalog resolution
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderSuggestion {
    pub plant_slug: String,
    pub score: f64,
    pub rationale: String,
    pub tags: Vec<String>,
}

impl ProviderSuggestion {
    /// Read one loose provider entry; `None` when it names no plant
    pub fn from_value(raw: &Value) -> Option<Self> {
        Some(Self {
            plant_slug: resolve(raw, &["plant_slug", "slug", "id"], as_identifier)?,
            score: resolve(raw, &["score"], as_f64).unwrap_or(DEFAULT_PROVIDER_SCORE),
            rationale: resolve(raw, &["rationale"], as_text)
                .unwrap_or_else(|| DEFAULT_PROVIDER_RATIONALE.to_string()),
            tags: resolve(raw, &["tags"], as_tag_list).unwrap_or_default(),
        })
    }
}

/// Where a recommendation list came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionSource {
    Provider,
    Fallback,
}

/// Final recommendation list plus its provenance
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub source: SuggestionSource,
    pub suggestions: Vec<Suggestion>,
}

/// Remove Markdown code fences that models like to wrap JSON in
fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "")
        .replace("```JSON", "")
        .replace("```", "")
        .trim()
        .to_string()
}

/// Parse raw provider text.
///
/// Accepts a bare JSON array, or an object carrying the array under
/// `recommendations` or `suggestions`. Entries without a plant identifier
/// are skipped.
///
/// `SuggestionProvider` implementations hand the model's reply body to this
/// function and return its result; transport failures and non-2xx replies
/// map to `ProviderError::Transport` and `ProviderError::Status` instead.
pub fn parse_provider_response(text: &str) -> Result<Vec<ProviderSuggestion>, ProviderError> {
    let cleaned = strip_code_fences(text);
    let parsed: Value =
        serde_json::from_str(&cleaned).map_err(|e| ProviderError::Malformed(e.to_string()))?;

    let entries = match &parsed {
        Value::Array(items) => items.as_slice(),
        Value::Object(map) => map
            .get("recommendations")
            .or_else(|| map.get("suggestions"))
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[]),
        _ => return Err(ProviderError::Malformed("expected a JSON array or object".to_string())),
    };

    Ok(entries.iter().filter_map(ProviderSuggestion::from_value).collect())
}

/// Resolve provider entries against the catalog.
///
/// Keeps entries naming a catalog slug (first mention wins), normalizes the
/// score to the engine's 0-100 one-decimal scale, drops non-positive scores,
/// and ranks the rest with the same stable ordering as the local engine.
pub fn resolve_provider_suggestions(
    raw: Vec<ProviderSuggestion>,
    catalog: &[PlantSpeciesRecord],
    limit: usize,
) -> Vec<Suggestion> {
    let by_slug: FxHashMap<&str, &PlantSpeciesRecord> =
        catalog.iter().map(|p| (p.slug.as_str(), p)).collect();
    let mut seen: FxHashSet<String> = FxHashSet::default();

    let mut resolved: Vec<Suggestion> = raw
        .into_iter()
        .filter_map(|entry| {
            let plant = by_slug.get(entry.plant_slug.as_str())?;
            let score = finalize_score(entry.score);
            if score <= 0.0 || !seen.insert(entry.plant_slug.clone()) {
                return None;
            }
            Some(Suggestion {
                plant_slug: entry.plant_slug,
                score,
                rationale: entry.rationale,
                tags: entry.tags,
                common_name: plant.common_name.clone(),
                scientific_name: plant.scientific_name.clone(),
                reasons: Vec::new(),
            })
        })
        .collect();

    sort_descending(&mut resolved);
    resolved.truncate(limit);
    resolved
}

/// Settle a provider attempt: use its output when usable, otherwise rank locally
pub fn recommend_with_fallback(
    provider_result: Result<Vec<ProviderSuggestion>, ProviderError>,
    space: Option<&Space>,
    catalog: &[PlantSpeciesRecord],
    limit: usize,
) -> Recommendation {
    match provider_result {
        Ok(raw) => {
            let received = raw.len();
            let suggestions = resolve_provider_suggestions(raw, catalog, limit);
            if !suggestions.is_empty() || limit == 0 {
                return Recommendation {
                    source: SuggestionSource::Provider,
                    suggestions,
                };
            }
            tracing::warn!(
                "Provider returned {} entries, none usable against the catalog; using local engine",
                received
            );
        }
        Err(ProviderError::Unavailable) => {
            tracing::debug!("No suggestion provider configured; using local engine");
        }
        Err(e) => {
            tracing::warn!("Suggestion provider failed: {}; using local engine", e);
        }
    }

    Recommendation {
        source: SuggestionSource::Fallback,
        suggestions: rank_suggestions(space, catalog, limit),
    }
}
