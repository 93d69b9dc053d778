//! External suggestion provider seam
//!
//! An external provider (typically an LLM behind an HTTP API) may be asked
//! for suggestions before the local engine. The provider is optional and
//! untrusted: it runs under a timeout and its output goes through
//! `fallback::recommend_with_fallback` like everything else.

use async_trait::async_trait;
use std::time::Duration;

use crate::catalog::PlantSpeciesRecord;
use crate::error::ProviderError;
use crate::fallback::{recommend_with_fallback, ProviderSuggestion, Recommendation};
use crate::space::Space;

/// Source of externally generated suggestions.
///
/// HTTP-backed implementations parse the reply body with
/// `fallback::parse_provider_response` and report failed requests as
/// `ProviderError::Transport` or `ProviderError::Status`.
#[async_trait]
pub trait SuggestionProvider: Send + Sync {
    /// Unordered candidates for `space`, drawn from `catalog`
    async fn suggest(
        &self,
        space: &Space,
        catalog: &[PlantSpeciesRecord],
    ) -> Result<Vec<ProviderSuggestion>, ProviderError>;
}

/// Ask the provider (if any) under a timeout, then settle with the fallback
/// rules. A missing space skips the provider entirely.
pub async fn recommend(
    provider: Option<&dyn SuggestionProvider>,
    space: Option<&Space>,
    catalog: &[PlantSpeciesRecord],
    limit: usize,
    timeout: Duration,
) -> Recommendation {
    let attempt = match (provider, space) {
        (Some(provider), Some(space)) if !catalog.is_empty() => {
            match tokio::time::timeout(timeout, provider.suggest(space, catalog)).await {
                Ok(result) => result,
                Err(_) => Err(ProviderError::Timeout(timeout.as_millis() as u64)),
            }
        }
        _ => Err(ProviderError::Unavailable),
    };

    recommend_with_fallback(attempt, space, catalog, limit)
}
