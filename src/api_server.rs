// Axum API Server Module
//
// Purpose: REST surface over the recommendation engine. Spaces and the
// catalog live in an in-memory GardenStore; engine responses are cached
// in Moka, keyed by store generation so a reload retires every entry.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use moka::future::Cache;
use serde::Deserialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::config::ServerConfig;
use crate::provider::{recommend, SuggestionProvider};
use crate::ranking::{rank_for_spaces, rank_suggestions};
use crate::space::Space;
use crate::store::GardenStore;

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub store: Arc<RwLock<GardenStore>>,
    pub cache: Cache<String, serde_json::Value>,
    /// Bumped under the store write lock on every reload
    pub generation: Arc<AtomicU64>,
    /// External suggestion provider; `None` means always use the local engine
    pub provider: Option<Arc<dyn SuggestionProvider>>,
}

impl AppState {
    /// Load the store from `config.data_dir` and build the response cache
    pub async fn new(config: ServerConfig) -> anyhow::Result<Self> {
        tracing::info!("Loading garden store from {}...", config.data_dir.display());
        let data_dir = config.data_dir.clone();
        let store = tokio::task::spawn_blocking(move || GardenStore::load(&data_dir)).await??;

        Ok(Self::with_store(config, store, None))
    }

    pub fn with_store(
        config: ServerConfig,
        store: GardenStore,
        provider: Option<Arc<dyn SuggestionProvider>>,
    ) -> Self {
        tracing::info!("Initializing Moka cache (TTL {}s)...", config.cache_ttl_secs);
        let cache = Cache::builder()
            .max_capacity(10_000)
            .time_to_live(Duration::from_secs(config.cache_ttl_secs))
            .build();

        Self {
            config: Arc::new(config),
            store: Arc::new(RwLock::new(store)),
            cache,
            generation: Arc::new(AtomicU64::new(0)),
            provider,
        }
    }

    pub fn with_provider(mut self, provider: Arc<dyn SuggestionProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    pub fn current_generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }
}

/// Cache key for one engine response.
///
/// Results are computed from a store snapshot taken under the read lock; the
/// snapshot's generation goes into the key, so a result that finishes after a
/// reload lands under a key no later request will ask for.
pub fn suggestion_cache_key(generation: u64, space_id: &str, limit: usize) -> String {
    format!("suggestions:{}:{}:{}", generation, space_id, limit)
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Catalog
        .route("/api/plants/catalog", get(list_catalog))

        // Suggestions
        // IMPORTANT: batch route is a POST on its own path
        .route("/api/plants/suggestions", get(get_suggestions))
        .route("/api/plants/suggestions/batch", post(get_suggestions_batch))
        .route("/api/plants/ai-suggestions", get(get_ai_suggestions))

        // Admin
        .route("/api/admin/reload", post(reload_store))

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Request Types
// ============================================================================

#[derive(Deserialize, Debug)]
pub struct SuggestionQuery {
    #[serde(rename = "spaceId", alias = "space_id")]
    pub space_id: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Deserialize, Debug)]
pub struct BatchSuggestionRequest {
    pub space_ids: Vec<String>,
    pub limit: Option<usize>,
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn list_catalog(State(state): State<AppState>) -> Result<Json<serde_json::Value>, AppError> {
    let store = state.store.read().await;
    let data = serde_json::to_value(store.catalog()).map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(Json(serde_json::json!({
        "rows": store.catalog().len(),
        "data": data,
    })))
}

/// Local engine suggestions for one space
///
/// GET /api/plants/suggestions?spaceId=...&limit=...
/// Unknown or missing space ids answer with an empty list, not 404.
async fn get_suggestions(
    State(state): State<AppState>,
    Query(params): Query<SuggestionQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let limit = state.config.effective_limit(params.limit);
    let space_id = params.space_id.unwrap_or_default();

    let (generation, space, catalog) = {
        let store = state.store.read().await;
        (state.current_generation(), store.space(&space_id).cloned(), store.shared_catalog())
    };
    let cache_key = suggestion_cache_key(generation, &space_id, limit);

    if let Some(cached) = state.cache.get(&cache_key).await {
        tracing::debug!("Cache hit for suggestions {}:{} (generation {})", space_id, limit, generation);
        return Ok(Json(cached));
    }

    if space.is_none() {
        tracing::debug!("Space '{}' not found; returning no suggestions", space_id);
    }

    let suggestions = tokio::task::spawn_blocking(move || {
        rank_suggestions(space.as_ref(), &catalog, limit)
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))?;

    let result = serde_json::json!({ "suggestions": suggestions });
    state.cache.insert(cache_key, result.clone()).await;

    Ok(Json(result))
}

/// Local engine suggestions for several spaces
///
/// POST /api/plants/suggestions/batch
/// Body: { "space_ids": ["s1", ...], "limit": 6 }
/// At most `max_batch_spaces` ids per request.
async fn get_suggestions_batch(
    State(state): State<AppState>,
    Json(req): Json<BatchSuggestionRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    if req.space_ids.len() > state.config.max_batch_spaces {
        return Err(AppError::BadRequest(format!(
            "too many space_ids: {} (max {})",
            req.space_ids.len(),
            state.config.max_batch_spaces
        )));
    }
    let limit = state.config.effective_limit(req.limit);

    let (known, catalog): (Vec<(String, Space)>, _) = {
        let store = state.store.read().await;
        let known = req
            .space_ids
            .iter()
            .filter_map(|id| store.space(id).map(|s| (id.clone(), s.clone())))
            .collect();
        (known, store.shared_catalog())
    };
    tracing::info!("Batch suggestions for {} spaces ({} known)", req.space_ids.len(), known.len());

    let spaces: Vec<Space> = known.iter().map(|(_, s)| s.clone()).collect();
    let ranked = tokio::task::spawn_blocking(move || rank_for_spaces(&spaces, &catalog, limit))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    let mut results = serde_json::Map::new();
    for id in &req.space_ids {
        results.insert(id.clone(), serde_json::json!([]));
    }
    for ((id, _), suggestions) in known.into_iter().zip(ranked) {
        results.insert(id, serde_json::json!(suggestions));
    }

    Ok(Json(serde_json::json!({ "results": results })))
}

/// Provider-first suggestions with local fallback
///
/// GET /api/plants/ai-suggestions?spaceId=...&limit=...
async fn get_ai_suggestions(
    State(state): State<AppState>,
    Query(params): Query<SuggestionQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let limit = state.config.effective_limit(params.limit);
    let space_id = params.space_id.unwrap_or_default();

    let (space, catalog) = {
        let store = state.store.read().await;
        (store.space(&space_id).cloned(), store.shared_catalog())
    };

    let recommendation = recommend(
        state.provider.as_deref(),
        space.as_ref(),
        &catalog,
        limit,
        Duration::from_millis(state.config.provider_timeout_ms),
    )
    .await;

    let result = serde_json::to_value(&recommendation).map_err(|e| AppError::Internal(e.to_string()))?;
    Ok(Json(result))
}

/// Re-read the data directory and drop every cached response
///
/// POST /api/admin/reload
async fn reload_store(State(state): State<AppState>) -> Result<Json<serde_json::Value>, AppError> {
    let data_dir = state.config.data_dir.clone();
    let fresh = tokio::task::spawn_blocking(move || GardenStore::load(&data_dir))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
        .map_err(|e| AppError::Store(e.to_string()))?;

    let (plants, spaces) = (fresh.catalog().len(), fresh.space_count());
    let generation = {
        let mut store = state.store.write().await;
        *store = fresh;
        state.generation.fetch_add(1, Ordering::AcqRel) + 1
    };
    state.cache.invalidate_all();
    tracing::info!(
        "Reloaded store: {} plants, {} spaces; generation {}, cache invalidated",
        plants,
        spaces,
        generation
    );

    Ok(Json(serde_json::json!({
        "status": "reloaded",
        "plants": plants,
        "spaces": spaces,
    })))
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Store(String),
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Store(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
