//! API Handlers
//!
//! HTTP request handlers for each cache endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;

use crate::cache::PerformanceCache;
use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::models::{
    ClearResponse, DeleteResponse, GetResponse, HasResponse, HealthResponse, InvalidateRequest,
    InvalidateResponse, SetRequest, SetResponse, StatsResponse,
};

/// Application state shared across all handlers.
///
/// The cache does its own locking, so the state is just a shared handle.
#[derive(Clone)]
pub struct AppState {
    /// Shared cache of JSON values
    pub cache: Arc<PerformanceCache<Value>>,
}

impl AppState {
    /// Creates a new AppState around a started cache.
    pub fn new(cache: PerformanceCache<Value>) -> Self {
        Self {
            cache: Arc::new(cache),
        }
    }

    /// Starts a cache from configuration and wraps it.
    ///
    /// Must be called from within a tokio runtime.
    pub fn from_config(config: &Config) -> Self {
        Self::new(PerformanceCache::start(&config.cache_config()))
    }
}

/// Handler for PUT /set
///
/// Stores a JSON value in the cache with optional TTL.
pub async fn set_handler(
    State(state): State<AppState>,
    Json(req): Json<SetRequest>,
) -> Result<Json<SetResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(ApiError::InvalidRequest(error_msg));
    }

    let ttl = req.ttl();
    state.cache.set(req.key.clone(), req.value, ttl).await;

    Ok(Json(SetResponse::new(req.key)))
}

/// Handler for GET /get/:key
///
/// Retrieves a value from the cache by key. Missing and expired keys are 404.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<GetResponse>> {
    let value = state
        .cache
        .get(&key)
        .await
        .ok_or_else(|| ApiError::NotFound(key.clone()))?;

    Ok(Json(GetResponse::new(key, value)))
}

/// Handler for GET /has/:key
pub async fn has_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Json<HasResponse> {
    let exists = state.cache.has(&key).await;
    Json(HasResponse { key, exists })
}

/// Handler for DELETE /del/:key
///
/// Deleting a missing key is not an error.
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Json<DeleteResponse> {
    let removed = state.cache.delete(&key).await;
    Json(DeleteResponse { key, removed })
}

/// Handler for DELETE /clear
pub async fn clear_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    let removed = state.cache.clear().await;
    Json(ClearResponse { removed })
}

/// Handler for POST /invalidate
///
/// Removes every key matching the glob in the request body.
pub async fn invalidate_handler(
    State(state): State<AppState>,
    Json(req): Json<InvalidateRequest>,
) -> Json<InvalidateResponse> {
    let removed = state.cache.invalidate_pattern(&req.pattern).await;
    Json(InvalidateResponse {
        pattern: req.pattern,
        removed,
    })
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(state.cache.stats().await.into())
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
