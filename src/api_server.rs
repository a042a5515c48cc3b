// Axum API Server Module
//
// Purpose: JSON surface over the sun exposure engine for the garden CRUD layer.
// Geometry rows come from an in-memory snapshot; every request runs an independent
// pure computation.

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use moka::future::Cache;
use std::path::Path as FsPath;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::models::{GardenGeometry, Tree};
use crate::rules::{AdvisoryGenerator, MarkdownFormatter};
use crate::service::{
    check_placement_warnings, get_garden_sun_exposure, get_structure_shadow_extent,
    get_tree_shadow_extent, survey_land_exposure,
};
use crate::store::{InMemoryStore, LandLookup};
use crate::sun_position::{hemisphere, DEFAULT_LATITUDE};

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<InMemoryStore>,
    pub cache: Cache<String, serde_json::Value>,
}

impl AppState {
    /// Load the geometry snapshot from a JSON file
    pub fn new(data_file: &str) -> anyhow::Result<Self> {
        tracing::info!("Loading geometry snapshot from {}...", data_file);
        let store = InMemoryStore::from_json_file(FsPath::new(data_file))?;
        tracing::info!("Loaded {} rows", store.len());
        Ok(Self::from_store(store))
    }

    pub fn from_store(store: InMemoryStore) -> Self {
        tracing::info!("Initializing Moka cache...");
        let cache = Cache::builder()
            .max_capacity(10_000)
            .time_to_live(Duration::from_secs(300)) // 5 min TTL
            .build();

        Self {
            store: Arc::new(store),
            cache,
        }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Garden exposure
        .route("/api/gardens/:id/sun-exposure", get(get_garden_exposure))
        .route("/api/gardens/:id/sun-advice", get(get_garden_advice))

        // Land-wide endpoints
        .route("/api/lands/:id/sun-exposure", get(get_land_exposure))
        .route("/api/lands/:id/placement-check", post(check_placement))

        // Shadow extents
        .route("/api/trees/placement-check", post(check_tree_placement))
        .route("/api/trees/:id/shadow", get(get_tree_shadow))
        .route("/api/structures/:id/shadow", get(get_structure_shadow))

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
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

async fn get_garden_exposure(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    let cache_key = format!("exposure:{}", id);

    if let Some(cached) = state.cache.get(&cache_key).await {
        tracing::debug!("Cache hit for garden exposure {}", id);
        return Ok(Json(cached));
    }

    let garden = state
        .store
        .garden(id)
        .ok_or_else(|| AppError::NotFound(format!("Garden {} not found", id)))?;

    let exposure = get_garden_sun_exposure(garden, state.store.as_ref(), state.store.as_ref());
    let result = serde_json::to_value(&exposure).map_err(|e| AppError::Internal(e.to_string()))?;

    state.cache.insert(cache_key, result.clone()).await;

    Ok(Json(result))
}

#[derive(Debug, serde::Deserialize)]
struct AdviceQuery {
    /// "full_sun" | "partial_sun" | "shade"
    plant_sun: Option<String>,
    /// "json" (default) or "markdown"
    format: Option<String>,
}

async fn get_garden_advice(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(params): Query<AdviceQuery>,
) -> Result<Response, AppError> {
    let garden = state
        .store
        .garden(id)
        .ok_or_else(|| AppError::NotFound(format!("Garden {} not found", id)))?;

    let exposure = get_garden_sun_exposure(garden, state.store.as_ref(), state.store.as_ref());
    let advisories = AdvisoryGenerator::for_garden(&exposure, params.plant_sun.as_deref());

    match params.format.as_deref() {
        Some("markdown") | Some("md") => {
            let md = MarkdownFormatter::format(&exposure, &advisories);
            Ok(([(header::CONTENT_TYPE, "text/markdown; charset=utf-8")], md).into_response())
        }
        None | Some("json") => Ok(Json(serde_json::json!({
            "garden_id": id,
            "plant_sun": params.plant_sun,
            "exposure": exposure,
            "advisories": advisories,
        }))
        .into_response()),
        Some(other) => Err(AppError::BadRequest(format!("Unknown format '{}'", other))),
    }
}

async fn get_land_exposure(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    if state.store.land(id).is_none() {
        return Err(AppError::NotFound(format!("Land {} not found", id)));
    }

    // CPU-bound rayon work, keep it off the async workers
    let store = state.store.clone();
    let survey = tokio::task::spawn_blocking(move || {
        let gardens = store.gardens_on_land(id);
        survey_land_exposure(id, &gardens, store.as_ref(), store.as_ref())
    })
    .await
    .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))?;

    tracing::debug!(
        "Land {} survey: {} garden(s), {} unavailable",
        id,
        survey.gardens.len(),
        survey.unavailable_count
    );

    serde_json::to_value(&survey)
        .map(Json)
        .map_err(|e| AppError::Internal(e.to_string()))
}

async fn check_placement(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(proposed): Json<GardenGeometry>,
) -> Result<Json<serde_json::Value>, AppError> {
    let land = state
        .store
        .land(id)
        .ok_or_else(|| AppError::NotFound(format!("Land {} not found", id)))?;

    let warnings = check_placement_warnings(&proposed, &land, state.store.as_ref());

    Ok(Json(serde_json::json!({
        "land_id": id,
        "proposed": proposed,
        "warnings": warnings,
    })))
}

#[derive(Debug, serde::Deserialize)]
struct ShadowQuery {
    /// Accepted but inert: shadows are midday shadows. Validated in `validate_hour`.
    hour: Option<i64>,
}

async fn get_tree_shadow(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(params): Query<ShadowQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let hour = validate_hour(params.hour)?;
    let tree = state
        .store
        .tree(id)
        .ok_or_else(|| AppError::NotFound(format!("Tree {} not found", id)))?;
    let latitude = state.store.land(tree.land_id).and_then(|l| l.latitude);

    let extent = get_tree_shadow_extent(tree, latitude, hour);

    Ok(Json(serde_json::json!({
        "tree_id": id,
        "latitude": latitude.unwrap_or(DEFAULT_LATITUDE),
        "hour": hour,
        "seasonal_shadows": extent.seasonal_shadows,
        "max_shadow_length": extent.max_shadow_length,
    })))
}

async fn get_structure_shadow(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(params): Query<ShadowQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let hour = validate_hour(params.hour)?;
    let structure = state
        .store
        .structure(id)
        .ok_or_else(|| AppError::NotFound(format!("Structure {} not found", id)))?;
    let latitude = state.store.land(structure.land_id).and_then(|l| l.latitude);

    let extent = get_structure_shadow_extent(structure, latitude, hour);

    Ok(Json(serde_json::json!({
        "structure_id": id,
        "latitude": latitude.unwrap_or(DEFAULT_LATITUDE),
        "hour": hour,
        "seasonal_shadows": extent.seasonal_shadows,
        "max_shadow_length": extent.max_shadow_length,
    })))
}

/// Proposed tree position
#[derive(Debug, serde::Deserialize)]
struct TreePlacementRequest {
    land_id: i64,
    x: f64,
    y: f64,
    canopy_radius: Option<f64>,
    height: Option<f64>,
}

async fn check_tree_placement(
    State(state): State<AppState>,
    Json(req): Json<TreePlacementRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let land = state
        .store
        .land(req.land_id)
        .ok_or_else(|| AppError::NotFound(format!("Land {} not found", req.land_id)))?;
    let hemi = hemisphere(land.latitude.unwrap_or(DEFAULT_LATITUDE));

    let proposed = Tree {
        id: 0,
        land_id: req.land_id,
        species: None,
        x: Some(req.x),
        y: Some(req.y),
        height: req.height,
        canopy_radius: req.canopy_radius,
    };
    let gardens = state.store.gardens_on_land(req.land_id);
    let advisories = AdvisoryGenerator::for_tree(&proposed, hemi, &gardens);

    Ok(Json(serde_json::json!({
        "land_id": req.land_id,
        "hemisphere": hemi,
        "advisories": advisories,
    })))
}

// ============================================================================
// Helper Functions
// ============================================================================

fn validate_hour(hour: Option<i64>) -> Result<Option<u8>, AppError> {
    match hour {
        None => Ok(None),
        Some(h @ 0..=23) => Ok(Some(h as u8)),
        Some(h) => Err(AppError::BadRequest(format!("hour must be 0-23, got {}", h))),
    }
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
enum AppError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
