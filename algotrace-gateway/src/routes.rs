//! Axum route handlers for the algotrace API.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use uuid::Uuid;

use algotrace_core::{
    binary_search, generate_sequence, linear_search, BinaryStep, GenerateSpec, LinearStep,
    SearchTrace, SortedSequence,
};

use crate::{config::GatewayConfig, error::GatewayError};

// ── Shared state ─────────────────────────────────────────────────────────────

type Config = Arc<GatewayConfig>;

// ── Request / response types ──────────────────────────────────────────────────

/// Body accepted by both search endpoints.
///
/// When `sequence` is absent a random one is generated from `size` and
/// `digits`. A present but empty `sequence` is searched as-is.
#[derive(Debug, Deserialize)]
pub struct SearchBody {
    #[serde(alias = "array")]
    pub sequence: Option<Vec<i64>>,
    pub size: Option<usize>,
    pub digits: Option<u32>,
    pub target: i64,
}

/// Result returned by the search endpoints: the sequence actually searched,
/// the target, and the flattened trace (`steps`, `found`, `index`).
#[derive(Debug, Serialize)]
pub struct SearchResponse<S> {
    pub sequence: Vec<i64>,
    pub target: i64,
    #[serde(flatten)]
    pub trace: SearchTrace<S>,
}

pub type BinarySearchResponse = SearchResponse<BinaryStep<i64>>;
pub type LinearSearchResponse = SearchResponse<LinearStep<i64>>;

// ── Router ────────────────────────────────────────────────────────────────────

/// Build the application router with the given configuration.
pub fn create_router(config: Config) -> Router {
    Router::new()
        .route("/binary_search", post(binary_search_handler))
        .route("/linear_search", post(linear_search_handler))
        .route("/ping", get(ping))
        .route("/health", get(health))
        .with_state(config)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `GET /health` — liveness probe.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({"status": "ok"})))
}

/// `GET /ping` — connectivity check polled by the front-end on load.
pub async fn ping() -> impl IntoResponse {
    Json(serde_json::json!({"message": "pong"}))
}

/// `POST /binary_search` — sort (or generate) a sequence and binary-search it.
///
/// # Errors
/// Returns [`GatewayError::Body`] for malformed JSON or a missing `target`,
/// [`GatewayError::InvalidRequest`] if the sequence exceeds the configured
/// length, or [`GatewayError::Generate`] for bad `size`/`digits`.
pub async fn binary_search_handler(
    State(config): State<Config>,
    payload: Result<Json<SearchBody>, JsonRejection>,
) -> Result<Json<BinarySearchResponse>, GatewayError> {
    let Json(body) = payload?;
    let span = tracing::info_span!(
        "binary_search",
        request_id = %Uuid::new_v4(),
        search_target = body.target
    );
    span.in_scope(|| run_binary_search(&config, body)).map(Json)
}

/// `POST /linear_search` — scan a sequence in caller order.
///
/// Generated sequences are shuffled so the scan is not over sorted data.
///
/// # Errors
/// Same as [`binary_search_handler`].
pub async fn linear_search_handler(
    State(config): State<Config>,
    payload: Result<Json<SearchBody>, JsonRejection>,
) -> Result<Json<LinearSearchResponse>, GatewayError> {
    let Json(body) = payload?;
    let span = tracing::info_span!(
        "linear_search",
        request_id = %Uuid::new_v4(),
        search_target = body.target
    );
    span.in_scope(|| run_linear_search(&config, body)).map(Json)
}

// ── Search helpers ────────────────────────────────────────────────────────────

fn run_binary_search(
    config: &GatewayConfig,
    body: SearchBody,
) -> Result<BinarySearchResponse, GatewayError> {
    let sequence = SortedSequence::from_unsorted(resolve_sequence(config, &body)?);
    let trace = binary_search(&sequence, body.target);
    tracing::info!(
        len = sequence.len(),
        steps = trace.steps.len(),
        found = trace.found,
        "binary search complete"
    );
    Ok(SearchResponse { sequence: sequence.into_inner(), target: body.target, trace })
}

fn run_linear_search(
    config: &GatewayConfig,
    body: SearchBody,
) -> Result<LinearSearchResponse, GatewayError> {
    let mut sequence = resolve_sequence(config, &body)?;
    if body.sequence.is_none() {
        sequence.shuffle(&mut rand::thread_rng());
    }
    let trace = linear_search(&sequence, body.target);
    tracing::info!(
        len = sequence.len(),
        steps = trace.steps.len(),
        found = trace.found,
        "linear search complete"
    );
    Ok(SearchResponse { sequence, target: body.target, trace })
}

/// Take the caller's sequence, or generate one when none was supplied.
fn resolve_sequence(config: &GatewayConfig, body: &SearchBody) -> Result<Vec<i64>, GatewayError> {
    match &body.sequence {
        Some(values) if values.len() > config.max_len => Err(GatewayError::InvalidRequest(
            format!("sequence has {} elements; at most {} allowed", values.len(), config.max_len),
        )),
        Some(values) => Ok(values.clone()),
        None => {
            let spec = GenerateSpec::new(body.size, body.digits);
            let generated = generate_sequence(spec, config.max_len, &mut rand::thread_rng())?;
            Ok(generated.into_inner())
        }
    }
}
