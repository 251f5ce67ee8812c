//! Operator HTTP handlers: stats, full reset, health.

use axum::extract::State;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use utoipa::ToSchema;

use super::types::{queue_error_response, ApiResponse, AppState, StatsResponse};

/// Health check response.
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Waiting-room stats.
#[utoipa::path(
    get,
    path = "/queue/stats",
    tag = "Stats",
    responses(
        (status = 200, description = "Queue statistics", body = StatsResponse),
        (status = 503, description = "Store busy, retry later")
    )
)]
pub async fn get_stats(State(state): State<AppState>) -> Response {
    let waiting = match state.store.len() {
        Ok(waiting) => waiting,
        Err(e) => return queue_error_response(e),
    };
    let shards = match state.store.shard_count() {
        Ok(shards) => shards,
        Err(e) => return queue_error_response(e),
    };
    ApiResponse::success(StatsResponse { waiting, shards }).into_response()
}

/// Snapshot of the ticket currently at the head of the queue. Operator
/// visibility for the admission gate.
#[utoipa::path(
    get,
    path = "/queue/first",
    tag = "Stats",
    responses(
        (status = 200, description = "Head ticket", body = crate::queue::TicketInfo),
        (status = 404, description = "Queue is empty"),
        (status = 503, description = "Store busy, retry later")
    )
)]
pub async fn head_ticket(State(state): State<AppState>) -> Response {
    match state.store.first() {
        Ok(info) => ApiResponse::success(info).into_response(),
        Err(e) => queue_error_response(e),
    }
}

/// Destroy all tickets and reset the store. Operator surface for use
/// between operational windows.
#[utoipa::path(
    post,
    path = "/server/clear",
    tag = "Server",
    responses(
        (status = 200, description = "Store cleared"),
        (status = 503, description = "Store busy, retry later")
    )
)]
pub async fn clear_store(State(state): State<AppState>) -> Response {
    match state.store.clear() {
        Ok(()) => ApiResponse::success(()).into_response(),
        Err(e) => queue_error_response(e),
    }
}

/// Health check endpoint. Always returns 200 if the server is responsive;
/// use for load balancer probes and uptime monitoring.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Server is healthy", body = HealthResponse)
    )
)]
pub async fn health_check() -> Json<ApiResponse<HealthResponse>> {
    ApiResponse::success(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}
