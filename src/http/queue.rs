//! Waiting-room HTTP handlers: join, poll, leave, admit.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::queue::AdmitOutcome;

use super::types::{
    queue_error_response, AdmitResponse, ApiResponse, AppState, IdentifierQuery, JoinRequest,
    JoinResponse, PollResponse,
};

/// Join the waiting room.
#[utoipa::path(
    post,
    path = "/queue/join",
    tag = "Queue",
    request_body = JoinRequest,
    responses(
        (status = 200, description = "Ticket issued", body = JoinResponse),
        (status = 503, description = "Store busy, retry later")
    )
)]
pub async fn join_queue(
    State(state): State<AppState>,
    Json(req): Json<JoinRequest>,
) -> Response {
    match state.store.join(req.display_label) {
        Ok(identifier) => ApiResponse::success(JoinResponse { identifier }).into_response(),
        Err(e) => queue_error_response(e),
    }
}

/// Poll the ticket's state: admitted yet, and if not, how many are ahead.
#[utoipa::path(
    get,
    path = "/queue/poll",
    tag = "Queue",
    params(IdentifierQuery),
    responses(
        (status = 200, description = "Ticket state", body = PollResponse),
        (status = 400, description = "Malformed identifier"),
        (status = 404, description = "Unknown identifier"),
        (status = 503, description = "Store busy, retry later")
    )
)]
pub async fn poll_queue(
    State(state): State<AppState>,
    Query(query): Query<IdentifierQuery>,
) -> Response {
    if !state.identifiers.validate(&query.identifier) {
        return (
            StatusCode::BAD_REQUEST,
            ApiResponse::<()>::error("invalid identifier"),
        )
            .into_response();
    }

    let exists = match state.store.contains(&query.identifier) {
        Ok(exists) => exists,
        Err(e) => return queue_error_response(e),
    };
    if !exists {
        return (
            StatusCode::NOT_FOUND,
            ApiResponse::<()>::error("unknown identifier"),
        )
            .into_response();
    }

    let admitted = match state.store.is_admittable(&query.identifier) {
        Ok(admitted) => admitted,
        Err(e) => return queue_error_response(e),
    };
    if admitted {
        return ApiResponse::success(PollResponse {
            admitted: true,
            position: None,
        })
        .into_response();
    }

    match state.store.position(&query.identifier) {
        Ok(Some(position)) => ApiResponse::success(PollResponse {
            admitted: false,
            position: Some(position),
        })
        .into_response(),
        // The ticket left between the two lock holds.
        Ok(None) => (
            StatusCode::NOT_FOUND,
            ApiResponse::<()>::error("unknown identifier"),
        )
            .into_response(),
        Err(e) => queue_error_response(e),
    }
}

/// Leave the waiting room, releasing the ticket.
#[utoipa::path(
    put,
    path = "/queue/leave",
    tag = "Queue",
    params(IdentifierQuery),
    responses(
        (status = 200, description = "Ticket removed"),
        (status = 400, description = "Malformed identifier"),
        (status = 404, description = "Unknown identifier"),
        (status = 503, description = "Store busy, retry later")
    )
)]
pub async fn leave_queue(
    State(state): State<AppState>,
    Query(query): Query<IdentifierQuery>,
) -> Response {
    if !state.identifiers.validate(&query.identifier) {
        return (
            StatusCode::BAD_REQUEST,
            ApiResponse::<()>::error("invalid identifier"),
        )
            .into_response();
    }

    match state.store.remove(&query.identifier) {
        Ok(true) => ApiResponse::success(()).into_response(),
        Ok(false) => (
            StatusCode::NOT_FOUND,
            ApiResponse::<()>::error("unknown identifier"),
        )
            .into_response(),
        Err(e) => queue_error_response(e),
    }
}

/// Release the head ticket. Driven by the admission gate, not by waiting
/// clients.
#[utoipa::path(
    post,
    path = "/queue/admit",
    tag = "Queue",
    responses(
        (status = 200, description = "Head ticket released", body = AdmitResponse),
        (status = 404, description = "Queue is empty"),
        (status = 409, description = "Head already released"),
        (status = 503, description = "Store busy, retry later")
    )
)]
pub async fn admit_head(State(state): State<AppState>) -> Response {
    match state.store.admit() {
        Ok(AdmitOutcome::Admitted { identifier }) => {
            ApiResponse::success(AdmitResponse { identifier }).into_response()
        }
        Ok(AdmitOutcome::Conflict) => (
            StatusCode::CONFLICT,
            ApiResponse::<()>::error("head ticket already released"),
        )
            .into_response(),
        Ok(AdmitOutcome::Empty) => (
            StatusCode::NOT_FOUND,
            ApiResponse::<()>::error("queue is empty"),
        )
            .into_response(),
        Err(e) => queue_error_response(e),
    }
}
