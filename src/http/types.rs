//! HTTP API request and response types.

use std::sync::Arc;

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::identifier::IdentifierProvider;
use crate::queue::{QueueError, QueueStore};

/// Shared application state: the queue store plus the identifier
/// collaborator the transport uses for syntactic validation.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<QueueStore>,
    pub identifiers: Arc<dyn IdentifierProvider>,
}

impl AppState {
    pub fn new(identifiers: Arc<dyn IdentifierProvider>) -> Self {
        Self {
            store: Arc::new(QueueStore::new(Arc::clone(&identifiers))),
            identifiers,
        }
    }
}

/// Join request.
#[derive(Deserialize, ToSchema)]
pub struct JoinRequest {
    pub display_label: String,
}

/// Join response.
#[derive(Serialize, ToSchema)]
pub struct JoinResponse {
    pub identifier: String,
}

/// Identifier query parameter for poll and leave.
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct IdentifierQuery {
    pub identifier: String,
}

/// Poll response: either admitted, or the zero-based position still ahead.
#[derive(Serialize, ToSchema)]
pub struct PollResponse {
    pub admitted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,
}

/// Admit response.
#[derive(Serialize, ToSchema)]
pub struct AdmitResponse {
    pub identifier: String,
}

/// Stats response.
#[derive(Serialize, ToSchema)]
pub struct StatsResponse {
    pub waiting: usize,
    pub shards: usize,
}

/// Generic API response wrapper.
#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Json<Self> {
        Json(Self {
            ok: true,
            data: Some(data),
            error: None,
        })
    }

    pub fn error(msg: impl Into<String>) -> Json<Self> {
        Json(Self {
            ok: false,
            data: None,
            error: Some(msg.into()),
        })
    }
}

/// Map a store error to its transport status: contention is transient
/// (503 + Retry-After), an empty queue is 404.
pub fn queue_error_response(err: QueueError) -> Response {
    match err {
        QueueError::Contention => (
            StatusCode::SERVICE_UNAVAILABLE,
            [(header::RETRY_AFTER, "1")],
            ApiResponse::<()>::error("store is busy, retry shortly"),
        )
            .into_response(),
        QueueError::Empty => (
            StatusCode::NOT_FOUND,
            ApiResponse::<()>::error("queue is empty"),
        )
            .into_response(),
    }
}
