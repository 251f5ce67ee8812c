//! HTTP API module.
//!
//! Maps waiting-room endpoints to queue store operations and store results
//! to status codes: unknown/invalid identifiers become client errors,
//! contention becomes a transient retry status, admit conflicts become 409.

mod admin;
mod openapi;
mod queue;
mod types;

use axum::http::{header, Method};
use axum::routing::{get, post, put};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

pub use types::AppState;

/// Create CORS layer based on environment configuration.
/// Set CORS_ALLOW_ORIGIN for production (comma-separated list of origins);
/// unset allows all origins (development mode).
fn create_cors_layer() -> CorsLayer {
    let allowed_origins = std::env::var("CORS_ALLOW_ORIGIN").ok();

    match allowed_origins {
        Some(origins) if !origins.is_empty() && origins != "*" => {
            let origins: Vec<_> = origins
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        }
        _ => CorsLayer::permissive(),
    }
}

/// Create the HTTP router with all API routes.
pub fn create_router(state: AppState) -> Router {
    let cors = create_cors_layer();

    let api_routes = Router::new()
        // Waiting room
        .route("/queue/join", post(queue::join_queue))
        .route("/queue/poll", get(queue::poll_queue))
        .route("/queue/leave", put(queue::leave_queue))
        // Admission gate
        .route("/queue/admit", post(queue::admit_head))
        // Stats & operator surface
        .route("/queue/stats", get(admin::get_stats))
        .route("/queue/first", get(admin::head_ticket))
        .route("/server/clear", post(admin::clear_store))
        // Health
        .route("/health", get(admin::health_check))
        .with_state(state);

    Router::new()
        .merge(api_routes)
        .merge(Scalar::with_url("/docs", openapi::ApiDoc::openapi()))
        .layer(cors)
}

#[cfg(test)]
mod tests;
