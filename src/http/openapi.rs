//! OpenAPI documentation for the waitq HTTP API.

use utoipa::OpenApi;

use super::admin::{self, HealthResponse};
use super::queue;
use super::types::{
    AdmitResponse, JoinRequest, JoinResponse, PollResponse, StatsResponse,
};
use crate::queue::TicketInfo;

/// waitq OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "waitq API",
        version = "0.1.0",
        description = "Virtual waiting-room admission controller"
    ),
    tags(
        (name = "Queue", description = "Waiting-room operations"),
        (name = "Stats", description = "Queue statistics"),
        (name = "Server", description = "Operator surface"),
        (name = "Health", description = "Health checks")
    ),
    paths(
        queue::join_queue,
        queue::poll_queue,
        queue::leave_queue,
        queue::admit_head,
        admin::get_stats,
        admin::head_ticket,
        admin::clear_store,
        admin::health_check,
    ),
    components(schemas(
        JoinRequest,
        JoinResponse,
        PollResponse,
        AdmitResponse,
        StatsResponse,
        HealthResponse,
        TicketInfo,
    ))
)]
pub struct ApiDoc;
