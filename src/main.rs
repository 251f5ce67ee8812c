mod http;
mod identifier;
mod queue;
mod telemetry;

use mimalloc::MiMalloc;
use tracing::{info, warn};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::signal;

use http::AppState;
use identifier::{IdentifierProvider, UuidIdentifiers};

const DEFAULT_HTTP_PORT: u16 = 8080;

/// Resolve on ctrl-c or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => {}
            Err(e) => {
                warn!(error = %e, "Failed to install Ctrl+C handler, continuing without it");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler, continuing without it");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize telemetry (structured logging)
    telemetry::init();

    let port = std::env::var("HTTP_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_HTTP_PORT);

    let identifiers: Arc<dyn IdentifierProvider> = Arc::new(UuidIdentifiers);
    let state = AppState::new(identifiers);
    let router = http::create_router(state);

    let listener = TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
    info!(
        version = env!("CARGO_PKG_VERSION"),
        port = port,
        endpoint = %format!("http://0.0.0.0:{}", port),
        "waitq server ready"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutdown complete");
    Ok(())
}
