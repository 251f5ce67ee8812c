//! Structured logging setup.
//!
//! Uses `tracing` with an env-filter so verbosity can be tuned per module
//! via `RUST_LOG` (e.g. `RUST_LOG=waitq::queue=debug`).

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// Defaults to `info` level when `RUST_LOG` is unset. Safe to call once at
/// process startup; tests skip this and rely on the default noop subscriber.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
