//! Queue store test suite.


use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::identifier::{IdentifierProvider, UuidIdentifiers};
use crate::queue::{AdmitOutcome, QueueError, QueueStore, MAX_SHARD_SIZE};

fn setup() -> Arc<QueueStore> {
    Arc::new(QueueStore::new(Arc::new(UuidIdentifiers)))
}

/// Deterministic provider for tests that assert on token values.
struct SequentialIdentifiers(AtomicU64);

impl SequentialIdentifiers {
    fn new() -> Self {
        Self(AtomicU64::new(0))
    }
}

impl IdentifierProvider for SequentialIdentifiers {
    fn generate(&self) -> String {
        format!("ticket-{}", self.0.fetch_add(1, Ordering::Relaxed))
    }

    fn validate(&self, token: &str) -> bool {
        token.starts_with("ticket-")
    }
}
