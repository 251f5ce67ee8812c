//! Ticket identifier generation and validation.
//!
//! The queue store does not mint its own identifiers; it is handed a
//! generator at construction time. This keeps the token format a transport
//! concern and lets tests inject deterministic identifiers.

use tracing::error;
use uuid::Uuid;

/// Opaque-token generator and syntactic validator.
///
/// `generate` must return a unique token per call; the queue store does not
/// deduplicate. `validate` is a pure syntactic check with no state, used by
/// the transport layer to reject malformed tokens before the store is hit.
pub trait IdentifierProvider: Send + Sync {
    fn generate(&self) -> String;
    fn validate(&self, token: &str) -> bool;
}

/// Production provider backed by random UUID v4 tokens.
#[derive(Debug, Default)]
pub struct UuidIdentifiers;

impl IdentifierProvider for UuidIdentifiers {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }

    fn validate(&self, token: &str) -> bool {
        match Uuid::parse_str(token) {
            Ok(_) => true,
            Err(e) => {
                error!(token = %token, error = %e, "invalid identifier");
                false
            }
        }
    }
}
