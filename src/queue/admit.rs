//! Admission protocol - release the head ticket past the gate.

use tracing::info;

use super::store::{QueueError, QueueStore};
use super::types::Shard;

/// Result of an admission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdmitOutcome {
    /// Head ticket released; the holder observes the flag on its next poll.
    Admitted { identifier: String },
    /// Head was already released and has not left yet. The flag is untouched.
    Conflict,
    /// Nothing to admit.
    Empty,
}

impl QueueStore {
    /// Mark the head ticket admittable.
    ///
    /// Two-phase release: admission only flips the flag, it never removes
    /// the ticket. The participant polls, sees admittable, and calls leave
    /// once it has consumed its turn, so "you may proceed" and "you have
    /// finished" stay distinguishable and nobody behind the head moves until
    /// the leave.
    pub fn admit(&self) -> Result<AdmitOutcome, QueueError> {
        let state = self.write()?;
        let Some(head) = state.shards.iter().find_map(Shard::head) else {
            return Ok(AdmitOutcome::Empty);
        };

        if head.is_admittable() {
            return Ok(AdmitOutcome::Conflict);
        }

        head.mark_admittable();
        info!(identifier = %head.identifier(), "head ticket released");
        Ok(AdmitOutcome::Admitted {
            identifier: head.identifier().to_string(),
        })
    }
}
