//! Write operations: join, leave, clear.

use std::sync::Arc;

use tracing::{debug, info};

use super::store::{QueueError, QueueStore, StoreState};
use super::types::Ticket;

impl QueueStore {
    /// Add a participant at the tail of the queue and return its new
    /// identifier.
    ///
    /// The ticket lands in the open shard; when that shard is at capacity a
    /// fresh shard is allocated first, so the logical queue grows without
    /// bound while every physical segment stays scan-bounded. The shard
    /// append and the index insert happen under one write-lock hold, so no
    /// half-inserted ticket is ever observable.
    pub fn join(&self, display_label: impl Into<String>) -> Result<String, QueueError> {
        let mut state = self.write()?;
        let identifier = self.identifiers.generate();

        let shard = state.open_shard_mut();
        let shard_index = shard.index();
        let ticket = Arc::new(Ticket::new(
            identifier.clone(),
            display_label.into(),
            shard_index,
        ));
        shard.push(Arc::clone(&ticket));
        state.index.insert(identifier.clone(), ticket);

        debug!(identifier = %identifier, shard = shard_index, "ticket joined");
        Ok(identifier)
    }

    /// Remove a participant ("leave"). Returns false when the identifier is
    /// unknown. This is the only path that destroys a single ticket; admission
    /// never removes.
    pub fn remove(&self, identifier: &str) -> Result<bool, QueueError> {
        let mut state = self.write()?;
        let Some(ticket) = state.index.remove(identifier) else {
            return Ok(false);
        };

        if let Some(shard) = state.shard_mut(ticket.shard_index()) {
            shard.remove(identifier);
        }
        state.retire_drained_front();

        debug!(identifier = %identifier, "ticket left");
        Ok(true)
    }

    /// Destroy every ticket and reset to a single empty shard at index 0.
    /// Operator surface for full-reset scenarios, not client-facing.
    pub fn clear(&self) -> Result<(), QueueError> {
        let mut state = self.write()?;
        *state = StoreState::new();
        info!("queue store cleared");
        Ok(())
    }
}
