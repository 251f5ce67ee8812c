//! Read operations: existence, position, admission flag, size.

use super::store::{QueueError, QueueStore};
use super::types::{Shard, TicketInfo};

impl QueueStore {
    /// Whether the identifier is currently waiting. Unknown identifiers are
    /// an ordinary `false`, never an error.
    pub fn contains(&self, identifier: &str) -> Result<bool, QueueError> {
        Ok(self.read()?.index.contains_key(identifier))
    }

    /// Zero-based count of tickets strictly ahead of this one in overall
    /// FIFO order, or `None` for unknown identifiers.
    ///
    /// Every shard with a smaller index is fully ahead, so their sizes are
    /// summed and only the target shard is scanned. Cost is the within-shard
    /// scan (at most `MAX_SHARD_SIZE`) plus one pass over the shard chain,
    /// independent of total queue length.
    pub fn position(&self, identifier: &str) -> Result<Option<usize>, QueueError> {
        let state = self.read()?;
        let Some(ticket) = state.index.get(identifier) else {
            return Ok(None);
        };

        let shard_index = ticket.shard_index();
        let ahead: usize = state
            .shards
            .iter()
            .take_while(|s| s.index() < shard_index)
            .map(Shard::len)
            .sum();

        Ok(state
            .shard(shard_index)
            .and_then(|shard| shard.offset_of(identifier))
            .map(|offset| ahead + offset))
    }

    /// O(1) admission-flag check via the identifier index; the flag lives on
    /// the ticket itself, so no position needs to be derived. Unknown
    /// identifiers are simply not admittable.
    pub fn is_admittable(&self, identifier: &str) -> Result<bool, QueueError> {
        let state = self.read()?;
        Ok(state
            .index
            .get(identifier)
            .is_some_and(|ticket| ticket.is_admittable()))
    }

    /// True iff every shard in the active range is empty.
    pub fn is_empty(&self) -> Result<bool, QueueError> {
        Ok(self.read()?.shards.iter().all(Shard::is_empty))
    }

    /// Total number of waiting tickets across all shards.
    pub fn len(&self) -> Result<usize, QueueError> {
        Ok(self.read()?.shards.iter().map(Shard::len).sum())
    }

    /// Snapshot of the head ticket. An empty queue is a typed error so
    /// callers that skip the `is_empty` check still get a safe failure.
    pub fn first(&self) -> Result<TicketInfo, QueueError> {
        let state = self.read()?;
        state
            .shards
            .iter()
            .find_map(|shard| shard.head())
            .map(|ticket| ticket.info())
            .ok_or(QueueError::Empty)
    }

    /// Number of shards in the active range.
    pub fn shard_count(&self) -> Result<usize, QueueError> {
        Ok(self.read()?.shards.len())
    }
}
