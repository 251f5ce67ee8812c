//! Core QueueStore struct, state, and locking discipline.
//!
//! The whole store (shard chain + identifier index + index bounds) is one
//! unit of mutual exclusion behind a single reader/writer lock. Lock
//! acquisition is non-blocking: every operation tries exactly once and fails
//! with `QueueError::Contention` when the lock is busy, pushing retry to the
//! caller instead of queueing waiters inside the store.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;

use crate::identifier::IdentifierProvider;

use super::types::{Shard, Ticket};

/// Failure modes of queue store operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueueError {
    /// The store lock was busy on the single acquisition attempt. The store
    /// never waits or retries internally.
    #[error("store lock is busy, retry later")]
    Contention,
    /// Head-of-queue operation on an empty queue.
    #[error("queue is empty")]
    Empty,
}

/// All mutable store state, guarded by one `RwLock`.
pub(crate) struct StoreState {
    pub(crate) min_index: usize,
    pub(crate) max_index: usize,
    /// Shard chain, front at `min_index`. Indices are contiguous and the
    /// chain always holds at least one shard.
    pub(crate) shards: VecDeque<Shard>,
    /// identifier -> ticket, each entry shared with the owning shard. Keys
    /// mirror the union of identifiers across all shards exactly.
    pub(crate) index: HashMap<String, Arc<Ticket>>,
}

impl StoreState {
    pub(crate) fn new() -> Self {
        let mut shards = VecDeque::new();
        shards.push_back(Shard::new(0));
        Self {
            min_index: 0,
            max_index: 0,
            shards,
            index: HashMap::new(),
        }
    }

    /// Shard holding the given index, if still in the active range.
    pub(crate) fn shard(&self, shard_index: usize) -> Option<&Shard> {
        shard_index
            .checked_sub(self.min_index)
            .and_then(|offset| self.shards.get(offset))
    }

    pub(crate) fn shard_mut(&mut self, shard_index: usize) -> Option<&mut Shard> {
        shard_index
            .checked_sub(self.min_index)
            .and_then(|offset| self.shards.get_mut(offset))
    }

    /// The shard at `max_index`, the only one accepting arrivals. Rolls over
    /// to a fresh shard once the current one is at capacity.
    pub(crate) fn open_shard_mut(&mut self) -> &mut Shard {
        if self.shards.back().map_or(true, Shard::is_full) {
            self.max_index += 1;
            self.shards.push_back(Shard::new(self.max_index));
        }
        self.shards
            .back_mut()
            .expect("shard chain is never empty")
    }

    /// Drop fully drained shards from the front of the chain. Retirement is
    /// an optimization, not a correctness requirement; the open shard stays
    /// even when empty.
    pub(crate) fn retire_drained_front(&mut self) {
        while self.shards.len() > 1 && self.shards.front().is_some_and(Shard::is_empty) {
            self.shards.pop_front();
            self.min_index += 1;
        }
    }
}

/// Sharded FIFO waiting room.
///
/// Owns every ticket; a ticket exists exactly as long as it is present in
/// one shard and in the identifier index, and those two always agree.
/// Identifiers come from an injected generator collaborator.
pub struct QueueStore {
    pub(crate) state: RwLock<StoreState>,
    pub(crate) identifiers: Arc<dyn IdentifierProvider>,
}

impl QueueStore {
    pub fn new(identifiers: Arc<dyn IdentifierProvider>) -> Self {
        Self {
            state: RwLock::new(StoreState::new()),
            identifiers,
        }
    }

    /// Single-attempt read lock.
    #[inline]
    pub(crate) fn read(&self) -> Result<RwLockReadGuard<'_, StoreState>, QueueError> {
        self.state.try_read().ok_or(QueueError::Contention)
    }

    /// Single-attempt write lock.
    #[inline]
    pub(crate) fn write(&self) -> Result<RwLockWriteGuard<'_, StoreState>, QueueError> {
        self.state.try_write().ok_or(QueueError::Contention)
    }
}
