//! Ticket type - one waiting participant's queue entry.

use std::sync::atomic::{AtomicBool, Ordering};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A waiting participant.
///
/// Identity (`identifier`, `display_label`, `shard_index`) is fixed at join
/// time; only the admission flag mutates. Tickets are shared between their
/// owning shard and the identifier index as `Arc<Ticket>`, so the flag is an
/// `AtomicBool`. All flag mutation happens under the store's write lock; the
/// atomic only exists so the shared reference stays immutable.
#[derive(Debug)]
pub struct Ticket {
    identifier: String,
    display_label: String,
    admittable: AtomicBool,
    shard_index: usize,
}

impl Ticket {
    pub fn new(identifier: String, display_label: String, shard_index: usize) -> Self {
        Self {
            identifier,
            display_label,
            admittable: AtomicBool::new(false),
            shard_index,
        }
    }

    #[inline]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    #[inline]
    pub fn display_label(&self) -> &str {
        &self.display_label
    }

    /// Index of the shard holding this ticket, assigned once at join time.
    #[inline]
    pub fn shard_index(&self) -> usize {
        self.shard_index
    }

    #[inline]
    pub fn is_admittable(&self) -> bool {
        self.admittable.load(Ordering::Relaxed)
    }

    /// Set the admission flag. Called at most once per ticket lifecycle,
    /// under the store's write lock; the flag is never reset.
    #[inline]
    pub(crate) fn mark_admittable(&self) {
        self.admittable.store(true, Ordering::Relaxed);
    }

    /// Snapshot for transport responses.
    pub fn info(&self) -> TicketInfo {
        TicketInfo {
            identifier: self.identifier.clone(),
            display_label: self.display_label.clone(),
            admittable: self.is_admittable(),
        }
    }
}

/// Serializable ticket snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TicketInfo {
    pub identifier: String,
    pub display_label: String,
    pub admittable: bool,
}
