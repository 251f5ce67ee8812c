//! Queue store - sharded FIFO waiting room.
//!
//! ## Module Organization
//!
//! - `store.rs` - QueueStore struct, state, and the single-RwLock fail-fast
//!   locking discipline
//! - `types/` - Ticket and Shard data types
//!
//! ### Operations
//!
//! - `join.rs` - write operations (join, leave, clear)
//! - `poll.rs` - read operations (exists, position, admission flag, size)
//! - `admit.rs` - admission-flag protocol

mod admit;
mod join;
mod poll;
mod store;
pub mod types;

#[cfg(test)]
mod tests;

pub use admit::AdmitOutcome;
pub use store::{QueueError, QueueStore};
pub use types::{TicketInfo, MAX_SHARD_SIZE};
