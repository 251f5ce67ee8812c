//! Queue data types: Ticket and Shard.

mod shard;
mod ticket;

pub use shard::{Shard, MAX_SHARD_SIZE};
pub use ticket::{Ticket, TicketInfo};
