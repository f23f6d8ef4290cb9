//! Price-priority queues for the two sides of an exchange.

/// Bid and ask queue pair for one symbol.
pub mod book;
pub mod entry;
/// Dominance policies and the ordering mode that selects them.
pub mod ordering;
pub mod queue;

pub use book::OrderQueues;
pub use entry::Entry;
pub use ordering::{Dominance, OrderingMode, high_price_first, low_price_first};
pub use queue::PriorityQueue;
