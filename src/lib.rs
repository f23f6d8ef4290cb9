//! # Concurrency-Safe Order Queues
//!
//! Price-priority queues for the bid and ask sides of a simulated stock exchange, together
//! with the configuration loader, logging setup and interactive administrative console that
//! surround them in a running exchange server.
//!
//! ## Key Features
//!
//! - **Price Priority**: Each queue is a binary heap keyed by `(price, quantity)`. A queue
//!   built with [`OrderingMode::FavorMaximum`] yields the highest price first (bids); one built
//!   with [`OrderingMode::FavorMinimum`] yields the lowest price first (asks). At equal prices
//!   the larger quantity comes out first, on both sides.
//!
//! - **Thread Safety**: Every queue owns a single reader-writer lock. `push` and `pop_best`
//!   are exclusive, `peek_best`, `size` and `is_empty` may run in parallel, and every operation
//!   is linearizable.
//!
//! - **Opaque Payloads**: Queues are generic over the payload type. The queue never inspects
//!   a payload; it only orders by the price and quantity given at insertion.
//!
//! - **Admin Console**: A line-oriented console multiplexes command sessions over connection
//!   ids (`sendnotif`, `add_stocks_to_exchange`, `update_stock_price`, `add_market_event`),
//!   with argument parsing, `Y/N` confirmation and panic isolation per command.
//!
//! - **Ambient Stack**: JSON configuration via `serde`, structured logging via `tracing`
//!   with an optional size-rotated log file, and optional `metrics` counters behind the
//!   `metrics` feature.
//!
//! ## Example
//!
//! ```rust
//! use orderqueue_rs::prelude::*;
//!
//! let queues: OrderQueues<&str, &str> = OrderQueues::new("INFY");
//! queues.bids().push("bid-1", 101, 10);
//! queues.bids().push("bid-2", 103, 5);
//! queues.asks().push("ask-1", 105, 7);
//! queues.asks().push("ask-2", 104, 1);
//!
//! assert_eq!(queues.best_prices(), (Some(103), Some(104)));
//! assert_eq!(queues.bids().pop_best(), Some("bid-2"));
//! assert_eq!(queues.asks().pop_best(), Some("ask-2"));
//! ```
//!
//! ## Status
//! This project is currently in active development and is not yet suitable for production use.

pub mod config;
pub mod console;
pub mod logging;
pub mod pqueue;

/// Commonly used types, re-exported for glob import.
pub mod prelude;
mod utils;

pub use config::{Config, ConfigError};
pub use console::{AdminConsole, ConsoleError, ExchangeAdmin, InMemoryExchange};
pub use logging::{LoggingError, setup_logger};
pub use pqueue::{
    Dominance, Entry, OrderQueues, OrderingMode, PriorityQueue, high_price_first,
    low_price_first,
};
pub use utils::current_time_millis;

/// Queue pair whose payloads are order ids.
pub type DefaultOrderQueues = OrderQueues<uuid::Uuid, uuid::Uuid>;
