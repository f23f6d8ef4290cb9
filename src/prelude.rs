//! Prelude module that re-exports commonly used types and traits.
//!
//! Instead of importing each type individually, you can use:
//!
//! ```rust
//! use orderqueue_rs::prelude::*;
//! ```

// Queues
pub use crate::pqueue::{Entry, OrderQueues, OrderingMode, PriorityQueue};
pub use crate::pqueue::{Dominance, high_price_first, low_price_first};

// Configuration and logging
pub use crate::config::{Config, ConfigError};
pub use crate::logging::{LoggingError, setup_logger};

// Admin console
pub use crate::console::{
    AdminConsole, AdminError, Command, CommandOutcome, ConsoleError, ExchangeAdmin,
    InMemoryExchange, StockInfo, UserInfo,
};

// Utility functions
pub use crate::utils::current_time_millis;

// Type aliases for common use cases
pub use crate::DefaultOrderQueues;
