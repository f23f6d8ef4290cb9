//! Interactive administrative console.
//!
//! Operators talk to the console over any line-oriented transport that can
//! tag lines with a connection id. The first line from a connection names a
//! command; the command then prompts for its arguments and a `Y/N`
//! confirmation before calling into the exchange through [`ExchangeAdmin`].
//!
//! ```text
//! > sendnotif
//! Enter userId and notification text:
//! > 0 "Trading resumes at 10:00"
//! Are you sure you want to send 'Trading resumes at 10:00' to ALL users? [Y/N]
//! > Y
//! Sent
//! ```

/// Administrative operations and their error type.
pub mod admin;
pub mod args;
/// Command names, dialogues and outcomes.
pub mod commands;
pub mod error;
/// In-memory exchange back end.
pub mod memory;
pub mod repl;
pub mod session;

pub use admin::{AdminError, ExchangeAdmin, StockInfo, UserInfo};
pub use commands::{Command, CommandOutcome, PANIC_REPLY};
pub use error::ConsoleError;
pub use memory::{InMemoryExchange, MarketEvent, Notification};
pub use repl::AdminConsole;
pub use session::Session;
