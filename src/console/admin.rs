//! Administrative operations the console drives.
//!
//! The console never touches exchange state directly: every privileged action
//! goes through an [`ExchangeAdmin`] implementation supplied at construction.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors reported by an [`ExchangeAdmin`] implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum AdminError {
    /// No user is registered under this id
    #[error("No user with id {0}")]
    UserNotFound(u32),

    /// No stock is listed under this id
    #[error("No stock with id {0}")]
    StockNotFound(u32),

    /// The back end refused the operation
    #[error("{0}")]
    Rejected(String),
}

/// Public view of a registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    /// User id, never 0
    pub id: u32,
    /// Display name
    pub name: String,
}

/// Public view of a listed stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockInfo {
    /// Stock id, never 0
    pub id: u32,
    /// Ticker
    pub short_name: String,
    /// Company name shown in confirmations
    pub full_name: String,
    /// Last price in currency minor units
    pub current_price: u32,
    /// Units the exchange itself still holds for sale
    pub stocks_in_exchange: u32,
}

/// Privileged exchange operations exposed to operators.
///
/// Id `0` is reserved: [`send_notification`](Self::send_notification) with
/// `is_global` broadcasts to every user and
/// [`add_market_event`](Self::add_market_event) with `is_global` applies to
/// every stock.
pub trait ExchangeAdmin: Send + Sync {
    /// Look up a user.
    fn user(&self, user_id: u32) -> Result<UserInfo, AdminError>;

    /// Send `text` to one user, or to all users when `is_global`.
    fn send_notification(&self, user_id: u32, text: &str, is_global: bool)
    -> Result<(), AdminError>;

    /// Look up a stock.
    fn stock(&self, stock_id: u32) -> Result<StockInfo, AdminError>;

    /// Make `new_stocks` additional units of a stock available for sale.
    fn add_stocks_to_exchange(&self, stock_id: u32, new_stocks: u32) -> Result<(), AdminError>;

    /// Overwrite the current price of a stock.
    fn update_stock_price(&self, stock_id: u32, new_price: u32) -> Result<(), AdminError>;

    /// Publish a market event for one stock, or for all stocks when `is_global`.
    fn add_market_event(
        &self,
        stock_id: u32,
        headline: &str,
        text: &str,
        is_global: bool,
    ) -> Result<(), AdminError>;
}
