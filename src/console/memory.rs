//! In-memory [`ExchangeAdmin`] back end.

use super::admin::{AdminError, ExchangeAdmin, StockInfo, UserInfo};
use crate::utils::current_time_millis;
use dashmap::DashMap;
use parking_lot::Mutex;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

/// A notification accepted for delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    /// Unique id
    pub id: Uuid,
    /// Recipient; 0 when `is_global`
    pub user_id: u32,
    /// Message body
    pub text: String,
    /// Sent to every user
    pub is_global: bool,
    /// Milliseconds since the Unix epoch
    pub created_at: u64,
}

/// A published market event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarketEvent {
    /// Unique id
    pub id: Uuid,
    /// Stock concerned; 0 when `is_global`
    pub stock_id: u32,
    /// Short headline
    pub headline: String,
    /// Brief text
    pub text: String,
    /// Applies to every stock
    pub is_global: bool,
    /// Milliseconds since the Unix epoch
    pub created_at: u64,
}

/// Users, stocks, notifications and market events held in process memory.
///
/// Useful as a stand-in for the database-backed exchange in tests and demos.
#[derive(Debug, Default)]
pub struct InMemoryExchange {
    users: DashMap<u32, UserInfo>,
    stocks: DashMap<u32, StockInfo>,
    notifications: Mutex<Vec<Notification>>,
    market_events: Mutex<Vec<MarketEvent>>,
}

impl InMemoryExchange {
    /// Create an exchange with no users and no stocks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register or replace a user.
    pub fn add_user(&self, id: u32, name: &str) {
        self.users.insert(
            id,
            UserInfo {
                id,
                name: name.to_string(),
            },
        );
    }

    /// List or replace a stock.
    pub fn add_stock(&self, stock: StockInfo) {
        self.stocks.insert(stock.id, stock);
    }

    /// Notifications sent so far, oldest first.
    #[must_use]
    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.lock().clone()
    }

    /// Market events published so far, oldest first.
    #[must_use]
    pub fn market_events(&self) -> Vec<MarketEvent> {
        self.market_events.lock().clone()
    }
}

impl ExchangeAdmin for InMemoryExchange {
    fn user(&self, user_id: u32) -> Result<UserInfo, AdminError> {
        self.users
            .get(&user_id)
            .map(|user| user.value().clone())
            .ok_or(AdminError::UserNotFound(user_id))
    }

    fn send_notification(
        &self,
        user_id: u32,
        text: &str,
        is_global: bool,
    ) -> Result<(), AdminError> {
        if !is_global && !self.users.contains_key(&user_id) {
            return Err(AdminError::UserNotFound(user_id));
        }
        let notification = Notification {
            id: Uuid::new_v4(),
            user_id: if is_global { 0 } else { user_id },
            text: text.to_string(),
            is_global,
            created_at: current_time_millis(),
        };
        info!(
            id = %notification.id,
            user_id = notification.user_id,
            is_global,
            "notification sent"
        );
        self.notifications.lock().push(notification);
        Ok(())
    }

    fn stock(&self, stock_id: u32) -> Result<StockInfo, AdminError> {
        self.stocks
            .get(&stock_id)
            .map(|stock| stock.value().clone())
            .ok_or(AdminError::StockNotFound(stock_id))
    }

    fn add_stocks_to_exchange(&self, stock_id: u32, new_stocks: u32) -> Result<(), AdminError> {
        let mut stock = self
            .stocks
            .get_mut(&stock_id)
            .ok_or(AdminError::StockNotFound(stock_id))?;
        stock.stocks_in_exchange = stock
            .stocks_in_exchange
            .checked_add(new_stocks)
            .ok_or_else(|| AdminError::Rejected("stock count overflow".to_string()))?;
        info!(
            stock_id,
            new_stocks,
            total = stock.stocks_in_exchange,
            "stocks added to exchange"
        );
        Ok(())
    }

    fn update_stock_price(&self, stock_id: u32, new_price: u32) -> Result<(), AdminError> {
        let mut stock = self
            .stocks
            .get_mut(&stock_id)
            .ok_or(AdminError::StockNotFound(stock_id))?;
        let old_price = stock.current_price;
        stock.current_price = new_price;
        info!(stock_id, old_price, new_price, "stock price overwritten");
        Ok(())
    }

    fn add_market_event(
        &self,
        stock_id: u32,
        headline: &str,
        text: &str,
        is_global: bool,
    ) -> Result<(), AdminError> {
        if !is_global && !self.stocks.contains_key(&stock_id) {
            return Err(AdminError::StockNotFound(stock_id));
        }
        let event = MarketEvent {
            id: Uuid::new_v4(),
            stock_id: if is_global { 0 } else { stock_id },
            headline: headline.to_string(),
            text: text.to_string(),
            is_global,
            created_at: current_time_millis(),
        };
        info!(id = %event.id, stock_id = event.stock_id, is_global, "market event published");
        self.market_events.lock().push(event);
        Ok(())
    }
}
