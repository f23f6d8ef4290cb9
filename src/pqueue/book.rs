//! The bid and ask queues of one listed symbol.

use super::ordering::OrderingMode;
use super::queue::PriorityQueue;
use tracing::info;

/// Independent bid and ask queues for a single symbol.
///
/// Each side owns its own lock and no method holds both at once. Any
/// coordination between the two sides (walking the tops to produce trades)
/// belongs to the matching loop.
pub struct OrderQueues<B, A> {
    symbol: String,
    bids: PriorityQueue<B>,
    asks: PriorityQueue<A>,
}

impl<B, A> OrderQueues<B, A> {
    /// Bids ordered highest price first, asks lowest price first.
    pub fn new(symbol: &str) -> Self {
        Self::with_modes(symbol, OrderingMode::FavorMaximum, OrderingMode::FavorMinimum)
    }

    /// Build both sides with explicit ordering modes.
    pub fn with_modes(symbol: &str, bid_mode: OrderingMode, ask_mode: OrderingMode) -> Self {
        info!(%symbol, %bid_mode, %ask_mode, "order queues created");
        Self {
            symbol: symbol.to_string(),
            bids: PriorityQueue::new(&format!("bids:{symbol}"), bid_mode),
            asks: PriorityQueue::new(&format!("asks:{symbol}"), ask_mode),
        }
    }

    /// Symbol these queues belong to
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Buy side
    #[must_use]
    pub fn bids(&self) -> &PriorityQueue<B> {
        &self.bids
    }

    /// Sell side
    #[must_use]
    pub fn asks(&self) -> &PriorityQueue<A> {
        &self.asks
    }
}

impl<B: Clone, A: Clone> OrderQueues<B, A> {
    /// Price of the best bid and of the best ask, read one side after the other.
    ///
    /// The pair is not an atomic snapshot of both sides.
    #[must_use]
    pub fn best_prices(&self) -> (Option<u32>, Option<u32>) {
        let bid = self.bids.peek_entry().map(|entry| entry.price);
        let ask = self.asks.peek_entry().map(|entry| entry.price);
        (bid, ask)
    }
}

impl<B, A> std::fmt::Debug for OrderQueues<B, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderQueues")
            .field("symbol", &self.symbol)
            .field("bids", &self.bids)
            .field("asks", &self.asks)
            .finish()
    }
}
