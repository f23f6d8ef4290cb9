//! Dominance policies deciding which of two entries sits closer to the heap root.
//!
//! A [`Dominance`] function is read as "B is considered for promotion over A":
//! it returns `true` when the entry described by `(price_b, qty_b)` must not
//! sit below the entry described by `(price_a, qty_a)`.
//!
//! # Modes
//!
//! - `OrderingMode::FavorMaximum`: highest price first (bid side).
//! - `OrderingMode::FavorMinimum`: lowest price first (ask side).
//!
//! In both modes an exact price tie is broken in favour of the larger pending
//! quantity. Equal `(price, quantity)` pairs never dominate each other.

use serde::{Deserialize, Serialize};

/// Comparator signature shared by both policies:
/// `(price_a, qty_a, price_b, qty_b) -> b dominates a`.
pub type Dominance = fn(u32, u32, u32, u32) -> bool;

/// Ordering mode selected when a queue is constructed.
///
/// The mode is independent from the payload type: a queue holding bids could
/// be built with either mode. An exchange surfaces the best bid by building
/// its bid queue with [`OrderingMode::FavorMaximum`] and its ask queue with
/// [`OrderingMode::FavorMinimum`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum OrderingMode {
    /// Highest price at the root. Bound to [`high_price_first`].
    #[default]
    FavorMaximum = 0,

    /// Lowest price at the root. Bound to [`low_price_first`].
    FavorMinimum = 1,
}

impl std::fmt::Display for OrderingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderingMode::FavorMaximum => write!(f, "FavorMaximum"),
            OrderingMode::FavorMinimum => write!(f, "FavorMinimum"),
        }
    }
}

impl OrderingMode {
    /// Returns the dominance policy bound to this mode.
    #[must_use]
    #[inline]
    pub fn dominance(self) -> Dominance {
        match self {
            OrderingMode::FavorMaximum => high_price_first,
            OrderingMode::FavorMinimum => low_price_first,
        }
    }
}

/// B dominates A when its price is higher, or when prices are equal and its
/// quantity is larger.
#[inline]
pub fn high_price_first(price_a: u32, qty_a: u32, price_b: u32, qty_b: u32) -> bool {
    if price_a < price_b {
        return true;
    }
    if price_a > price_b {
        return false;
    }
    qty_b > qty_a
}

/// B dominates A when its price is lower, or when prices are equal and its
/// quantity is larger.
#[inline]
pub fn low_price_first(price_a: u32, qty_a: u32, price_b: u32, qty_b: u32) -> bool {
    if price_a > price_b {
        return true;
    }
    if price_a < price_b {
        return false;
    }
    qty_b > qty_a
}
