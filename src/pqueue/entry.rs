//! Heap slot contents.

use serde::Serialize;

/// A payload stored with the price and quantity it is ranked by.
///
/// The payload is opaque to the queue and is handed back unchanged on pop.
/// Callers sharing orders with a registry usually store an `Arc<Order>`.
/// An entry is immutable; changing its price or quantity means popping it
/// and pushing it again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry<P> {
    /// The caller-owned order reference
    pub payload: P,
    /// Price in currency minor units
    pub price: u32,
    /// Outstanding quantity
    pub quantity: u32,
}

impl<P> Entry<P> {
    /// Create a new entry
    pub fn new(payload: P, price: u32, quantity: u32) -> Self {
        Self {
            payload,
            price,
            quantity,
        }
    }

    /// Consume the entry and return its payload
    #[inline]
    pub fn into_payload(self) -> P {
        self.payload
    }
}
