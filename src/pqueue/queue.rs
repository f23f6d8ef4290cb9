//! Lock-protected binary heap holding the outstanding orders of one side.

use super::entry::Entry;
use super::ordering::{Dominance, OrderingMode};
use parking_lot::RwLock;
use tracing::trace;

/// A thread-safe priority queue that always exposes its most dominant entry.
///
/// Entries live in a 1-indexed binary heap: slot 0 is a permanent empty
/// sentinel so that `parent(k) = k / 2` and `children(k) = 2k, 2k + 1`.
/// The live count is tracked separately from the backing vector.
///
/// # Locking
///
/// One reader/writer lock guards the heap. [`push`](Self::push) and
/// [`pop_best`](Self::pop_best) hold it exclusively for the append or
/// truncate plus the sift; [`peek_best`](Self::peek_best),
/// [`size`](Self::size) and [`is_empty`](Self::is_empty) hold it shared, so
/// readers only wait for an in-flight writer. Critical sections are pure heap
/// arithmetic bounded by O(log n); logging happens after the guard is dropped.
///
/// Exact `(price, quantity)` ties have no defined pop order.
pub struct PriorityQueue<P> {
    /// Identifier used in log fields and metric labels, e.g. `"bids:INFY"`
    name: String,

    /// Mode the comparator was bound from
    mode: OrderingMode,

    heap: RwLock<Heap<P>>,
}

struct Heap<P> {
    /// `items[0]` is always `None`; live entries occupy `1..=count`
    items: Vec<Option<Entry<P>>>,
    count: usize,
    comparator: Dominance,
}

impl<P> Heap<P> {
    fn with_capacity(comparator: Dominance, capacity: usize) -> Self {
        let mut items = Vec::with_capacity(capacity + 1);
        items.push(None);
        Self {
            items,
            count: 0,
            comparator,
        }
    }

    #[inline]
    fn key(&self, k: usize) -> (u32, u32) {
        // only called with 1 <= k <= count
        self.items[k]
            .as_ref()
            .map_or((0, 0), |entry| (entry.price, entry.quantity))
    }

    /// `true` when slot `j` dominates slot `i`.
    #[inline]
    fn less(&self, i: usize, j: usize) -> bool {
        let (price_i, qty_i) = self.key(i);
        let (price_j, qty_j) = self.key(j);
        (self.comparator)(price_i, qty_i, price_j, qty_j)
    }

    #[inline]
    fn exch(&mut self, i: usize, j: usize) {
        self.items.swap(i, j);
    }

    fn swim(&mut self, mut k: usize) {
        while k > 1 && self.less(k / 2, k) {
            self.exch(k / 2, k);
            k /= 2;
        }
    }

    fn sink(&mut self, mut k: usize) {
        while 2 * k <= self.count {
            let mut j = 2 * k;
            if j < self.count && self.less(j, j + 1) {
                j += 1;
            }
            if !self.less(k, j) {
                break;
            }
            self.exch(k, j);
            k = j;
        }
    }

    fn push(&mut self, entry: Entry<P>) {
        self.items.push(Some(entry));
        self.count += 1;
        self.swim(self.count);
    }

    fn pop(&mut self) -> Option<Entry<P>> {
        if self.count < 1 {
            return None;
        }
        let last = self.count;
        self.exch(1, last);
        let best = self.items.pop().flatten();
        self.count -= 1;
        self.sink(1);
        best
    }

    #[inline]
    fn root(&self) -> Option<&Entry<P>> {
        if self.count < 1 {
            return None;
        }
        self.items.get(1).and_then(Option::as_ref)
    }

    #[cfg(test)]
    fn heap_property_holds(&self) -> bool {
        (2..=self.count).all(|child| !self.less(child / 2, child))
            && self.items.len() == self.count + 1
            && self.items[0].is_none()
    }
}

impl<P> PriorityQueue<P> {
    /// Create an empty queue whose comparator is bound from `mode`.
    pub fn new(name: &str, mode: OrderingMode) -> Self {
        Self::with_capacity(name, mode, 0)
    }

    /// Create an empty queue with room for `capacity` entries before reallocating.
    pub fn with_capacity(name: &str, mode: OrderingMode, capacity: usize) -> Self {
        trace!(queue = %name, %mode, capacity, "priority queue created");
        Self {
            name: name.to_string(),
            mode,
            heap: RwLock::new(Heap::with_capacity(mode.dominance(), capacity)),
        }
    }

    /// Name used in log fields and metric labels.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ordering mode chosen at construction.
    #[must_use]
    pub fn ordering(&self) -> OrderingMode {
        self.mode
    }

    /// Insert `payload` ranked by `price` and `quantity`, then sift it up.
    ///
    /// Always succeeds. Price and quantity are not validated.
    pub fn push(&self, payload: P, price: u32, quantity: u32) {
        let entry = Entry::new(payload, price, quantity);
        let size = {
            let mut heap = self.heap.write();
            heap.push(entry);
            heap.count
        };
        trace!(queue = %self.name, price, quantity, size, "entry pushed");
        self.record_push(size);
    }

    /// Remove and return the most dominant payload, or `None` when empty.
    pub fn pop_best(&self) -> Option<P> {
        self.pop_entry().map(Entry::into_payload)
    }

    /// Remove and return the most dominant entry with its price and quantity.
    pub fn pop_entry(&self) -> Option<Entry<P>> {
        let (best, size) = {
            let mut heap = self.heap.write();
            let best = heap.pop();
            (best, heap.count)
        };
        if let Some(entry) = &best {
            trace!(
                queue = %self.name,
                price = entry.price,
                quantity = entry.quantity,
                size,
                "best entry popped"
            );
            self.record_pop(size);
        }
        best
    }

    /// Number of live entries.
    #[must_use]
    pub fn size(&self) -> usize {
        self.heap.read().count
    }

    /// `true` when the queue holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.read().count == 0
    }

    #[cfg(test)]
    pub(crate) fn heap_property_holds(&self) -> bool {
        self.heap.read().heap_property_holds()
    }

    #[cfg(feature = "metrics")]
    fn record_push(&self, size: usize) {
        metrics::counter!("orderqueue_push_total", "queue" => self.name.clone()).increment(1);
        metrics::gauge!("orderqueue_depth", "queue" => self.name.clone()).set(size as f64);
    }

    #[cfg(not(feature = "metrics"))]
    #[inline]
    fn record_push(&self, _size: usize) {}

    #[cfg(feature = "metrics")]
    fn record_pop(&self, size: usize) {
        metrics::counter!("orderqueue_pop_total", "queue" => self.name.clone()).increment(1);
        metrics::gauge!("orderqueue_depth", "queue" => self.name.clone()).set(size as f64);
    }

    #[cfg(not(feature = "metrics"))]
    #[inline]
    fn record_pop(&self, _size: usize) {}
}

impl<P: Clone> PriorityQueue<P> {
    /// Return the most dominant payload without removing it, or `None` when empty.
    #[must_use]
    pub fn peek_best(&self) -> Option<P> {
        self.heap.read().root().map(|entry| entry.payload.clone())
    }

    /// Return the most dominant entry, including its price and quantity.
    #[must_use]
    pub fn peek_entry(&self) -> Option<Entry<P>> {
        self.heap.read().root().cloned()
    }
}

impl<P> std::fmt::Debug for PriorityQueue<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("name", &self.name)
            .field("mode", &self.mode)
            .field("size", &self.size())
            .finish()
    }
}
