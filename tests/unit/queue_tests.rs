//! Integration tests for the public queue API.

use orderqueue_rs::prelude::*;
use std::sync::Arc;
use std::thread;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Helper
// ---------------------------------------------------------------------------

fn drain<P>(queue: &PriorityQueue<P>) -> Vec<P> {
    std::iter::from_fn(|| queue.pop_best()).collect()
}

// ---------------------------------------------------------------------------
// Single queue
// ---------------------------------------------------------------------------

#[test]
fn bid_queue_pops_highest_price_first() {
    let bids = PriorityQueue::new("bids", OrderingMode::FavorMaximum);
    bids.push("A", 100, 10);
    bids.push("B", 105, 5);
    bids.push("C", 105, 8);
    bids.push("D", 101, 1);

    assert_eq!(bids.size(), 4);
    assert_eq!(drain(&bids), vec!["C", "B", "D", "A"]);
    assert!(bids.is_empty());
    assert_eq!(bids.pop_best(), None);
}

#[test]
fn ask_queue_pops_lowest_price_first() {
    let asks = PriorityQueue::new("asks", OrderingMode::FavorMinimum);
    asks.push("A", 100, 10);
    asks.push("B", 105, 5);
    asks.push("C", 105, 8);
    asks.push("D", 101, 1);

    assert_eq!(drain(&asks), vec!["A", "D", "C", "B"]);
}

#[test]
fn peek_does_not_consume() {
    let asks = PriorityQueue::new("asks", OrderingMode::FavorMinimum);
    assert_eq!(asks.peek_best(), None::<u32>);

    asks.push(7, 250, 3);
    asks.push(9, 240, 1);
    assert_eq!(asks.peek_best(), Some(9));
    assert_eq!(asks.peek_best(), Some(9));
    assert_eq!(asks.size(), 2);

    let top = asks.peek_entry().expect("non-empty");
    assert_eq!((top.price, top.quantity), (240, 1));
}

#[test]
fn pop_entry_reports_price_and_quantity() {
    let bids = PriorityQueue::new("bids", OrderingMode::FavorMaximum);
    bids.push("x", 10, 4);
    let entry = bids.pop_entry().expect("non-empty");
    assert_eq!(entry, Entry::new("x", 10, 4));
    assert_eq!(entry.into_payload(), "x");
}

#[test]
fn extreme_keys_are_ordered() {
    let bids = PriorityQueue::new("bids", OrderingMode::FavorMaximum);
    bids.push("zero", 0, 0);
    bids.push("max", u32::MAX, u32::MAX);
    bids.push("max-small", u32::MAX, 0);
    assert_eq!(drain(&bids), vec!["max", "max-small", "zero"]);
}

#[test]
fn queue_can_be_refilled_after_draining() {
    let bids = PriorityQueue::with_capacity("bids", OrderingMode::FavorMaximum, 4);
    for round in 0..3u32 {
        for price in 0..10 {
            bids.push(round * 100 + price, price, 1);
        }
        assert_eq!(bids.size(), 10);
        assert_eq!(bids.pop_best(), Some(round * 100 + 9));
        drain(&bids);
        assert!(bids.is_empty());
    }
}

#[test]
fn payloads_need_not_be_clone() {
    struct Order {
        id: Uuid,
    }
    let bids = PriorityQueue::new("bids", OrderingMode::FavorMaximum);
    let id = Uuid::new_v4();
    bids.push(Order { id }, 1, 1);
    assert_eq!(bids.pop_best().map(|order| order.id), Some(id));
}

// ---------------------------------------------------------------------------
// Bid and ask pair
// ---------------------------------------------------------------------------

#[test]
fn order_queues_pair_sides() {
    let book: DefaultOrderQueues = OrderQueues::new("INFY");
    assert_eq!(book.symbol(), "INFY");
    assert_eq!(book.bids().name(), "bids:INFY");
    assert_eq!(book.asks().name(), "asks:INFY");
    assert_eq!(book.bids().ordering(), OrderingMode::FavorMaximum);
    assert_eq!(book.asks().ordering(), OrderingMode::FavorMinimum);
    assert_eq!(book.best_prices(), (None, None));

    let bid = Uuid::new_v4();
    let ask = Uuid::new_v4();
    book.bids().push(bid, 99, 10);
    book.bids().push(Uuid::new_v4(), 97, 10);
    book.asks().push(ask, 101, 10);
    book.asks().push(Uuid::new_v4(), 103, 10);

    assert_eq!(book.best_prices(), (Some(99), Some(101)));
    assert_eq!(book.bids().pop_best(), Some(bid));
    assert_eq!(book.asks().pop_best(), Some(ask));
    assert_eq!(book.best_prices(), (Some(97), Some(103)));
}

#[test]
fn dominance_policies_are_exported() {
    let max: Dominance = OrderingMode::FavorMaximum.dominance();
    assert!(max(100, 5, 105, 1));
    assert!(high_price_first(100, 5, 100, 6));
    assert!(low_price_first(105, 5, 100, 1));
    assert!(!low_price_first(100, 5, 100, 5));
}

// ---------------------------------------------------------------------------
// Concurrency
// ---------------------------------------------------------------------------

#[test]
fn concurrent_producers_and_consumers_lose_nothing() {
    const PRODUCERS: u32 = 4;
    const PER_PRODUCER: u32 = 500;

    let asks = Arc::new(PriorityQueue::new("asks", OrderingMode::FavorMinimum));
    let producers: Vec<_> = (0..PRODUCERS)
        .map(|p| {
            let asks = Arc::clone(&asks);
            thread::spawn(move || {
                for i in 0..PER_PRODUCER {
                    let id = p * PER_PRODUCER + i;
                    asks.push(id, (id * 7919) % 1000, id % 13);
                }
            })
        })
        .collect();
    let consumers: Vec<_> = (0..2)
        .map(|_| {
            let asks = Arc::clone(&asks);
            thread::spawn(move || {
                let mut taken = Vec::new();
                for _ in 0..300 {
                    if let Some(id) = asks.pop_best() {
                        taken.push(id);
                    }
                }
                taken
            })
        })
        .collect();

    for producer in producers {
        producer.join().expect("producer");
    }
    let mut seen: Vec<u32> = consumers
        .into_iter()
        .flat_map(|consumer| consumer.join().expect("consumer"))
        .collect();
    seen.extend(drain(&asks));
    seen.sort_unstable();

    let expected: Vec<u32> = (0..PRODUCERS * PER_PRODUCER).collect();
    assert_eq!(seen, expected);
}
