use criterion::{BenchmarkId, Criterion};
use orderqueue_rs::{OrderingMode, PriorityQueue};
use std::hint::black_box;

fn filled(count: u32, mode: OrderingMode) -> PriorityQueue<u32> {
    let queue = PriorityQueue::with_capacity("BENCH", mode, count as usize);
    for i in 0..count {
        queue.push(i, 1000 + (i * 7919) % 500, 1 + i % 50);
    }
    queue
}

/// Register single-threaded push, pop and peek benchmarks.
pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("PriorityQueue - Push/Pop");

    for &count in &[100u32, 1_000, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("push", count), &count, |b, &count| {
            b.iter_with_setup(
                || PriorityQueue::new("BENCH", OrderingMode::FavorMaximum),
                |queue| {
                    for i in 0..count {
                        queue.push(black_box(i), 1000 + (i * 7919) % 500, 1 + i % 50);
                    }
                    queue
                },
            );
        });

        group.bench_with_input(BenchmarkId::new("drain", count), &count, |b, &count| {
            b.iter_with_setup(
                || filled(count, OrderingMode::FavorMinimum),
                |queue| {
                    while let Some(payload) = queue.pop_best() {
                        black_box(payload);
                    }
                },
            );
        });
    }

    let queue = filled(10_000, OrderingMode::FavorMaximum);
    group.bench_function("peek_best", |b| b.iter(|| black_box(queue.peek_best())));

    group.finish();
}
