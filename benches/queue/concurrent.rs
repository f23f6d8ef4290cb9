use criterion::{BenchmarkId, Criterion};
use orderqueue_rs::{OrderingMode, PriorityQueue};
use std::sync::{Arc, Barrier};
use std::thread;

/// Register multi-threaded contention benchmarks.
pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("PriorityQueue - Concurrent");
    group.sample_size(20);

    const OPS_PER_THREAD: u32 = 2_000;

    for &threads in &[2u32, 4, 8] {
        group.bench_with_input(
            BenchmarkId::new("mixed_push_pop", threads),
            &threads,
            |b, &threads| {
                b.iter(|| {
                    let queue = Arc::new(PriorityQueue::new("BENCH", OrderingMode::FavorMaximum));
                    let barrier = Arc::new(Barrier::new(threads as usize));
                    let handles: Vec<_> = (0..threads)
                        .map(|t| {
                            let queue = Arc::clone(&queue);
                            let barrier = Arc::clone(&barrier);
                            thread::spawn(move || {
                                barrier.wait();
                                for i in 0..OPS_PER_THREAD {
                                    let price = 1000 + (t * OPS_PER_THREAD + i) % 500;
                                    queue.push(i, price, 1 + i % 50);
                                    if i % 2 == 1 {
                                        let _ = queue.pop_best();
                                    }
                                    if i % 8 == 0 {
                                        let _ = queue.peek_best();
                                    }
                                }
                            })
                        })
                        .collect();
                    for handle in handles {
                        let _ = handle.join();
                    }
                    queue.size()
                });
            },
        );
    }

    group.finish();
}
