use criterion::{criterion_group, criterion_main};

mod queue;

use queue::register_benchmarks as register_queue_benchmarks;

criterion_group!(benches, register_queue_benchmarks);

criterion_main!(benches);
