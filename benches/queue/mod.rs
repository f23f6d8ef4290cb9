use criterion::Criterion;

mod concurrent;
mod push_pop;

/// Register all queue benchmarks.
pub fn register_benchmarks(c: &mut Criterion) {
    push_pop::register_benchmarks(c);
    concurrent::register_benchmarks(c);
}
