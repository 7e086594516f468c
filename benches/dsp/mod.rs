//! Benchmarks for the closed-form filter responses.

mod filter;

pub use filter::bench_filter;
