//! BFS benchmark harness: draws, loops and averages on top of the graph core.

pub mod config;
pub mod report;
pub mod runner;

pub use config::{BenchConfig, DEFAULT_MAX_RETRIES, DEFAULT_WARMUP_LOOPS};
pub use report::{mean, BenchObserver, BenchReport, DrawSummary, LoopSample, NoopObserver};
pub use runner::{select_distinct, BenchRunner};
