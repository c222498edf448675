// compress-bench — single-call deflate latency benchmark

pub mod config;
pub mod error;
pub mod timefn;
pub mod random;
pub mod codec;
pub mod bench;
pub mod cli;

pub const VERSION_STRING: &str = env!("CARGO_PKG_VERSION");

// ── Top-level re-exports ──────────────────────────────────────────────────────
pub use bench::{bench_registered, run_latency_bench, BenchConfig, RunSummary};
pub use codec::{registered_codecs, Codec, HandleLedger, Sample};
pub use error::{BenchError, Result};
pub use random::{RandomSource, SeededRandom};
