//! Latency benchmark entry points.
//!
//! [`bench_registered`] is the primary public API: it builds the registered
//! codec list, applies the configuration's codec filter, and hands the result
//! to [`runner::run_latency_bench`], which writes the report.
//!
//! [`config::BenchConfig`] controls the size list, iteration count, level,
//! seed and failure policy.

pub mod accumulator;
pub mod config;
pub mod report;
pub mod runner;

// Re-export public types so callers can use `bench::BenchConfig` directly.
pub use config::BenchConfig;
pub use runner::{run_latency_bench, RunSummary};

use std::io::Write;

use crate::codec::{registered_codecs, Codec};
use crate::error::{BenchError, Result};
use crate::random::RandomSource;

/// Keep the codecs named in `wanted`, in their original order.
///
/// An empty `wanted` keeps everything; an unknown name is a configuration error.
pub fn select_codecs<S: AsRef<str>>(
    codecs: Vec<Box<dyn Codec>>,
    wanted: &[S],
) -> Result<Vec<Box<dyn Codec>>> {
    if wanted.is_empty() {
        return Ok(codecs);
    }
    for name in wanted {
        let name = name.as_ref();
        if !codecs.iter().any(|c| c.name() == name) {
            let known: Vec<&str> = codecs.iter().map(|c| c.name()).collect();
            return Err(BenchError::InvalidConfig(format!(
                "unknown codec '{}' (known: {})",
                name,
                known.join(", ")
            )));
        }
    }
    Ok(codecs
        .into_iter()
        .filter(|c| wanted.iter().any(|w| w.as_ref() == c.name()))
        .collect())
}

/// Benchmark every registered codec selected by `config`.
pub fn bench_registered(
    config: &BenchConfig,
    rng: &mut dyn RandomSource,
    out: &mut dyn Write,
) -> Result<RunSummary> {
    let codecs = select_codecs(registered_codecs(config.window_bits), &config.codecs)?;
    run_latency_bench(&codecs, config, rng, out)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
