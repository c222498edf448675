//! Benchmark configuration: runtime parameters for a latency run.
//!
//! [`BenchConfig`] holds every tuneable of a run: the size list, iteration
//! count, compression level, history window, seed, codec filter and failure
//! policy. [`Default`] reproduces the built-in constants from
//! [`crate::config`]; the builder-style setters let callers adjust it before
//! handing it to [`super::runner::run_latency_bench`].

use crate::config::{BUFFER_SIZES, ITERATIONS, LEVEL, WINDOW_BITS, WINDOW_BITS_MAX};
use crate::error::{BenchError, Result};

/// Runtime parameters controlling a single benchmark session.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchConfig {
    /// Verbosity level: 0 = silent, 1 = errors, 2 = results (default),
    /// 3 = run header, 4 = per-size progress.
    pub display_level: u32,

    /// Measured calls per (size, codec) pair (default: [`ITERATIONS`]).
    pub iterations: u32,

    /// Level handed to every adapter (default: [`LEVEL`]).
    pub level: i32,

    /// History window in bits for adapters that take one (default: [`WINDOW_BITS`]).
    pub window_bits: u32,

    /// Input sizes in bytes, run in this order (default: [`BUFFER_SIZES`]).
    pub sizes: Vec<usize>,

    /// Seed for the random source. `None` seeds from the current time.
    pub seed: Option<u64>,

    /// Registered names to keep. Empty means every registered codec.
    pub codecs: Vec<String>,

    /// When `true`, a failing codec is reported as failed for that size and
    /// the run continues. When `false` (default), the first failure ends the run.
    pub keep_going: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            display_level: 2,
            iterations: ITERATIONS,
            level: LEVEL,
            window_bits: WINDOW_BITS,
            sizes: BUFFER_SIZES.to_vec(),
            seed: None,
            codecs: Vec::new(),
            keep_going: false,
        }
    }
}

impl BenchConfig {
    // ── Setters ───────────────────────────────────────────────────────────────

    pub fn set_notification_level(&mut self, level: u32) -> &mut Self {
        self.display_level = level;
        self
    }

    pub fn set_iterations(&mut self, iterations: u32) -> &mut Self {
        self.iterations = iterations;
        self
    }

    pub fn set_level(&mut self, level: i32) -> &mut Self {
        self.level = level;
        self
    }

    pub fn set_window_bits(&mut self, window_bits: u32) -> &mut Self {
        self.window_bits = window_bits;
        self
    }

    pub fn set_sizes(&mut self, sizes: &[usize]) -> &mut Self {
        self.sizes = sizes.to_vec();
        self
    }

    /// Fix the seed so two runs generate identical input streams.
    pub fn set_seed(&mut self, seed: Option<u64>) -> &mut Self {
        self.seed = seed;
        self
    }

    /// Restrict the run to the named codecs. Registration order is kept
    /// regardless of the order given here.
    pub fn set_codecs<S: AsRef<str>>(&mut self, names: &[S]) -> &mut Self {
        self.codecs = names.iter().map(|n| n.as_ref().to_owned()).collect();
        self
    }

    pub fn set_keep_going(&mut self, keep_going: bool) -> &mut Self {
        self.keep_going = keep_going;
        self
    }

    /// Reject settings no run can execute.
    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(BenchError::InvalidConfig("iterations must be at least 1".into()));
        }
        if self.sizes.is_empty() {
            return Err(BenchError::InvalidConfig("size list is empty".into()));
        }
        if self.window_bits > WINDOW_BITS_MAX {
            return Err(BenchError::InvalidConfig(format!(
                "window bits {} exceeds maximum {}",
                self.window_bits, WINDOW_BITS_MAX
            )));
        }
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
