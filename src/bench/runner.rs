//! Benchmark runner: the size → codec → iteration loop.
//!
//! [`run_latency_bench`] seeds the random source once, then for every size in
//! the configuration measures each codec `iterations` times, sums the
//! latencies into a fresh [`LatencyAccumulator`], and writes the size's block
//! of the report before moving on.

use std::io::Write;

use super::accumulator::LatencyAccumulator;
use super::config::BenchConfig;
use super::report::SizeReport;
use crate::cli::constants::COMPRESSOR_NAME;
use crate::codec::Codec;
use crate::error::Result;
use crate::random::{time_seed, RandomSource};
use crate::timefn::LatencyNs;

/// Everything a finished run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// Seed the random source was initialised with.
    pub seed: u64,
    /// One report per size, in run order.
    pub reports: Vec<SizeReport>,
}

impl RunSummary {
    /// (size, codec) pairs that failed. Always 0 unless `keep_going` was set.
    pub fn failures(&self) -> usize {
        self.reports.iter().map(SizeReport::failures).sum()
    }
}

/// Measure `codec` `iterations` times at `input_size` and return the summed
/// latency.
pub fn measure_codec(
    codec: &dyn Codec,
    input_size: usize,
    level: i32,
    iterations: u32,
    rng: &mut dyn RandomSource,
) -> Result<LatencyNs> {
    let mut total: LatencyNs = 0;
    for _ in 0..iterations {
        let sample = codec.measure(input_size, level, rng)?;
        debug_assert_eq!(sample.input_len, input_size);
        total = total.saturating_add(sample.latency_ns);
    }
    Ok(total)
}

/// One-line description of the run printed at display level 3.
pub fn run_header(codecs: &[Box<dyn Codec>], config: &BenchConfig, seed: u64) -> String {
    let names: Vec<&str> = codecs.iter().map(|c| c.name()).collect();
    format!(
        "{} {}: codecs [{}], {} iterations, level {}, window {} bits, seed {}",
        COMPRESSOR_NAME,
        crate::VERSION_STRING,
        names.join(", "),
        config.iterations,
        config.level,
        config.window_bits,
        seed
    )
}

/// Run the full latency benchmark over `codecs` and write the report to `out`.
///
/// # Errors
/// Returns the configuration error if [`BenchConfig::validate`] fails, the
/// first codec error unless [`BenchConfig::keep_going`] is set, and any error
/// writing to `out`.
pub fn run_latency_bench(
    codecs: &[Box<dyn Codec>],
    config: &BenchConfig,
    rng: &mut dyn RandomSource,
    out: &mut dyn Write,
) -> Result<RunSummary> {
    config.validate()?;

    let seed = config.seed.unwrap_or_else(time_seed);
    rng.init(seed);

    if config.display_level >= 3 {
        eprintln!("{}", run_header(codecs, config, seed));
    }

    // Raise scheduling priority to reduce OS-induced jitter in measurements.
    #[cfg(feature = "realtime-priority")]
    {
        // SAFETY: setpriority(2) adjusts only the calling process's scheduling
        // priority; it has no memory-safety implications.
        unsafe {
            libc::setpriority(libc::PRIO_PROCESS, 0, -20);
        }
    }

    let mut reports = Vec::with_capacity(config.sizes.len());
    for &size in &config.sizes {
        if config.display_level >= 4 {
            eprintln!("measuring {} bytes", size);
        }

        let mut acc = LatencyAccumulator::new(codecs.iter().map(|c| c.name()));
        let mut failed: Vec<&'static str> = Vec::new();

        for codec in codecs {
            match measure_codec(&**codec, size, config.level, config.iterations, rng) {
                Ok(total) => acc.add(codec.name(), total),
                Err(e) if config.keep_going => {
                    if config.display_level >= 1 {
                        eprintln!("{} bytes: {}", size, e);
                    }
                    failed.push(codec.name());
                }
                Err(e) => return Err(e),
            }
        }

        let report = SizeReport::from_accumulator(size, &acc, config.iterations, &failed);
        report.write_to(out)?;
        reports.push(report);
    }

    Ok(RunSummary { seed, reports })
}
