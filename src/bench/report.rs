//! Human-readable latency report.
//!
//! For every size the report prints
//!
//! ```text
//! 1024 bytes:
//! zlib->12.3457 us
//! libdeflate->4.1 us
//!
//! ```
//!
//! Means are rendered like a C++ `std::ostream` prints a `double` by default:
//! six significant digits in `%g` style.

use std::io::{self, Write};

use super::accumulator::LatencyAccumulator;
use crate::config::NANO_TO_MICRO;
use crate::timefn::LatencyNs;

const SIGNIFICANT_DIGITS: usize = 6;

/// Mean latency in microseconds of `total_ns` spread over `iterations` calls.
pub fn mean_us(total_ns: LatencyNs, iterations: u32) -> f64 {
    (total_ns as f64 * NANO_TO_MICRO) / f64::from(iterations)
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// Format `value` with six significant digits, `%g` style.
pub fn format_general(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_owned();
    }
    if value == 0.0 {
        return "0".to_owned();
    }

    // Round to the target precision first; the exponent of the rounded value
    // decides between fixed and scientific notation.
    let sci = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if exp < -4 || exp >= SIGNIFICANT_DIGITS as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exp.abs())
    } else {
        let decimals = (SIGNIFICANT_DIGITS as i32 - 1 - exp) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_owned()
    }
}

/// Result for one codec at one size.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportEntry {
    pub codec: &'static str,
    /// Sum of all measured latencies.
    pub total_ns: LatencyNs,
    /// Mean latency in microseconds, `None` if the codec failed at this size.
    pub mean_us: Option<f64>,
}

/// Report for one input size.
#[derive(Debug, Clone, PartialEq)]
pub struct SizeReport {
    pub size: usize,
    pub entries: Vec<ReportEntry>,
}

impl SizeReport {
    /// Build the report for `size` from the accumulated sums. Codecs named
    /// in `failed` are marked failed.
    pub fn from_accumulator(
        size: usize,
        acc: &LatencyAccumulator,
        iterations: u32,
        failed: &[&'static str],
    ) -> Self {
        let entries = acc
            .iter()
            .map(|(codec, total_ns)| ReportEntry {
                codec,
                total_ns,
                mean_us: if failed.contains(&codec) {
                    None
                } else {
                    Some(mean_us(total_ns, iterations))
                },
            })
            .collect();
        SizeReport { size, entries }
    }

    pub fn entry(&self, codec: &str) -> Option<&ReportEntry> {
        self.entries.iter().find(|e| e.codec == codec)
    }

    pub fn failures(&self) -> usize {
        self.entries.iter().filter(|e| e.mean_us.is_none()).count()
    }

    pub fn write_to(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{} bytes:", self.size)?;
        for entry in &self.entries {
            match entry.mean_us {
                Some(mean) => writeln!(out, "{}->{} us", entry.codec, format_general(mean))?,
                None => writeln!(out, "{}->failed", entry.codec)?,
            }
        }
        writeln!(out)?;
        out.flush()
    }
}
