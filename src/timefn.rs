// timefn - high-resolution monotonic timer used around each compression call
//
// std::time::Instant is monotonic on every supported platform, so a span can
// never be negative. Spans are reported as signed 64-bit nanoseconds so they
// can be summed directly into a latency accumulator.

use std::time::Instant;

/// Signed nanosecond duration, the unit every adapter reports.
pub type LatencyNs = i64;

/// Opaque timestamp. The absolute value is not meaningful;
/// use it only to compute a span between two measurements.
#[derive(Clone, Copy, Debug)]
pub struct TimeT {
    pub(crate) t: Instant,
}

impl TimeT {
    pub fn new() -> Self {
        TimeT { t: Instant::now() }
    }
}

impl Default for TimeT {
    fn default() -> Self {
        TimeT::new()
    }
}

/// Returns the current monotonic timestamp.
#[inline]
pub fn get_time() -> TimeT {
    TimeT { t: Instant::now() }
}

/// Nanoseconds between `clock_start` and `clock_end`.
///
/// Saturates at `i64::MAX` (about 292 years) and at zero if the arguments are
/// passed in the wrong order.
#[inline]
pub fn span_ns(clock_start: TimeT, clock_end: TimeT) -> LatencyNs {
    let ns = clock_end.t.saturating_duration_since(clock_start.t).as_nanos();
    LatencyNs::try_from(ns).unwrap_or(LatencyNs::MAX)
}

/// Nanoseconds elapsed since `clock_start`.
#[inline]
pub fn clock_span_ns(clock_start: TimeT) -> LatencyNs {
    span_ns(clock_start, get_time())
}
