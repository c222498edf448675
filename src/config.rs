// config.rs — Compile-time defaults for a latency benchmark run.
//
// These are the values a run uses when no command-line flag overrides them.
// [`crate::bench::config::BenchConfig::default`] is built from them, so a bare
// `compress-bench` invocation reproduces the fixed-constant benchmark.

// Number of measured calls per (size, codec) pair.
pub const ITERATIONS: u32 = 1000;

// Compression level handed to every adapter.
// Only level 1 is exercised by the default run.
pub const LEVEL: i32 = 1;

// History window, in bits, for adapters that take one (ISA-L `hist_bits`).
pub const WINDOW_BITS: u32 = 10;

// Largest history window ISA-L accepts (32 KiB).
pub const WINDOW_BITS_MAX: u32 = 15;

// Scale factor from summed nanoseconds to microseconds.
pub const NANO_TO_MICRO: f64 = 0.001;

// Input sizes under test, in bytes, in the order they are run.
pub const BUFFER_SIZES: [usize; 16] = [
    1, 2, 4, 8, 16, 32, 64, 128, 256, 512, 1024, 2048, 4096, 8192, 16384, 32768,
];
