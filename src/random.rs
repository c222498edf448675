//! Pseudo-random input generation.
//!
//! Every measurement fills a freshly allocated input buffer from a
//! [`RandomSource`]. The source is passed explicitly rather than living in a
//! process global, so tests can substitute a deterministic one. Nothing here
//! is cryptographically secure; the bytes only need enough variety to keep the
//! compressors honest.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::error::{BenchError, Result};

/// A seedable byte generator.
pub trait RandomSource {
    /// Reset the generator to the state derived from `seed`.
    fn init(&mut self, seed: u64);

    /// Overwrite every byte of `buf`.
    fn next_bytes(&mut self, buf: &mut [u8]);
}

/// [`RandomSource`] backed by [`StdRng`].
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        SeededRandom { rng: StdRng::seed_from_u64(seed) }
    }

    /// Seeded from the current wall-clock time.
    pub fn from_time() -> Self {
        Self::new(time_seed())
    }
}

impl Default for SeededRandom {
    fn default() -> Self {
        Self::from_time()
    }
}

impl RandomSource for SeededRandom {
    fn init(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    fn next_bytes(&mut self, buf: &mut [u8]) {
        self.rng.fill_bytes(buf);
    }
}

/// Seed derived from the current time, in seconds since the Unix epoch.
///
/// A clock set before 1970 yields 0.
pub fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Fill the first `len` bytes of `buf` from `rng`.
///
/// Fails with [`BenchError::InvalidBuffer`] when `buf` is shorter than `len`.
pub fn fill_buffer_rand(rng: &mut dyn RandomSource, buf: &mut [u8], len: usize) -> Result<()> {
    let actual = buf.len();
    let dst = buf
        .get_mut(..len)
        .ok_or(BenchError::InvalidBuffer { expected: len, actual })?;
    rng.next_bytes(dst);
    Ok(())
}

/// Allocate a zeroed buffer of exactly `len` bytes without aborting on OOM.
///
/// `codec` and `what` only label the error.
pub fn alloc_buffer(len: usize, codec: &'static str, what: &'static str) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| BenchError::Allocation { codec, what, size: len })?;
    buf.resize(len, 0);
    Ok(buf)
}
