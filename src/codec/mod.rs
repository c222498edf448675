//! Codec adapters.
//!
//! Each backend is wrapped in a type implementing [`Codec`]. An adapter owns
//! nothing between calls: [`Codec::measure`] allocates its buffers and backend
//! handles, times exactly one one-shot compression call, and releases
//! everything before returning.
//!
//! | Adapter                      | Backend | Bound function |
//! |------------------------------|---------|----------------|
//! | [`zlib::ZlibCodec`]          | zlib via `flate2` | `compressBound` |
//! | [`libdeflate::LibdeflateCodec`] | libdeflate via `libdeflater` | `libdeflate_deflate_compress_bound` |
//! | [`isal::IsalCodec`]          | ISA-L igzip via `isal-sys` | `ISAL_DEF_MAX_HDR_SIZE + len` |
//!
//! Backend handles are wrapped in [`Tracked`] guards so a [`HandleLedger`] can
//! count how many were created and how many were released.

pub mod libdeflate;
pub mod zlib;
#[cfg(feature = "isal")]
pub mod isal;

use std::ops::{Deref, DerefMut};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::error::Result;
use crate::random::RandomSource;
use crate::timefn::LatencyNs;

/// Outcome of one timed compression call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    /// Wall-clock time of the compression call alone.
    pub latency_ns: LatencyNs,
    /// Length of the input buffer that was compressed.
    pub input_len: usize,
    /// Capacity of the output buffer, from the backend's bound function.
    pub output_capacity: usize,
}

/// A compression backend the driver can measure.
pub trait Codec {
    /// Registered name, used as the report label.
    fn name(&self) -> &'static str;

    /// Worst-case compressed size of `input_size` bytes at `level`.
    fn compress_bound(&self, input_size: usize, level: i32) -> Result<usize>;

    /// Generate `input_size` random bytes from `rng` and time one compression
    /// of them at `level`.
    fn measure(&self, input_size: usize, level: i32, rng: &mut dyn RandomSource) -> Result<Sample>;

    /// Ledger counting this adapter's backend handles.
    fn ledger(&self) -> &HandleLedger;
}

/// Paired allocation / release counters for backend handles.
#[derive(Debug, Default)]
pub struct HandleLedger {
    allocated: AtomicU64,
    released: AtomicU64,
}

impl HandleLedger {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn allocated(&self) -> u64 {
        self.allocated.load(Ordering::Relaxed)
    }

    pub fn released(&self) -> u64 {
        self.released.load(Ordering::Relaxed)
    }

    /// Handles allocated and not yet released.
    pub fn outstanding(&self) -> u64 {
        self.allocated().saturating_sub(self.released())
    }

    /// Wrap `handle` so its creation and drop are counted on this ledger.
    pub fn track<T>(self: &Arc<Self>, handle: T) -> Tracked<T> {
        self.allocated.fetch_add(1, Ordering::Relaxed);
        Tracked { handle, ledger: Arc::clone(self) }
    }
}

/// A backend handle whose drop is recorded on a [`HandleLedger`].
pub struct Tracked<T> {
    handle: T,
    ledger: Arc<HandleLedger>,
}

impl<T> Deref for Tracked<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.handle
    }
}

impl<T> DerefMut for Tracked<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.handle
    }
}

impl<T> Drop for Tracked<T> {
    fn drop(&mut self) {
        self.ledger.released.fetch_add(1, Ordering::Relaxed);
    }
}

/// Names of the adapters compiled into this build, in registration order.
pub fn codec_names() -> Vec<&'static str> {
    #[cfg_attr(not(feature = "isal"), allow(unused_mut))]
    let mut names = vec![zlib::NAME, libdeflate::NAME];
    #[cfg(feature = "isal")]
    names.push(isal::NAME);
    names
}

/// Every adapter compiled into this build, in registration order.
///
/// `window_bits` is the history window for backends that take one.
pub fn registered_codecs(window_bits: u32) -> Vec<Box<dyn Codec>> {
    #[cfg(not(feature = "isal"))]
    let _ = window_bits;

    #[cfg_attr(not(feature = "isal"), allow(unused_mut))]
    let mut codecs: Vec<Box<dyn Codec>> = vec![
        Box::new(zlib::ZlibCodec::new()),
        Box::new(libdeflate::LibdeflateCodec::new()),
    ];
    #[cfg(feature = "isal")]
    codecs.push(Box::new(isal::IsalCodec::new(window_bits)));
    codecs
}
