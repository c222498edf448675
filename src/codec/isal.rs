//! ISA-L (igzip) adapter.
//!
//! Uses the stateless deflate entry point: the whole input is handed over with
//! `end_of_stream` set, so one call produces the complete deflate stream. The
//! stream needs a scratch level buffer whose size comes from ISA-L's per-level
//! defaults, and a history window in bits.

use std::ptr;
use std::sync::Arc;

use isal_sys::igzip_lib as isal;

use super::{Codec, HandleLedger, Sample};
use crate::error::{BenchError, Result};
use crate::random::{alloc_buffer, fill_buffer_rand, RandomSource};
use crate::timefn::{get_time, span_ns};

pub const NAME: &str = "isal";

/// Level buffer sizes indexed by compression level.
const LEVEL_BUF_SIZES: [usize; 4] = [
    isal::ISAL_DEF_LVL0_DEFAULT as usize,
    isal::ISAL_DEF_LVL1_DEFAULT as usize,
    isal::ISAL_DEF_LVL2_DEFAULT as usize,
    isal::ISAL_DEF_LVL3_DEFAULT as usize,
];

/// Worst-case header overhead of a single stateless stream.
const MAX_HDR_SIZE: usize = isal::ISAL_DEF_MAX_HDR_SIZE as usize;

pub struct IsalCodec {
    window_bits: u32,
    ledger: Arc<HandleLedger>,
}

impl IsalCodec {
    pub fn new(window_bits: u32) -> Self {
        Self::with_ledger(window_bits, HandleLedger::new())
    }

    pub fn with_ledger(window_bits: u32, ledger: Arc<HandleLedger>) -> Self {
        IsalCodec { window_bits, ledger }
    }

    pub fn window_bits(&self) -> u32 {
        self.window_bits
    }
}

fn level_buf_size(level: i32) -> Result<usize> {
    usize::try_from(level)
        .ok()
        .and_then(|l| LEVEL_BUF_SIZES.get(l).copied())
        .ok_or(BenchError::UnsupportedLevel { codec: NAME, level })
}

fn stream_len(len: usize, what: &str) -> Result<u32> {
    u32::try_from(len).map_err(|_| BenchError::Codec {
        codec: NAME,
        detail: format!("{} of {} bytes exceeds the 32-bit stream limit", what, len),
    })
}

impl Codec for IsalCodec {
    fn name(&self) -> &'static str {
        NAME
    }

    fn compress_bound(&self, input_size: usize, level: i32) -> Result<usize> {
        level_buf_size(level)?;
        input_size.checked_add(MAX_HDR_SIZE).ok_or(BenchError::Allocation {
            codec: NAME,
            what: "output",
            size: usize::MAX,
        })
    }

    fn measure(&self, input_size: usize, level: i32, rng: &mut dyn RandomSource) -> Result<Sample> {
        let level_buf_size = level_buf_size(level)?;
        let output_size = self.compress_bound(input_size, level)?;
        let avail_in = stream_len(input_size, "input")?;
        let avail_out = stream_len(output_size, "output")?;

        let mut input = alloc_buffer(input_size, NAME, "input")?;
        let mut output = alloc_buffer(output_size, NAME, "output")?;
        let mut level_buf = self.ledger.track(alloc_buffer(level_buf_size, NAME, "level")?);
        fill_buffer_rand(rng, &mut input, input_size)?;

        // SAFETY: isal_zstream is a plain C struct of integers and raw
        // pointers, so the all-zero pattern is valid before isal_deflate_init.
        let mut stream = self
            .ledger
            .track(Box::new(unsafe { std::mem::zeroed::<isal::isal_zstream>() }));
        // SAFETY: `stream` points to a live, exclusively borrowed isal_zstream.
        unsafe { isal::isal_deflate_init(&mut **stream) };

        stream.end_of_stream = 1;
        stream.flush = isal::NO_FLUSH as _;
        stream.next_in = input.as_mut_ptr();
        stream.avail_in = avail_in as _;
        stream.next_out = output.as_mut_ptr();
        stream.avail_out = avail_out as _;
        stream.level = level as _;
        stream.level_buf = if level_buf.is_empty() {
            ptr::null_mut()
        } else {
            level_buf.as_mut_ptr()
        };
        stream.level_buf_size = level_buf_size as _;
        stream.hist_bits = self.window_bits as _;

        let start = get_time();
        // SAFETY: every pointer in `stream` refers to a buffer owned by this
        // frame whose length matches the avail/size field next to it, and all
        // of them outlive the call.
        let ret = unsafe { isal::isal_deflate_stateless(&mut **stream) };
        let end = get_time();

        if ret != isal::COMP_OK as i32 {
            return Err(BenchError::Codec {
                codec: NAME,
                detail: format!("isal_deflate_stateless returned {}", ret),
            });
        }

        drop(stream);
        drop(level_buf);

        Ok(Sample {
            latency_ns: span_ns(start, end),
            input_len: input.len(),
            output_capacity: output.len(),
        })
    }

    fn ledger(&self) -> &HandleLedger {
        &self.ledger
    }
}
