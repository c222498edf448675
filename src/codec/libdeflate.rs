//! libdeflate adapter.
//!
//! A compressor and a decompressor are allocated for every call and freed
//! before it returns; only `deflate_compress` itself is timed.

use std::sync::Arc;

use libdeflater::{CompressionError, CompressionLvl, Compressor, Decompressor};

use super::{Codec, HandleLedger, Sample};
use crate::error::{BenchError, Result};
use crate::random::{alloc_buffer, fill_buffer_rand, RandomSource};
use crate::timefn::{get_time, span_ns};

pub const NAME: &str = "libdeflate";

pub struct LibdeflateCodec {
    ledger: Arc<HandleLedger>,
}

impl LibdeflateCodec {
    pub fn new() -> Self {
        Self::with_ledger(HandleLedger::new())
    }

    pub fn with_ledger(ledger: Arc<HandleLedger>) -> Self {
        LibdeflateCodec { ledger }
    }
}

impl Default for LibdeflateCodec {
    fn default() -> Self {
        Self::new()
    }
}

fn compression_lvl(level: i32) -> Result<CompressionLvl> {
    CompressionLvl::new(level).map_err(|_| BenchError::UnsupportedLevel { codec: NAME, level })
}

// libdeflater already reports a zero-byte result as `InsufficientSpace`.
fn compress_failure(e: CompressionError) -> BenchError {
    BenchError::Codec { codec: NAME, detail: format!("{:?}", e) }
}

impl Codec for LibdeflateCodec {
    fn name(&self) -> &'static str {
        NAME
    }

    fn compress_bound(&self, input_size: usize, level: i32) -> Result<usize> {
        let lvl = compression_lvl(level)?;
        let mut compressor = self.ledger.track(Compressor::new(lvl));
        Ok(compressor.deflate_compress_bound(input_size))
    }

    fn measure(&self, input_size: usize, level: i32, rng: &mut dyn RandomSource) -> Result<Sample> {
        let lvl = compression_lvl(level)?;
        let mut compressor = self.ledger.track(Compressor::new(lvl));
        let decompressor = self.ledger.track(Decompressor::new());

        let output_size = compressor.deflate_compress_bound(input_size);
        let mut input = alloc_buffer(input_size, NAME, "input")?;
        let mut output = alloc_buffer(output_size, NAME, "output")?;
        fill_buffer_rand(rng, &mut input, input_size)?;

        let start = get_time();
        let ret = compressor.deflate_compress(&input, &mut output);
        let end = get_time();

        ret.map_err(compress_failure)?;

        drop(decompressor);
        drop(compressor);

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
