//! zlib adapter.
//!
//! The output buffer is sized with zlib's own `compressBound`. The timed
//! region covers stream setup, the single `Finish` call and stream teardown,
//! the same work zlib's `compress2` performs.

use std::sync::Arc;

use flate2::{Compress, Compression, FlushCompress, Status};

use super::{Codec, HandleLedger, Sample};
use crate::error::{BenchError, Result};
use crate::random::{alloc_buffer, fill_buffer_rand, RandomSource};
use crate::timefn::{get_time, span_ns};

pub const NAME: &str = "zlib";

/// Levels zlib accepts.
pub const LEVEL_MIN: i32 = 0;
pub const LEVEL_MAX: i32 = 9;

pub struct ZlibCodec {
    ledger: Arc<HandleLedger>,
}

impl ZlibCodec {
    pub fn new() -> Self {
        Self::with_ledger(HandleLedger::new())
    }

    pub fn with_ledger(ledger: Arc<HandleLedger>) -> Self {
        ZlibCodec { ledger }
    }
}

impl Default for ZlibCodec {
    fn default() -> Self {
        Self::new()
    }
}

fn check_level(level: i32) -> Result<u32> {
    if (LEVEL_MIN..=LEVEL_MAX).contains(&level) {
        Ok(level as u32)
    } else {
        Err(BenchError::UnsupportedLevel { codec: NAME, level })
    }
}

impl Codec for ZlibCodec {
    fn name(&self) -> &'static str {
        NAME
    }

    fn compress_bound(&self, input_size: usize, level: i32) -> Result<usize> {
        check_level(level)?;
        let source_len = libz_sys::uLong::try_from(input_size).map_err(|_| BenchError::Codec {
            codec: NAME,
            detail: format!("input of {} bytes exceeds uLong", input_size),
        })?;
        // SAFETY: compressBound is a pure arithmetic function with no pointers.
        let bound = unsafe { libz_sys::compressBound(source_len) };
        Ok(bound as usize)
    }

    fn measure(&self, input_size: usize, level: i32, rng: &mut dyn RandomSource) -> Result<Sample> {
        let zlevel = check_level(level)?;
        let output_size = self.compress_bound(input_size, level)?;

        let mut input = alloc_buffer(input_size, NAME, "input")?;
        let mut output = alloc_buffer(output_size, NAME, "output")?;
        fill_buffer_rand(rng, &mut input, input_size)?;

        let start = get_time();
        let mut stream = self.ledger.track(Compress::new(Compression::new(zlevel), true));
        let status = stream.compress(&input, &mut output, FlushCompress::Finish);
        drop(stream);
        let end = get_time();

        match status {
            Ok(Status::StreamEnd) => {}
            Ok(other) => {
                return Err(BenchError::Codec {
                    codec: NAME,
                    detail: format!("stream did not finish ({:?})", other),
                })
            }
            Err(e) => return Err(BenchError::Codec { codec: NAME, detail: e.to_string() }),
        }

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
