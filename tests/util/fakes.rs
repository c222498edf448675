// Test doubles shared by the integration suites.
#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Arc;

use compress_bench::codec::{Codec, HandleLedger, Sample};
use compress_bench::error::{BenchError, Result};
use compress_bench::random::{fill_buffer_rand, RandomSource};

/// Deterministic source: writes `seed, seed+1, seed+2, ...` (wrapping) and
/// counts how many bytes it produced.
pub struct CountingSource {
    pub seed: Option<u64>,
    next: u8,
    pub bytes_written: usize,
}

impl CountingSource {
    pub fn new() -> Self {
        CountingSource { seed: None, next: 1, bytes_written: 0 }
    }
}

impl RandomSource for CountingSource {
    fn init(&mut self, seed: u64) {
        self.seed = Some(seed);
        self.next = (seed as u8).wrapping_add(1);
    }

    fn next_bytes(&mut self, buf: &mut [u8]) {
        for b in buf.iter_mut() {
            *b = self.next;
            self.next = self.next.wrapping_add(1);
            if self.next == 0 {
                self.next = 1;
            }
        }
        self.bytes_written += buf.len();
    }
}

/// Codec whose every call takes a scripted latency.
pub struct FixedCodec {
    pub name: &'static str,
    latencies: Vec<i64>,
    pub calls: Rc<Cell<usize>>,
    pub sizes_seen: Rc<RefCell<Vec<usize>>>,
    ledger: Arc<HandleLedger>,
}

impl FixedCodec {
    /// Cycles through `latencies` call by call.
    pub fn new(name: &'static str, latencies: &[i64]) -> Self {
        FixedCodec {
            name,
            latencies: latencies.to_vec(),
            calls: Rc::new(Cell::new(0)),
            sizes_seen: Rc::new(RefCell::new(Vec::new())),
            ledger: HandleLedger::new(),
        }
    }
}

impl Codec for FixedCodec {
    fn name(&self) -> &'static str {
        self.name
    }

    fn compress_bound(&self, input_size: usize, _level: i32) -> Result<usize> {
        Ok(input_size + 16)
    }

    fn measure(&self, input_size: usize, level: i32, rng: &mut dyn RandomSource) -> Result<Sample> {
        let mut input = vec![0u8; input_size];
        fill_buffer_rand(rng, &mut input, input_size)?;
        let n = self.calls.get();
        self.calls.set(n + 1);
        self.sizes_seen.borrow_mut().push(input_size);
        Ok(Sample {
            latency_ns: self.latencies[n % self.latencies.len()],
            input_len: input.len(),
            output_capacity: self.compress_bound(input_size, level)?,
        })
    }

    fn ledger(&self) -> &HandleLedger {
        &self.ledger
    }
}

/// Codec that fails for inputs at or above `fail_from` bytes.
pub struct FailingCodec {
    pub fail_from: usize,
    ledger: Arc<HandleLedger>,
}

impl FailingCodec {
    pub fn new(fail_from: usize) -> Self {
        FailingCodec { fail_from, ledger: HandleLedger::new() }
    }
}

impl Codec for FailingCodec {
    fn name(&self) -> &'static str {
        "broken"
    }

    fn compress_bound(&self, input_size: usize, _level: i32) -> Result<usize> {
        Ok(input_size)
    }

    fn measure(&self, input_size: usize, _level: i32, _rng: &mut dyn RandomSource) -> Result<Sample> {
        if input_size >= self.fail_from {
            return Err(BenchError::Codec { codec: "broken", detail: "scripted failure".into() });
        }
        Ok(Sample { latency_ns: 10, input_len: input_size, output_capacity: input_size })
    }

    fn ledger(&self) -> &HandleLedger {
        &self.ledger
    }
}
