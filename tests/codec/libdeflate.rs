// libdeflate adapter, including the 1024-byte level-1 end-to-end scenario.

use compress_bench::codec::libdeflate::LibdeflateCodec;
use compress_bench::codec::{Codec, HandleLedger};
use compress_bench::error::BenchError;
use compress_bench::random::SeededRandom;
use libdeflater::{CompressionLvl, Compressor};

#[test]
fn end_to_end_1024_bytes_level_1() {
    let ledger = HandleLedger::new();
    let codec = LibdeflateCodec::with_ledger(ledger.clone());
    let mut rng = SeededRandom::new(1024);

    let sample = codec.measure(1024, 1, &mut rng).unwrap();

    // (a) output sized by libdeflate's own bound at level 1
    let mut reference = Compressor::new(CompressionLvl::new(1).unwrap());
    assert_eq!(sample.output_capacity, reference.deflate_compress_bound(1024));
    assert_eq!(sample.input_len, 1024);
    // (b) non-negative duration
    assert!(sample.latency_ns >= 0);
    // (c) compressor and decompressor both allocated and freed
    assert_eq!(ledger.allocated(), 2);
    assert_eq!(ledger.released(), 2);
}

#[test]
fn repeated_calls_stay_balanced() {
    let ledger = HandleLedger::new();
    let codec = LibdeflateCodec::with_ledger(ledger.clone());
    let mut rng = SeededRandom::new(9);
    for size in [1usize, 64, 4096, 32768] {
        codec.measure(size, 1, &mut rng).unwrap();
    }
    assert_eq!(ledger.allocated(), 8);
    assert_eq!(ledger.outstanding(), 0);
}

#[test]
fn level_13_is_rejected() {
    let codec = LibdeflateCodec::new();
    let mut rng = SeededRandom::new(0);
    assert!(matches!(
        codec.measure(16, 13, &mut rng),
        Err(BenchError::UnsupportedLevel { codec: "libdeflate", level: 13 })
    ));
}
