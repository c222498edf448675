// ISA-L adapter.

use compress_bench::codec::isal::IsalCodec;
use compress_bench::codec::{Codec, HandleLedger};
use compress_bench::config::WINDOW_BITS;
use compress_bench::error::BenchError;
use compress_bench::random::SeededRandom;

#[test]
fn stream_and_level_buffer_are_released() {
    let ledger = HandleLedger::new();
    let codec = IsalCodec::with_ledger(WINDOW_BITS, ledger.clone());
    let mut rng = SeededRandom::new(1);
    codec.measure(1024, 1, &mut rng).unwrap();
    assert_eq!(ledger.allocated(), 2);
    assert_eq!(ledger.released(), 2);
}

#[test]
fn every_isal_level_works() {
    let codec = IsalCodec::new(WINDOW_BITS);
    let mut rng = SeededRandom::new(2);
    for level in 0..=3 {
        let sample = codec.measure(8192, level, &mut rng).unwrap();
        assert!(sample.latency_ns >= 0, "level {}", level);
    }
}

#[test]
fn full_window_works() {
    let codec = IsalCodec::new(15);
    assert_eq!(codec.window_bits(), 15);
    let mut rng = SeededRandom::new(3);
    assert!(codec.measure(32768, 1, &mut rng).is_ok());
}

#[test]
fn level_outside_table_is_rejected() {
    let codec = IsalCodec::new(WINDOW_BITS);
    let mut rng = SeededRandom::new(0);
    assert!(matches!(
        codec.measure(16, 9, &mut rng),
        Err(BenchError::UnsupportedLevel { codec: "isal", level: 9 })
    ));
    assert_eq!(codec.ledger().allocated(), 0);
}
