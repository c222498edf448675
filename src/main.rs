//! Binary entry point for `compress-bench`.
//!
//! # Control flow
//!
//! 1. [`parse_args`] turns the command line into a [`ParsedArgs`] value.
//! 2. [`run`] either lists the registered codecs or runs the benchmark,
//!    writing the report to stdout.
//! 3. The outcome becomes the exit status: 0 on success, 1 on a usage error,
//!    an aborted run, or any failed measurement.

use std::io;

use anyhow::Context;
use clap::error::ErrorKind;

use compress_bench::bench::bench_registered;
use compress_bench::cli::args::{parse_args, ParsedArgs};
use compress_bench::cli::constants::{display_level, set_display_level, COMPRESSOR_NAME};
use compress_bench::codec::codec_names;
use compress_bench::random::SeededRandom;

/// Execute the operation selected by argument parsing and return the exit code.
fn run(args: ParsedArgs) -> anyhow::Result<i32> {
    set_display_level(args.display_level);

    if args.list_codecs {
        for name in codec_names() {
            compress_bench::displayout!("{}\n", name);
        }
        return Ok(0);
    }

    let mut bench_config = args.bench_config;
    bench_config.set_notification_level(display_level());

    let mut rng = SeededRandom::from_time();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary =
        bench_registered(&bench_config, &mut rng, &mut out).context("benchmark aborted")?;

    let failures = summary.failures();
    if failures > 0 {
        compress_bench::displaylevel!(1, "{}: {} measurement(s) failed\n", COMPRESSOR_NAME, failures);
        return Ok(1);
    }
    Ok(0)
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    let args = match parse_args() {
        Ok(a) => a,
        Err(e) => {
            // Help and version requests are not failures.
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    let exit_code = match run(args) {
        Ok(code) => code,
        Err(e) => {
            compress_bench::displaylevel!(1, "{}: {:#}\n", COMPRESSOR_NAME, e);
            1
        }
    };
    std::process::exit(exit_code);
}
