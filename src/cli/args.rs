//! Command-line argument parsing for `compress-bench`.
//!
//! The entry points are [`parse_args`] (reads `std::env::args_os()`) and
//! [`parse_args_from`] (takes an explicit argument list, suitable for
//! unit-testing). Both return a [`ParsedArgs`] value.
//!
//! Every flag is optional; with none given the run uses the built-in defaults
//! from [`crate::config`].

use std::ffi::OsString;

use clap::{ArgAction, Parser};

use crate::bench::BenchConfig;
use crate::config::{ITERATIONS, LEVEL, WINDOW_BITS};

/// Raw command line as declared to clap.
#[derive(Debug, Parser)]
#[command(
    name = "compress-bench",
    version,
    about = "Measure single-call deflate latency of zlib, libdeflate and ISA-L"
)]
pub struct Cli {
    /// Measured calls per (size, codec) pair
    #[arg(short, long, value_name = "N", default_value_t = ITERATIONS)]
    pub iterations: u32,

    /// Compression level handed to every codec
    #[arg(short, long, value_name = "N", default_value_t = LEVEL)]
    pub level: i32,

    /// History window in bits (ISA-L)
    #[arg(short, long, value_name = "BITS", default_value_t = WINDOW_BITS)]
    pub window_bits: u32,

    /// Comma-separated input sizes in bytes [default: 1,2,4,...,32768]
    #[arg(short, long, value_name = "LIST", value_delimiter = ',')]
    pub sizes: Vec<usize>,

    /// Seed for input generation [default: current time]
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Only run the named codec (repeatable)
    #[arg(short = 'c', long = "codec", value_name = "NAME")]
    pub codecs: Vec<String>,

    /// Report a failing codec and continue instead of aborting
    #[arg(short, long)]
    pub keep_going: bool,

    /// Print the registered codecs and exit
    #[arg(long)]
    pub list: bool,

    /// Increase verbosity (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Decrease verbosity (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,
}

/// Options resolved from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedArgs {
    /// Benchmark configuration assembled from the flags.
    pub bench_config: BenchConfig,
    /// `--list` was given; print codec names instead of running.
    pub list_codecs: bool,
    /// Display level after applying `-v` / `-q` to the default of 2.
    pub display_level: u32,
}

impl From<Cli> for ParsedArgs {
    fn from(cli: Cli) -> Self {
        let display_level = (2 + u32::from(cli.verbose)).saturating_sub(u32::from(cli.quiet));

        let mut bench_config = BenchConfig::default();
        bench_config
            .set_notification_level(display_level)
            .set_iterations(cli.iterations)
            .set_level(cli.level)
            .set_window_bits(cli.window_bits)
            .set_seed(cli.seed)
            .set_codecs(&cli.codecs)
            .set_keep_going(cli.keep_going);
        if !cli.sizes.is_empty() {
            bench_config.set_sizes(&cli.sizes);
        }

        ParsedArgs { bench_config, list_codecs: cli.list, display_level }
    }
}

/// Parse the process command line.
pub fn parse_args() -> Result<ParsedArgs, clap::Error> {
    parse_args_from(std::env::args_os())
}

/// Parse an explicit argument list. The first item is the program name.
pub fn parse_args_from<I, T>(argv: I) -> Result<ParsedArgs, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(argv).map(ParsedArgs::from)
}
