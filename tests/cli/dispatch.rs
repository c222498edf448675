// Exit-status tests for the compress-bench binary.
//
// `run()` is private to the binary crate, so every test spawns the compiled
// executable. Cargo sets `CARGO_BIN_EXE_compress-bench` when running tests.
//
// Covers:
//   - a small successful run exits 0 and prints the report
//   - an unsupported level aborts the run with exit 1
//   - with --keep-going a failing codec prints `failed` and still exits 1
//   - an invalid configuration exits 1
//   - --help, --version and --list exit 0

use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

/// Path to the compiled `compress-bench` binary under test.
fn bench_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_compress-bench"))
}

fn run_bin(args: &[&str]) -> Output {
    Command::new(bench_bin())
        .args(args)
        .stdin(Stdio::null())
        .output()
        .expect("spawn compress-bench")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn small_run_exits_zero() {
    let output = run_bin(&["-s", "1,64", "-i", "2", "--seed", "1"]);
    assert_eq!(output.status.code(), Some(0));
    let stdout = stdout_of(&output);
    assert!(stdout.starts_with("1 bytes:\n"), "unexpected report: {stdout}");
    assert!(stdout.contains("64 bytes:\n"));
    assert!(stdout.contains("zlib->"));
    assert!(stdout.contains("libdeflate->"));
}

#[test]
fn unsupported_level_aborts_with_one() {
    let output = run_bin(&["-l", "20", "-s", "1", "-i", "1"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(!stdout_of(&output).contains("->"));
}

#[test]
fn keep_going_failure_exits_one() {
    // zlib stops at level 9; libdeflate accepts up to 12.
    let output = run_bin(&["-l", "11", "-s", "1", "-i", "1", "-k"]);
    assert_eq!(output.status.code(), Some(1));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("zlib->failed\n"), "unexpected report: {stdout}");
    assert!(stdout.contains("libdeflate->"));
    assert!(!stdout.contains("libdeflate->failed"));
}

#[test]
fn zero_iterations_exits_one() {
    let output = run_bin(&["-i", "0"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_of(&output).is_empty());
}

#[test]
fn unknown_flag_exits_one() {
    let output = run_bin(&["--no-such-flag"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn help_flag_exits_zero() {
    let output = run_bin(&["--help"]);
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn version_flag_exits_zero() {
    let output = run_bin(&["--version"]);
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn list_prints_codecs_and_exits_zero() {
    let output = run_bin(&["--list"]);
    assert_eq!(output.status.code(), Some(0));
    let stdout = stdout_of(&output);
    let names: Vec<&str> = stdout.lines().collect();
    assert_eq!(names[..2], ["zlib", "libdeflate"]);
}
