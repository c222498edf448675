//! Error taxonomy for the benchmark library.
//!
//! Adapters and the driver return [`BenchError`] instead of terminating the
//! process; the binary decides how to report it and which exit status to use.

use thiserror::Error;

/// Everything that can stop a measurement.
#[derive(Debug, Error)]
pub enum BenchError {
    /// A working buffer could not be allocated.
    #[error("{codec}: could not allocate {what} buffer of {size} bytes")]
    Allocation {
        codec: &'static str,
        what: &'static str,
        size: usize,
    },

    /// The backend rejected the call or reported a non-success status.
    #[error("{codec} compression failed: {detail}")]
    Codec { codec: &'static str, detail: String },

    /// A buffer handed to the random fill is shorter than the requested length.
    #[error("buffer of {actual} bytes cannot hold {expected} random bytes")]
    InvalidBuffer { expected: usize, actual: usize },

    /// The requested level is outside the backend's supported range.
    #[error("{codec} does not support compression level {level}")]
    UnsupportedLevel { codec: &'static str, level: i32 },

    /// The run configuration cannot be executed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The report could not be written.
    #[error("could not write report: {0}")]
    Output(#[from] std::io::Error),
}

impl BenchError {
    /// Name of the codec the error originated in, if any.
    pub fn codec(&self) -> Option<&'static str> {
        match self {
            BenchError::Allocation { codec, .. }
            | BenchError::Codec { codec, .. }
            | BenchError::UnsupportedLevel { codec, .. } => Some(*codec),
            BenchError::InvalidBuffer { .. }
            | BenchError::InvalidConfig(_)
            | BenchError::Output(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, BenchError>;
