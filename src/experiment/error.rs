//! Benchmark specification errors.

/// Errors raised while decoding a benchmark specification.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ExperimentError {
    #[error("Malformed benchmark specification '{spec}': {reason}")]
    MalformedSpec { spec: String, reason: String },

    #[error("Malformed helpers specification '{0}'")]
    MalformedHelpers(String),

    #[error("No leechers AND no helpers in '{0}'")]
    NoPeers(String),

    #[error("Unknown benchmark type '{name}'; I only know [{known}]")]
    UnknownBenchmarkType { name: String, known: String },

    #[error("Runtime of {runtime}s multiplied by {multiplier} does not fit in 32 bits")]
    RuntimeOverflow { runtime: u32, multiplier: u32 },
}
