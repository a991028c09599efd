//! Log line decoding errors.

/// Errors raised when a recognised log line cannot be decoded.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("Malformed {kind} line ({reason}): {line}")]
    Malformed {
        kind: &'static str,
        reason: String,
        line: String,
    },

    #[error("Failed to read log line: {0}")]
    Read(#[from] std::io::Error),
}
