//! Archive access errors.

use std::path::PathBuf;

/// Errors that can occur while opening or walking a log archive.
#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    #[error("Failed to open {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Archive {path:?} is not a readable tar archive: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
