//! Log line classification.
//!
//! Peer logs are free-form text with a handful of machine-readable lines
//! identified by a fixed prefix or marker substring. This module turns raw
//! lines into a tagged [`Record`] and folds the records of one log into an
//! [`EntryScan`].

mod classify;
mod entry;
mod error;
mod scanner;

pub use classify::{
    Download, DownloadDetail, DownloadEventKind, Record, DOWNLOAD_PREFIX, FINAL_CREDIT_PREFIX,
    INTERNAL_ERROR_MARKER, SEEDER_MARKER,
};
pub use entry::{EntryScan, Precedence};
pub use error::RecordError;
pub use scanner::LineScanner;
