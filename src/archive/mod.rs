//! Access to per-peer log files.
//!
//! Simulation runs produce one tar archive per role, holding one text log
//! per peer. This module hides the tar (and optional gzip) plumbing behind
//! a lazy entry iterator, and offers a plain-file opener for logs that were
//! already extracted.

mod error;
mod reader;

pub use error::ArchiveError;
pub use reader::{open_log, LogArchive, LogEntries, LogEntry};
