//! Arnold log analysis library
//!
//! Extraction of download times, credits and error markers from the
//! per-peer logs of Arnold simulation runs, aggregation into per-label
//! statistics, and the report and experiment-file writers built on top.

pub mod aggregate;
pub mod archive;
pub mod cli;
pub mod config;
pub mod experiment;
pub mod label;
pub mod logging;
pub mod record;
pub mod report;

pub use aggregate::{AggregateError, Aggregator, Statistics};
pub use archive::{ArchiveError, LogArchive};
pub use config::Config;
pub use label::{LabelError, Mode};
pub use record::{EntryScan, Record};
