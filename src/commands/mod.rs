//! Command handlers for the arnold-logs CLI.
//!
//! Each submodule handles one CLI command. Handlers that produce reports
//! write to a caller-supplied writer so they can be exercised in tests;
//! the thin `handle` wrappers bind them to stdout and the loaded config.

pub mod average;
pub mod completions;
pub mod config;
pub mod credits;
pub mod errors;
pub mod events;
pub mod experiment;
pub mod grep;
pub mod performance;
pub mod runtime;
pub mod staircase;
pub mod times;

use anyhow::{Context, Result};
use std::io::BufReader;

use arnold_logs::archive::{open_log, LogArchive, LogEntry};
use arnold_logs::record::{Download, LineScanner, Record};
use tracing::debug;

/// Visit every regular file of a log archive, in archive order.
pub fn for_each_entry<F>(archive_path: &str, mut visit: F) -> Result<()>
where
    F: FnMut(&mut LogEntry<'_>) -> Result<()>,
{
    let mut archive = LogArchive::open(archive_path)?;
    let mut visited = 0usize;
    for entry in archive.entries()? {
        let mut entry = entry?;
        visit(&mut entry).with_context(|| {
            format!("While reading '{}' in {}", entry.name(), archive_path)
        })?;
        visited += 1;
    }
    debug!(archive = archive_path, entries = visited, "Archive scanned");
    Ok(())
}

/// Buffered reader over an archive entry's content.
pub fn entry_reader<'e, 'a>(entry: &'e mut LogEntry<'a>) -> BufReader<&'e mut LogEntry<'a>> {
    BufReader::new(entry)
}

/// Visit every `DOWNLOAD` record of an extracted log file.
pub fn for_each_download<F>(log_path: &str, mut visit: F) -> Result<()>
where
    F: FnMut(Download),
{
    let reader = open_log(log_path)?;
    for (index, line) in LineScanner::new(reader).enumerate() {
        let line = line.with_context(|| format!("Failed to read {}", log_path))?;
        let record = Record::classify(&line)
            .with_context(|| format!("{}:{}", log_path, index + 1))?;
        if let Record::Download(download) = record {
            visit(download);
        }
    }
    Ok(())
}
