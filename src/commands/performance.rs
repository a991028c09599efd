//! Performance table command handler

use anyhow::Result;
use std::io::{self, Write};
use tracing::debug;

use arnold_logs::aggregate::Aggregator;
use arnold_logs::report::{write_performance_table, write_plain_report};

use super::for_each_download;

#[cfg(not(tarpaulin_include))]
pub fn handle(logs: &[String], plain: bool) -> Result<()> {
    run(logs, plain, &mut io::stdout().lock())
}

/// Key every download of the given logs by `(role, size)` and print the
/// LaTeX table, or the plain statistics when `plain` is set.
pub fn run<W: Write>(logs: &[String], plain: bool, out: &mut W) -> Result<()> {
    let mut table: Aggregator<(String, String)> = Aggregator::new();
    for log in logs {
        for_each_download(log, |download| {
            let secs = download.completion_secs();
            match download.detail {
                Some(detail) => table.record((detail.role, detail.size), secs),
                None => debug!(log = %log, "Skipping duration-only download line"),
            }
        })?;
    }

    if plain {
        write_plain_report(out, &table)
    } else {
        write_performance_table(out, &table)
    }
}
