//! Average command handler

use anyhow::Result;
use std::io::{self, Write};
use tracing::warn;

use arnold_logs::aggregate::Aggregator;
use arnold_logs::label::role_label;
use arnold_logs::record::EntryScan;
use arnold_logs::report::write_plain_report;
use arnold_logs::Config;

use super::{entry_reader, for_each_entry};

/// Print download time statistics per archive label.
#[cfg(not(tarpaulin_include))]
pub fn handle(archives: &[String], config: &Config) -> Result<()> {
    run(archives, config, &mut io::stdout().lock())
}

/// Collect the first download time of every peer log, grouped by the
/// archive's `(benchmark, peers)` label, then print the statistics.
pub fn run<W: Write>(archives: &[String], config: &Config, out: &mut W) -> Result<()> {
    let mut table = Aggregator::new();

    for archive in archives {
        let label = role_label(archive, config.labels.peers_per_processor)?;
        for_each_entry(archive, |entry| {
            let scan = EntryScan::scan(entry_reader(entry))?;
            if let Some(download) = &scan.download {
                table.record(label.clone(), download.completion_secs());
            } else if scan.is_anomalous() {
                warn!(archive = %archive, entry = entry.name(), "No download time");
                writeln!(out, "File '{}' contains no download time", entry.name())?;
            }
            Ok(())
        })?;
    }

    write_plain_report(out, &table)
}
