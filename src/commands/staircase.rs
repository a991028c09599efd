//! Staircase command handler

use anyhow::Result;
use std::io::{self, Write};

use arnold_logs::cli::StaircaseMetric;
use arnold_logs::report::write_staircase;

use super::for_each_download;

#[cfg(not(tarpaulin_include))]
pub fn handle(metric: StaircaseMetric, logs: &[String]) -> Result<()> {
    run(metric, logs, &mut io::stdout().lock())
}

/// Dump the sorted completion or start times of every download. Duration-only
/// summary lines have no start time and only count towards completion.
pub fn run<W: Write>(metric: StaircaseMetric, logs: &[String], out: &mut W) -> Result<()> {
    let mut values = Vec::new();
    for log in logs {
        for_each_download(log, |download| {
            let value = match metric {
                StaircaseMetric::Completion => Some(download.completion_secs()),
                StaircaseMetric::Start => download.start_secs(),
            };
            values.extend(value);
        })?;
    }
    write_staircase(out, values)?;
    Ok(())
}
