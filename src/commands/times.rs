//! Times command handler

use anyhow::Result;
use std::io::{self, Write};
use tracing::warn;

use arnold_logs::label::Mode;
use arnold_logs::record::{EntryScan, Precedence};
use arnold_logs::report::format_value;
use arnold_logs::Config;

use super::{entry_reader, for_each_entry};

#[cfg(not(tarpaulin_include))]
pub fn handle(mode: &str, archives: &[String], config: &Config) -> Result<()> {
    run(mode, archives, config, &mut io::stdout().lock())
}

/// Print `<label> <completion> <start> <credit>` for every peer log. The
/// last download and credit lines of a log are the ones reported.
pub fn run<W: Write>(mode: &str, archives: &[String], config: &Config, out: &mut W) -> Result<()> {
    let mode: Mode = mode.parse()?;

    for archive in archives {
        let label = mode.extract_label(archive, config.labels.peers_per_processor)?;
        for_each_entry(archive, |entry| {
            let scan = EntryScan::scan_with(entry_reader(entry), Precedence::Last)?;
            match &scan.download {
                Some(download) => {
                    let start = download.start_secs().map(format_value);
                    let credit = scan.credit.map(format_value);
                    writeln!(
                        out,
                        "{} {} {} {}",
                        label,
                        format_value(download.completion_secs()),
                        start.as_deref().unwrap_or("-"),
                        credit.as_deref().unwrap_or("-")
                    )?;
                }
                None if scan.is_anomalous() => {
                    warn!(archive = %archive, entry = entry.name(), "No download time");
                    writeln!(out, "File '{}' contains no download time", entry.name())?;
                }
                None => {}
            }
            Ok(())
        })?;
    }
    Ok(())
}
