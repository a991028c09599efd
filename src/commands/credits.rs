//! Credits command handler

use anyhow::Result;
use std::io::{self, Write};

use arnold_logs::label::Mode;
use arnold_logs::record::EntryScan;
use arnold_logs::report::format_value;
use arnold_logs::Config;

use super::{entry_reader, for_each_entry};

#[cfg(not(tarpaulin_include))]
pub fn handle(mode: &str, archives: &[String], config: &Config) -> Result<()> {
    run(mode, archives, config, &mut io::stdout().lock())
}

/// Print `<label> <credit>` for every peer log, or a notice for logs
/// without a final credit.
pub fn run<W: Write>(mode: &str, archives: &[String], config: &Config, out: &mut W) -> Result<()> {
    let mode: Mode = mode.parse()?;

    for archive in archives {
        let label = mode.extract_label(archive, config.labels.peers_per_processor)?;
        for_each_entry(archive, |entry| {
            match EntryScan::first_credit(entry_reader(entry))? {
                Some(credit) => writeln!(out, "{} {}", label, format_value(credit))?,
                None => writeln!(out, "File '{}' contains no credit", entry.name())?,
            }
            Ok(())
        })?;
    }
    Ok(())
}
