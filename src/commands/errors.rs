//! Errors command handler

use anyhow::Result;
use std::io::{self, Write};
use tracing::debug;

use arnold_logs::record::EntryScan;

use super::{entry_reader, for_each_entry};

#[cfg(not(tarpaulin_include))]
pub fn handle(archives: &[String]) -> Result<()> {
    run(archives, &mut io::stdout().lock())
}

/// Print the first internal error of each affected log, then a count per
/// archive that had any.
pub fn run<W: Write>(archives: &[String], out: &mut W) -> Result<()> {
    for archive in archives {
        let mut affected = 0usize;
        for_each_entry(archive, |entry| {
            if let Some(line) = EntryScan::first_internal_error(entry_reader(entry))? {
                debug!(archive = %archive, entry = entry.name(), "Internal error");
                writeln!(out, "{}", line)?;
                affected += 1;
            }
            Ok(())
        })?;

        if affected > 0 {
            let plural = if affected == 1 { "" } else { "s" };
            writeln!(
                out,
                "File '{}' has {} log{} with internal errors",
                archive, affected, plural
            )?;
        }
    }
    Ok(())
}
