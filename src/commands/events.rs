//! Events command handler

use anyhow::Result;
use std::io::{self, Write};

use arnold_logs::record::{DownloadEventKind, LineScanner};

use super::{entry_reader, for_each_entry};

#[cfg(not(tarpaulin_include))]
pub fn handle(archives: &[String]) -> Result<()> {
    run(archives, &mut io::stdout().lock())
}

/// Print every download event line, trimmed, in archive order.
pub fn run<W: Write>(archives: &[String], out: &mut W) -> Result<()> {
    for archive in archives {
        for_each_entry(archive, |entry| {
            for line in LineScanner::new(entry_reader(entry)) {
                let line = line?;
                let trimmed = line.trim();
                if DownloadEventKind::of_line(trimmed).is_some() {
                    writeln!(out, "{}", trimmed)?;
                }
            }
            Ok(())
        })?;
    }
    Ok(())
}
