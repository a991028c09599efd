//! Grep command handler

use anyhow::Result;
use std::io::{self, Write};

use arnold_logs::record::{LineScanner, DOWNLOAD_PREFIX, FINAL_CREDIT_PREFIX};

use super::{entry_reader, for_each_entry};

#[cfg(not(tarpaulin_include))]
pub fn handle(archives: &[String]) -> Result<()> {
    run(archives, &mut io::stdout().lock())
}

/// Print every `DOWNLOAD` and `FINALCREDIT` line verbatim. Lines are not
/// decoded, so malformed result lines are shown rather than rejected.
pub fn run<W: Write>(archives: &[String], out: &mut W) -> Result<()> {
    for archive in archives {
        for_each_entry(archive, |entry| {
            for line in LineScanner::new(entry_reader(entry)) {
                let line = line?;
                if line.starts_with(DOWNLOAD_PREFIX) || line.starts_with(FINAL_CREDIT_PREFIX) {
                    writeln!(out, "{}", line)?;
                }
            }
            Ok(())
        })?;
    }
    Ok(())
}
