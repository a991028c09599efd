//! Plain-text statistics report.

use std::fmt::Display;
use std::io::Write;

use anyhow::Result;

use crate::aggregate::{Aggregator, Statistics};

/// Write one summary line per label, in ascending label order:
///
/// ```text
/// plain 24: min=1.000000 av=1.500000 max=2.000000 samples=2
/// ```
pub fn write_plain_report<W, R, S>(out: &mut W, table: &Aggregator<(R, S)>) -> Result<()>
where
    W: Write,
    R: Display + Ord,
    S: Display + Ord,
{
    for ((role, size), samples) in table.iter() {
        let stats = Statistics::from_samples(samples)?;
        writeln!(
            out,
            "{} {}: min={:.6} av={:.6} max={:.6} samples={}",
            role, size, stats.min, stats.average, stats.max, stats.samples
        )?;
    }
    Ok(())
}
