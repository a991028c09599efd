//! Staircase (empirical CDF) dump.

use std::io::{self, Write};

/// Sort `values` ascending and write `<value> <rank>` rows, rank from 0.
pub fn write_staircase<W: Write>(out: &mut W, mut values: Vec<f64>) -> io::Result<()> {
    values.sort_by(f64::total_cmp);
    for (rank, value) in values.iter().enumerate() {
        writeln!(out, "{:.6} {}", value, rank)?;
    }
    Ok(())
}
