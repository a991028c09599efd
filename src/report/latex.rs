//! LaTeX performance table.
//!
//! The table compares the three ranking policies (columns) across the
//! three leecher personalities (rows), each cell showing min, average and
//! max completion time.

use std::io::Write;

use anyhow::Result;

use crate::aggregate::{Aggregator, Statistics};

/// Ranking policies, as `(log name, column header)`.
pub const POLICIES: [(&str, &str); 3] = [
    ("TitForTatRankingPolicy", "TFT"),
    ("CreditRankingPolicy", "CRED"),
    ("OneTrackRankingPolicy", "FCFS"),
];

/// Leecher personalities, as `(log name, row header)`.
pub const CATEGORIES: [(&str, &str); 3] = [
    ("TFT", "H&R"),
    ("altruistic", "ALT"),
    ("impatient", "IMP"),
];

/// Cell used when no samples exist for a policy/category pair.
pub const MISSING_CELL: &str = "\\multicolumn{3}{c}{-}";

/// Write the policy × category table.
pub fn write_performance_table<W: Write>(
    out: &mut W,
    table: &Aggregator<(String, String)>,
) -> Result<()> {
    writeln!(out, "\\begin{{tabular}}{{c|rrr|rrr|rrr|}}")?;

    let header: Vec<String> = POLICIES
        .iter()
        .map(|(_, title)| format!("\\multicolumn{{3}}{{c}}{{{}}}", title))
        .collect();
    writeln!(out, " & {} \\\\", header.join(" & "))?;

    for (row, (category, title)) in CATEGORIES.iter().enumerate() {
        let cells = POLICIES
            .iter()
            .map(|(policy, _)| cell(table, policy, category))
            .collect::<Result<Vec<_>>>()?;
        let terminator = if row + 1 < CATEGORIES.len() { " \\\\" } else { "" };
        writeln!(out, "{} & {}{}", title, cells.join(" & "), terminator)?;
    }

    writeln!(out, "\\end{{tabular}}")?;
    Ok(())
}

fn cell(table: &Aggregator<(String, String)>, policy: &str, category: &str) -> Result<String> {
    match table.samples(&(policy.to_string(), category.to_string())) {
        Some(samples) => {
            let stats = Statistics::from_samples(samples)?;
            Ok(format!(
                " {:.1} & {:.1} & {:.1}",
                stats.min, stats.average, stats.max
            ))
        }
        None => Ok(MISSING_CELL.to_string()),
    }
}
