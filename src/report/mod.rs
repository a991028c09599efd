//! Report writers.
//!
//! Every reporter writes to any [`std::io::Write`] so commands can target
//! stdout while tests capture into a buffer.

mod latex;
mod plain;
mod staircase;

pub use latex::{write_performance_table, CATEGORIES, MISSING_CELL, POLICIES};
pub use plain::write_plain_report;
pub use staircase::write_staircase;

/// Format a float for dump output: shortest round-trip digits, always with a
/// fractional part (`1.0`, `0.5`). Magnitudes from 1e16 up and below 1e-4
/// switch to exponent notation with a signed, two-digit exponent (`1e+16`,
/// `1.5e-07`).
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        return format_exponent(value);
    }

    let text = value.to_string();
    if text.contains('.') {
        text
    } else {
        format!("{}.0", text)
    }
}

fn format_exponent(value: f64) -> String {
    let text = format!("{:e}", value);
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => text,
    }
}
