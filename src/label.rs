//! Grouping labels derived from archive file names.
//!
//! Experiment archives are named after the benchmark specification that
//! produced them, e.g. `plain-12-s0-fs0-leecher.tar`: benchmark type,
//! leecher process count, helper token, and so on. The label rules below
//! turn such a name into the key samples are grouped under.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Errors from label extraction.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LabelError {
    #[error("Unknown mode {0}")]
    UnknownMode(String),

    #[error("Cannot derive a label from file name '{name}': {reason}")]
    MalformedFilename { name: String, reason: String },
}

/// Label extraction mode, named after the benchmark family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Plain,
    Credit,
    OneTrack,
    Proxy,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Plain => "plain",
            Mode::Credit => "credit",
            Mode::OneTrack => "onetrack",
            Mode::Proxy => "proxy",
        }
    }

    /// Derive the numeric label of an archive.
    ///
    /// Peer-count modes read the process count (field 1) and scale it by
    /// `peers_per_processor`. Proxy mode reads the helper token (field 2,
    /// e.g. `h5`) and drops its role letter.
    pub fn extract_label(self, filename: &str, peers_per_processor: u32) -> Result<i64, LabelError> {
        let name = base_name(filename);
        let fields: Vec<&str> = name.split('-').collect();
        match self {
            Mode::Plain | Mode::Credit | Mode::OneTrack => {
                let processes = parse_field(name, &fields, 1)?;
                scale_processes(name, processes, peers_per_processor)
            }
            Mode::Proxy => {
                let token = field(name, &fields, 2)?;
                let mut chars = token.chars();
                chars.next();
                let digits = chars.as_str();
                digits.parse::<i64>().map_err(|_| LabelError::MalformedFilename {
                    name: name.to_string(),
                    reason: format!("helper count '{}' is not an integer", digits),
                })
            }
        }
    }
}

impl FromStr for Mode {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plain" => Ok(Mode::Plain),
            "credit" => Ok(Mode::Credit),
            "onetrack" => Ok(Mode::OneTrack),
            "proxy" => Ok(Mode::Proxy),
            other => Err(LabelError::UnknownMode(other.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Default label rule: benchmark type and peer count,
/// e.g. `plain-12-...` → `("plain", 24)`.
pub fn role_label(filename: &str, peers_per_processor: u32) -> Result<(String, i64), LabelError> {
    let name = base_name(filename);
    let fields: Vec<&str> = name.split('-').collect();
    let role = field(name, &fields, 0)?.to_string();
    let processes = parse_field(name, &fields, 1)?;
    Ok((role, scale_processes(name, processes, peers_per_processor)?))
}

/// Only the final path component carries the naming convention.
fn base_name(filename: &str) -> &str {
    Path::new(filename)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(filename)
}

fn field<'a>(name: &str, fields: &[&'a str], index: usize) -> Result<&'a str, LabelError> {
    fields
        .get(index)
        .copied()
        .ok_or_else(|| LabelError::MalformedFilename {
            name: name.to_string(),
            reason: format!("missing '-' separated field {}", index),
        })
}

fn scale_processes(name: &str, processes: i64, peers_per_processor: u32) -> Result<i64, LabelError> {
    processes
        .checked_mul(i64::from(peers_per_processor))
        .ok_or_else(|| LabelError::MalformedFilename {
            name: name.to_string(),
            reason: format!(
                "process count {} times {} peers per processor overflows",
                processes, peers_per_processor
            ),
        })
}

fn parse_field(name: &str, fields: &[&str], index: usize) -> Result<i64, LabelError> {
    let raw = field(name, fields, index)?;
    raw.parse::<i64>().map_err(|_| LabelError::MalformedFilename {
        name: name.to_string(),
        reason: format!("field {} ('{}') is not an integer", index, raw),
    })
}
