//! Record kinds and line decoding.

use std::fmt;

use super::error::RecordError;

/// Prefix of a download completion line.
pub const DOWNLOAD_PREFIX: &str = "DOWNLOAD";
/// Prefix of a final credit line. Shorter than the full keyword so that
/// logs written with the truncated `FINALCREDI` spelling decode the same.
pub const FINAL_CREDIT_PREFIX: &str = "FINALCREDI";
/// Substring marking a seeder peer's log.
pub const SEEDER_MARKER: &str = "seeder=true";
/// Substring marking an internal error in a peer's log.
pub const INTERNAL_ERROR_MARKER: &str = "Internal error";

/// A decoded download line.
///
/// The full form is `DOWNLOAD <completion_ms> <start_ms> <role> <size> ...`.
/// Proxy helpers follow it with a duration-only summary,
/// `DOWNLOADTIME <completion_ms>`, which decodes without [`DownloadDetail`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub completion_ms: i64,
    pub detail: Option<DownloadDetail>,
}

/// Fields only present on the full download line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadDetail {
    pub start_ms: i64,
    pub role: String,
    pub size: String,
}

impl Download {
    /// Completion time in seconds.
    pub fn completion_secs(&self) -> f64 {
        self.completion_ms as f64 * 1e-3
    }

    /// Start time in seconds, if the line carried one.
    pub fn start_secs(&self) -> Option<f64> {
        self.detail.as_ref().map(|d| d.start_ms as f64 * 1e-3)
    }

    pub fn is_summary(&self) -> bool {
        self.detail.is_none()
    }
}

/// Download lifecycle events logged by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadEventKind {
    Start,
    Cancel,
    Complete,
    Fail,
}

impl DownloadEventKind {
    pub const ALL: [DownloadEventKind; 4] = [
        DownloadEventKind::Start,
        DownloadEventKind::Cancel,
        DownloadEventKind::Complete,
        DownloadEventKind::Fail,
    ];

    /// Event kind of a line, if it starts with one of the event prefixes.
    pub fn of_line(line: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| line.starts_with(k.prefix()))
    }

    /// Line prefix identifying this event.
    pub fn prefix(self) -> &'static str {
        match self {
            DownloadEventKind::Start => "STARTDOWNLOAD",
            DownloadEventKind::Cancel => "CANCELEDDOWNLOAD",
            DownloadEventKind::Complete => "COMPLETEDDOWNLOAD",
            DownloadEventKind::Fail => "FAILEDDOWNLOAD",
        }
    }
}

impl fmt::Display for DownloadEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// One classified log line.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Download(Download),
    FinalCredit(f64),
    DownloadEvent(DownloadEventKind),
    InternalError,
    SeederFlag,
    Unrecognized,
}

impl Record {
    /// Classify a single log line.
    ///
    /// Prefix kinds are tried first, then the marker substrings. A line that
    /// carries a recognised prefix but cannot be decoded is an error rather
    /// than `Unrecognized`.
    pub fn classify(line: &str) -> Result<Self, RecordError> {
        if line.starts_with(DOWNLOAD_PREFIX) {
            return parse_download(line).map(Record::Download);
        }
        if line.starts_with(FINAL_CREDIT_PREFIX) {
            return parse_credit(line).map(Record::FinalCredit);
        }
        if let Some(kind) = DownloadEventKind::of_line(line) {
            return Ok(Record::DownloadEvent(kind));
        }
        if line.contains(INTERNAL_ERROR_MARKER) {
            return Ok(Record::InternalError);
        }
        if line.contains(SEEDER_MARKER) {
            return Ok(Record::SeederFlag);
        }
        Ok(Record::Unrecognized)
    }
}

fn parse_download(line: &str) -> Result<Download, RecordError> {
    let words: Vec<&str> = line.split_whitespace().collect();
    match words.len() {
        2 => Ok(Download {
            completion_ms: parse_int(words[1], "completion time", line)?,
            detail: None,
        }),
        n if n >= 5 => Ok(Download {
            completion_ms: parse_int(words[1], "completion time", line)?,
            detail: Some(DownloadDetail {
                start_ms: parse_int(words[2], "start time", line)?,
                role: words[3].to_string(),
                size: words[4].to_string(),
            }),
        }),
        n => Err(malformed(
            "DOWNLOAD",
            format!("expected 2 or at least 5 fields, found {}", n),
            line,
        )),
    }
}

fn parse_credit(line: &str) -> Result<f64, RecordError> {
    let value = line
        .split_whitespace()
        .nth(1)
        .ok_or_else(|| malformed("FINALCREDIT", "missing credit value".to_string(), line))?;
    value.parse::<f64>().map_err(|_| {
        malformed(
            "FINALCREDIT",
            format!("credit '{}' is not a number", value),
            line,
        )
    })
}

fn parse_int(word: &str, what: &str, line: &str) -> Result<i64, RecordError> {
    word.parse::<i64>().map_err(|_| {
        malformed(
            "DOWNLOAD",
            format!("{} '{}' is not an integer", what, word),
            line,
        )
    })
}

fn malformed(kind: &'static str, reason: String, line: &str) -> RecordError {
    RecordError::Malformed {
        kind,
        reason,
        line: line.to_string(),
    }
}
