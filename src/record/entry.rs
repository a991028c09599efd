//! Per-log scan summary.

use std::io::BufRead;

use tracing::trace;

use super::classify::{
    Download, Record, DOWNLOAD_PREFIX, FINAL_CREDIT_PREFIX, INTERNAL_ERROR_MARKER, SEEDER_MARKER,
};
use super::error::RecordError;
use super::scanner::LineScanner;

/// Which record wins when a log holds several of the same kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Precedence {
    /// Keep the first record; later lines of that kind are not decoded.
    #[default]
    First,
    /// Keep the last record. A duration-only download summary never
    /// replaces a full download record.
    Last,
}

/// What a single peer log contributed, gathered in one pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryScan {
    /// Download record chosen by the scan's [`Precedence`].
    pub download: Option<Download>,
    /// `FINALCREDIT` value chosen by the scan's [`Precedence`].
    pub credit: Option<f64>,
    /// Whether any line carried the seeder marker.
    pub seeder: bool,
    /// First line mentioning an internal error, trimmed.
    pub internal_error: Option<String>,
}

impl EntryScan {
    /// Scan a whole log, keeping the first record of each kind.
    pub fn scan<R: BufRead>(reader: R) -> Result<Self, RecordError> {
        Self::scan_with(reader, Precedence::First)
    }

    /// Scan a whole log with an explicit precedence.
    pub fn scan_with<R: BufRead>(reader: R, precedence: Precedence) -> Result<Self, RecordError> {
        let mut scan = EntryScan::default();
        for line in LineScanner::new(reader) {
            scan.observe(&line?, precedence)?;
        }
        Ok(scan)
    }

    /// Fold one line into the summary.
    pub fn observe(&mut self, line: &str, precedence: Precedence) -> Result<(), RecordError> {
        // The seeder marker can share a line with any other record.
        if line.contains(SEEDER_MARKER) {
            self.seeder = true;
        }

        if precedence == Precedence::First
            && ((self.download.is_some() && line.starts_with(DOWNLOAD_PREFIX))
                || (self.credit.is_some() && line.starts_with(FINAL_CREDIT_PREFIX)))
        {
            return Ok(());
        }

        match Record::classify(line)? {
            Record::Download(download) => {
                let replace = match (&self.download, precedence) {
                    (None, _) => true,
                    (Some(_), Precedence::First) => false,
                    (Some(held), Precedence::Last) => held.is_summary() || !download.is_summary(),
                };
                if replace {
                    trace!(completion_ms = download.completion_ms, "Download record");
                    self.download = Some(download);
                }
            }
            Record::FinalCredit(credit) => {
                if self.credit.is_none() || precedence == Precedence::Last {
                    self.credit = Some(credit);
                }
            }
            Record::InternalError => {
                if self.internal_error.is_none() {
                    self.internal_error = Some(line.trim().to_string());
                }
            }
            Record::SeederFlag | Record::DownloadEvent(_) | Record::Unrecognized => {}
        }
        Ok(())
    }

    /// A log with no download record that is not a seeder's.
    ///
    /// Seeders already hold the file and never log a download, so only
    /// leechers without a record are worth reporting.
    pub fn is_anomalous(&self) -> bool {
        self.download.is_none() && !self.seeder
    }

    /// Return the first line mentioning an internal error, stopping the
    /// scan at that line.
    pub fn first_internal_error<R: BufRead>(reader: R) -> Result<Option<String>, RecordError> {
        for line in LineScanner::new(reader) {
            let line = line?;
            if line.contains(INTERNAL_ERROR_MARKER) {
                return Ok(Some(line.trim().to_string()));
            }
        }
        Ok(None)
    }

    /// Return the first final credit of a log. Only credit lines are
    /// decoded, and the scan stops at the first one.
    pub fn first_credit<R: BufRead>(reader: R) -> Result<Option<f64>, RecordError> {
        for line in LineScanner::new(reader) {
            let line = line?;
            if line.starts_with(FINAL_CREDIT_PREFIX) {
                if let Record::FinalCredit(credit) = Record::classify(&line)? {
                    return Ok(Some(credit));
                }
            }
        }
        Ok(None)
    }
}
