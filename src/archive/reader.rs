//! Tar archive reader.
//!
//! Entries are produced lazily and borrow the archive, so each entry's
//! content must be consumed (or dropped) before the next one is requested.
//! Only regular files are yielded.
//!
//! # Example
//!
//! ```no_run
//! use std::io::Read;
//! use arnold_logs::archive::LogArchive;
//!
//! let mut archive = LogArchive::open("plain-12-s0-fs0-leecher.tar")?;
//! for entry in archive.entries()? {
//!     let mut entry = entry?;
//!     let mut text = String::new();
//!     entry.read_to_string(&mut text)?;
//!     println!("{}: {} bytes", entry.name(), text.len());
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use tracing::debug;

use super::error::ArchiveError;

type Source = Box<dyn Read>;

/// An opened tar archive of peer logs.
pub struct LogArchive {
    path: PathBuf,
    inner: tar::Archive<Source>,
}

impl LogArchive {
    /// Open a tar archive. Paths ending in `.gz` or `.tgz` are read through
    /// a gzip decoder.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, ArchiveError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ArchiveError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let reader = BufReader::new(file);

        let source: Source = if is_gzip_path(path) {
            debug!(path = %path.display(), "Opening gzip-compressed archive");
            Box::new(GzDecoder::new(reader))
        } else {
            debug!(path = %path.display(), "Opening archive");
            Box::new(reader)
        };

        Ok(Self {
            path: path.to_path_buf(),
            inner: tar::Archive::new(source),
        })
    }

    /// Path the archive was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Iterate over the regular-file entries of the archive.
    ///
    /// The archive is a forward-only stream: this can be called once per
    /// opened archive.
    pub fn entries(&mut self) -> Result<LogEntries<'_>, ArchiveError> {
        let path = self.path.clone();
        let inner = self
            .inner
            .entries()
            .map_err(|source| ArchiveError::Corrupt {
                path: path.clone(),
                source,
            })?;
        Ok(LogEntries { path, inner })
    }
}

/// Lazy iterator over the regular files of a [`LogArchive`].
pub struct LogEntries<'a> {
    path: PathBuf,
    inner: tar::Entries<'a, Source>,
}

impl<'a> Iterator for LogEntries<'a> {
    type Item = Result<LogEntry<'a>, ArchiveError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(source) => {
                    return Some(Err(ArchiveError::Corrupt {
                        path: self.path.clone(),
                        source,
                    }))
                }
            };

            if !entry.header().entry_type().is_file() {
                continue;
            }

            let name = match entry.path() {
                Ok(p) => p.to_string_lossy().into_owned(),
                Err(source) => {
                    return Some(Err(ArchiveError::Corrupt {
                        path: self.path.clone(),
                        source,
                    }))
                }
            };

            return Some(Ok(LogEntry { name, inner: entry }));
        }
    }
}

/// A single regular file inside a log archive.
pub struct LogEntry<'a> {
    name: String,
    inner: tar::Entry<'a, Source>,
}

impl LogEntry<'_> {
    /// Path of the entry inside the archive.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Read for LogEntry<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

/// Open an extracted (plain text) log file for buffered reading.
pub fn open_log<P: AsRef<Path>>(path: P) -> Result<BufReader<File>, ArchiveError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ArchiveError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "Opened log file");
    Ok(BufReader::new(file))
}

fn is_gzip_path(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("gz") | Some("tgz")
    )
}
