use crate::lock::with_file_lock;
use crate::record::ScanRecord;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_JOURNAL_FILE: &str = "scan-journal.log";

#[derive(Debug, Error)]
pub enum JournalError {
    #[error("Journal I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Malformed journal line {number}: '{line}'")]
    Malformed { number: usize, line: String },
}

/// Append-only publication journal: one `<id> - <uri>\n` line per
/// published scan. Lines are never rewritten or removed by this type.
#[derive(Debug, Clone)]
pub struct Journal {
    path: PathBuf,
}

impl Journal {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Appends exactly one line for `record`. Creates the file on first
    /// write. No locking: interleaving is possible if concurrent writers
    /// share the file (use [`Journal::append_locked`] for that setup).
    pub fn append(&self, record: &ScanRecord) -> Result<(), JournalError> {
        self.append_raw(record).map_err(|source| JournalError::Io {
            path: self.path.clone(),
            source,
        })
    }

    /// Same as [`Journal::append`], under an exclusive advisory lock on a
    /// `<journal>.lock` sidecar file. Opt-in for concurrent-build setups.
    pub fn append_locked(&self, record: &ScanRecord) -> Result<(), JournalError> {
        with_file_lock(&self.path, || self.append_raw(record)).map_err(|source| {
            JournalError::Io {
                path: self.path.clone(),
                source,
            }
        })
    }

    fn append_raw(&self, record: &ScanRecord) -> io::Result<()> {
        // Scoped handle: closed on every exit path when `file` drops.
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(record.journal_line().as_bytes())?;
        file.flush()
    }

    /// Reads the journal back into records, in file order.
    /// A missing file yields an empty list.
    pub fn entries(&self) -> Result<Vec<ScanRecord>, JournalError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|source| JournalError::Io {
            path: self.path.clone(),
            source,
        })?;

        let mut records = Vec::new();
        for (idx, line) in content.lines().enumerate() {
            match ScanRecord::parse_line(line) {
                Some(record) => records.push(record),
                None => {
                    return Err(JournalError::Malformed {
                        number: idx + 1,
                        line: line.to_string(),
                    })
                }
            }
        }
        Ok(records)
    }
}
