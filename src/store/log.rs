use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::model::record::{AttendanceRecord, LOG_HEADER, RecordKind};

/// Append-only flat-file log of check-in/check-out events.
///
/// No locking: the server runs a single worker, and correctness depends on
/// the absence of concurrent writers.
#[derive(Debug, Clone)]
pub struct AttendanceLog {
    path: PathBuf,
}

impl AttendanceLog {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the file with its header row if it does not exist yet.
    pub(crate) fn ensure_initialized(&self) -> Result<()> {
        if !self.path.exists() {
            self.truncate()?;
        }
        Ok(())
    }

    /// Rewrite the file back to just the header row.
    pub(crate) fn truncate(&self) -> Result<()> {
        fs::write(&self.path, format!("{LOG_HEADER}\n"))
            .with_context(|| format!("failed to write log header to {}", self.path.display()))
    }

    /// Append one record. No validation and no duplicate check here: the
    /// check-in/out protocol pre-checks before writing.
    pub fn append(&self, record: &AttendanceRecord) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("failed to open log {}", self.path.display()))?;
        writeln!(file, "{}", record.to_csv_row())
            .with_context(|| format!("failed to append to log {}", self.path.display()))?;
        Ok(())
    }

    /// Linear scan for a (student, date, kind) triple. A missing log reads
    /// as "no record", not as an error.
    pub fn has_record(&self, student_id: &str, kind: RecordKind, date: NaiveDate) -> bool {
        self.read_all()
            .iter()
            .any(|r| r.student_id == student_id && r.date == date && r.kind == kind)
    }

    /// Every parseable row in file order. A missing log yields an empty vec;
    /// the header row and malformed rows are skipped silently.
    pub fn read_all(&self) -> Vec<AttendanceRecord> {
        let Ok(contents) = fs::read_to_string(&self.path) else {
            return Vec::new();
        };
        contents
            .lines()
            .filter_map(AttendanceRecord::from_csv_row)
            .collect()
    }
}
