use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;
use tracing::warn;

/// Calendar dates excluded from the attendance window. Kept in insertion
/// order, which is also the order persisted to disk.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HolidaySet {
    dates: Vec<NaiveDate>,
}

impl HolidaySet {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    /// Add a date; returns false (and changes nothing) if already present.
    pub fn add(&mut self, date: NaiveDate) -> bool {
        if self.contains(date) {
            return false;
        }
        self.dates.push(date);
        true
    }

    /// Drop every listed date; returns how many were actually removed.
    pub fn remove_all(&mut self, dates: &[NaiveDate]) -> usize {
        let before = self.dates.len();
        self.dates.retain(|d| !dates.contains(d));
        before - self.dates.len()
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }
}

/// JSON-file-backed persistence for the holiday set.
#[derive(Debug, Clone)]
pub struct HolidayStore {
    path: PathBuf,
}

impl HolidayStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Write an empty list if the file does not exist yet.
    pub(crate) fn ensure_initialized(&self) -> Result<()> {
        if !self.path.exists() {
            self.save(&HolidaySet::default())?;
        }
        Ok(())
    }

    /// Load the set. A missing or malformed file loads as "no holidays".
    pub fn load(&self) -> HolidaySet {
        let Ok(contents) = fs::read_to_string(&self.path) else {
            return HolidaySet::default();
        };
        match serde_json::from_str::<Vec<NaiveDate>>(&contents) {
            Ok(dates) => HolidaySet { dates },
            Err(e) => {
                warn!(error = %e, path = %self.path.display(), "Malformed holiday file, treating as empty");
                HolidaySet::default()
            }
        }
    }

    pub fn save(&self, set: &HolidaySet) -> Result<()> {
        let json = serde_json::to_string_pretty(&set.dates)?;
        fs::write(&self.path, json)
            .with_context(|| format!("failed to write holidays to {}", self.path.display()))
    }
}
