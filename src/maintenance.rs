//! Once-per-day housekeeping: back the log up to a dated copy, then truncate
//! it for the new day. Both are best-effort idempotent checks, keyed on
//! today's date; neither is transactional (a crash between truncation and
//! marker-write repeats the reset, which only re-clears same-day data).

use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::store::Stores;
use crate::store::log::AttendanceLog;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Copy the log to `attendance_backup_YYYY-MM-DD.csv` under `backup_dir`.
/// Skipped when that day's backup already exists or there is no log yet.
/// Returns whether a copy was written.
pub fn backup_log(log: &AttendanceLog, backup_dir: &Path, today: NaiveDate) -> Result<bool> {
    fs::create_dir_all(backup_dir)
        .with_context(|| format!("failed to create backup dir {}", backup_dir.display()))?;

    let backup_file = backup_dir.join(format!("attendance_backup_{}.csv", today.format(DATE_FORMAT)));
    if backup_file.exists() || !log.path().exists() {
        return Ok(false);
    }

    fs::copy(log.path(), &backup_file)
        .with_context(|| format!("failed to back up log to {}", backup_file.display()))?;
    Ok(true)
}

/// Truncate the log back to its header row once per calendar day, guarded by
/// a one-line date marker. A matching marker makes the call a no-op.
/// Returns whether the truncation ran.
pub fn reset_log(log: &AttendanceLog, marker: &Path, today: NaiveDate) -> Result<bool> {
    let today = today.format(DATE_FORMAT).to_string();
    if let Ok(last_reset) = fs::read_to_string(marker) {
        if last_reset.trim() == today {
            return Ok(false);
        }
    }

    log.truncate()?;
    fs::write(marker, &today)
        .with_context(|| format!("failed to write reset marker {}", marker.display()))?;
    Ok(true)
}

/// Daily pass over both checks. Backup runs first so the pre-reset rows land
/// in the dated copy.
pub fn run_daily(stores: &Stores, today: NaiveDate) -> Result<()> {
    if backup_log(&stores.log, &stores.backup_dir, today)? {
        info!(date = %today, "Wrote daily attendance backup");
    }
    if reset_log(&stores.log, &stores.reset_marker, today)? {
        info!(date = %today, "Reset attendance log for a new day");
    }
    Ok(())
}
