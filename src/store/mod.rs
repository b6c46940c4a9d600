pub mod holidays;
pub mod log;
pub mod students;

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use holidays::HolidayStore;
use log::AttendanceLog;
use students::DirectoryStore;

pub const LOG_FILE: &str = "attendance.csv";
pub const HOLIDAYS_FILE: &str = "holidays.json";
pub const STUDENTS_FILE: &str = "students.json";
pub const LAST_RESET_FILE: &str = "last_reset.txt";
pub const BACKUP_DIR: &str = "backups";

/// The file-backed state of the service, injected into handlers via
/// `web::Data` the way the database pool would be.
#[derive(Debug, Clone)]
pub struct Stores {
    pub log: AttendanceLog,
    pub holidays: HolidayStore,
    pub students: DirectoryStore,
    pub reset_marker: PathBuf,
    pub backup_dir: PathBuf,
}

/// Build the stores under `data_dir`. Construction guarantees a
/// valid-but-empty backing state: the directory exists, the log has its
/// header row, and the JSON stores hold empty collections.
pub fn init_stores(data_dir: &Path) -> Result<Stores> {
    fs::create_dir_all(data_dir)
        .with_context(|| format!("failed to create data dir {}", data_dir.display()))?;

    let stores = Stores {
        log: AttendanceLog::new(data_dir.join(LOG_FILE)),
        holidays: HolidayStore::new(data_dir.join(HOLIDAYS_FILE)),
        students: DirectoryStore::new(data_dir.join(STUDENTS_FILE)),
        reset_marker: data_dir.join(LAST_RESET_FILE),
        backup_dir: data_dir.join(BACKUP_DIR),
    };

    stores.log.ensure_initialized()?;
    stores.holidays.ensure_initialized()?;
    stores.students.ensure_initialized()?;

    Ok(stores)
}
