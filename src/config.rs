use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

use crate::policy::AttendanceWindow;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_addr: String,
    /// Directory holding the log, the JSON stores, the reset marker and the
    /// backup copies.
    pub data_dir: PathBuf,

    // Attendance window (hour of day; close is exclusive)
    pub open_hour: u32,
    pub close_hour: u32,

    // Rate limiting
    pub rate_record_per_min: u32,
    pub rate_holiday_per_min: u32,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        Self {
            server_addr: env::var("SERVER_ADDR").expect("SERVER_ADDR must be set"),
            data_dir: env::var("DATA_DIR")
                .unwrap_or_else(|_| "data".to_string())
                .into(),

            open_hour: env::var("ATTENDANCE_OPEN_HOUR")
                .unwrap_or_else(|_| "8".to_string())
                .parse()
                .unwrap(),
            close_hour: env::var("ATTENDANCE_CLOSE_HOUR")
                .unwrap_or_else(|_| "22".to_string())
                .parse()
                .unwrap(),

            rate_record_per_min: env::var("RATE_RECORD_PER_MIN")
                .unwrap_or_else(|_| "60".to_string())
                .parse()
                .unwrap(),
            rate_holiday_per_min: env::var("RATE_HOLIDAY_PER_MIN")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .unwrap(),
        }
    }

    pub fn attendance_window(&self) -> AttendanceWindow {
        AttendanceWindow {
            open_hour: self.open_hour,
            close_hour: self.close_hour,
        }
    }
}
