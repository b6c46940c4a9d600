//! Attendance-window policy: when check-in/check-out is permitted.

use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::store::holidays::HolidaySet;

/// Weekday hour range during which attendance may be recorded, from
/// configuration (`ATTENDANCE_OPEN_HOUR` / `ATTENDANCE_CLOSE_HOUR`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttendanceWindow {
    pub open_hour: u32,
    pub close_hour: u32,
}

/// True iff `now` is a Monday–Friday, its date is not a holiday, and its
/// hour satisfies `open_hour <= hour < close_hour`. Pure; no side effects.
pub fn is_within_attendance_window(
    now: NaiveDateTime,
    window: AttendanceWindow,
    holidays: &HolidaySet,
) -> bool {
    now.weekday().num_days_from_monday() < 5
        && !holidays.contains(now.date())
        && (window.open_hour..window.close_hour).contains(&now.hour())
}
