use chrono::NaiveDate;

/// One weekday cell of a student's week: rounded clock hours and the hours
/// worked derived from them. `hours` is 0.0 unless both times are present.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DaySummary {
    pub check_in: Option<f64>,
    pub check_out: Option<f64>,
    pub hours: f64,
}

/// A directory student's Monday..Friday row, keyed by display name.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentWeek {
    pub name: String,
    pub days: [DaySummary; 5],
}

impl StudentWeek {
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            days: [DaySummary::default(); 5],
        }
    }
}

/// Derived, transient result of one weekly aggregation. Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklySummary {
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub rows: Vec<StudentWeek>,
}

/// Leaderboard entry: total weekly hours for one student.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedStudent {
    pub name: String,
    pub total_hours: f64,
}
