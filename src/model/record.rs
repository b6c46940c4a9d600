use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::str::FromStr;
use strum_macros::{Display, EnumString};

/// Header row of the attendance log (student id, date, time, kind).
pub const LOG_HEADER: &str = "학번,날짜,시간,기록";

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M:%S";

/// The two record kinds marking arrival and departure.
///
/// The strum serializations are the localized labels persisted in the log
/// file; the HTTP form sends `check_in` / `check_out` instead (see
/// [`RecordKind::from_action`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum RecordKind {
    #[strum(serialize = "출근")]
    CheckIn,
    #[strum(serialize = "퇴근")]
    CheckOut,
}

impl RecordKind {
    pub fn from_action(action: &str) -> Option<Self> {
        match action {
            "check_in" => Some(RecordKind::CheckIn),
            "check_out" => Some(RecordKind::CheckOut),
            _ => None,
        }
    }
}

/// One check-in/check-out event. Immutable once written; the store never
/// updates or deletes rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceRecord {
    pub student_id: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub kind: RecordKind,
}

impl AttendanceRecord {
    pub fn new(student_id: impl Into<String>, kind: RecordKind, timestamp: NaiveDateTime) -> Self {
        Self {
            student_id: student_id.into(),
            date: timestamp.date(),
            time: timestamp.time(),
            kind,
        }
    }

    /// Encode as one log row. Ids never contain commas, so no quoting.
    pub fn to_csv_row(&self) -> String {
        format!(
            "{},{},{},{}",
            self.student_id,
            self.date.format(DATE_FORMAT),
            self.time.format(TIME_FORMAT),
            self.kind
        )
    }

    /// Decode one log row; `None` for the header, a wrong column count, or
    /// unparseable fields (callers skip such rows).
    pub fn from_csv_row(line: &str) -> Option<Self> {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != 4 {
            return None;
        }
        let date = NaiveDate::parse_from_str(fields[1], DATE_FORMAT).ok()?;
        let time = NaiveTime::parse_from_str(fields[2], TIME_FORMAT).ok()?;
        let kind = RecordKind::from_str(fields[3]).ok()?;
        Some(Self {
            student_id: fields[0].to_string(),
            date,
            time,
            kind,
        })
    }
}
