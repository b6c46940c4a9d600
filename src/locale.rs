//! Korean display formatting for the kiosk and the weekly report.
//!
//! Every Korean-facing string is produced here (the persisted record-kind
//! labels live on `RecordKind` next to the row codec).

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

use crate::model::record::RecordKind;

/// Weekday names indexed by `Weekday::num_days_from_monday`.
pub const DAY_NAMES: [&str; 7] = [
    "월요일", "화요일", "수요일", "목요일", "금요일", "토요일", "일요일",
];

pub fn weekday_name(date: NaiveDate) -> &'static str {
    DAY_NAMES[date.weekday().num_days_from_monday() as usize]
}

/// Kiosk date line, e.g. `2026년 08월 24일 월요일`.
pub fn format_date(date: NaiveDate) -> String {
    format!(
        "{}년 {:02}월 {:02}일 {}",
        date.year(),
        date.month(),
        date.day(),
        weekday_name(date)
    )
}

/// Kiosk clock, 12-hour with 오전/오후, e.g. `오후 03:05`.
pub fn format_time(time: NaiveTime) -> String {
    let (pm, hour) = time.hour12();
    let meridiem = if pm { "오후" } else { "오전" };
    format!("{} {:02}:{:02}", meridiem, hour, time.minute())
}

/// Weekly report heading, e.g. `8월(4주차, 08/17~08/21) 출석부`.
pub fn weekly_title(month: u32, week: u32, start: NaiveDate, end: NaiveDate) -> String {
    format!(
        "{}월({}주차, {}~{}) 출석부",
        month,
        week,
        start.format("%m/%d"),
        end.format("%m/%d")
    )
}

/// Heading for a selected week that has not started yet.
pub fn future_week_title(month: u32, week: u32) -> String {
    format!("{}월({}주차): 미래 주차", month, week)
}

/// Kiosk confirmation line, e.g. `가영님 출근 처리되었습니다.`.
pub fn record_message(name: &str, kind: RecordKind) -> String {
    format!("{}님 {} 처리되었습니다.", name, kind)
}
