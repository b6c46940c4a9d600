//! Weekly aggregation: half-hour rounding, per-day and per-week totals,
//! display-name ordering, and the hours leaderboard.

use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Timelike};
use std::cmp::Ordering;
use std::collections::HashMap;

use crate::model::record::{AttendanceRecord, RecordKind};
use crate::model::summary::{DaySummary, RankedStudent, StudentWeek, WeeklySummary};
use crate::store::students::StudentDirectory;

/// Round a clock time to the nearest half hour: minutes below 15 round down,
/// 15..45 round to the half, 45 and up round to the next hour. The result is
/// `hour + fraction` (9.5 for 09:30).
pub fn round_to_half_hour(time: NaiveTime) -> f64 {
    let hour = f64::from(time.hour());
    match time.minute() {
        0..=14 => hour,
        15..=44 => hour + 0.5,
        _ => hour + 1.0,
    }
}

/// One-decimal rendering used throughout the report ("8.5", "0.0").
pub fn format_hours(hours: f64) -> String {
    format!("{hours:.1}")
}

/// Monday of the week containing `today`.
pub fn current_week_start(today: NaiveDate) -> NaiveDate {
    today - Duration::days(i64::from(today.weekday().num_days_from_monday()))
}

/// Monday of the selected week: the week holding the 1st of `month`,
/// advanced by `week - 1` weeks. `None` for an out-of-range selection.
pub fn selected_week_start(year: i32, month: u32, week: u32) -> Option<NaiveDate> {
    if !(1..=12).contains(&month) || !(1..=6).contains(&week) {
        return None;
    }
    let month_start = NaiveDate::from_ymd_opt(year, month, 1)?;
    Some(current_week_start(month_start + Duration::weeks(i64::from(week) - 1)))
}

/// 1-based week-of-month label for a date, counted in 7-day blocks.
pub fn week_of_month(date: NaiveDate) -> u32 {
    (date.day() - 1) / 7 + 1
}

/// Names beginning with a Hangul syllable sort before all others;
/// lexicographic within each group.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    (name_group(a), a).cmp(&(name_group(b), b))
}

fn name_group(name: &str) -> u8 {
    match name.chars().next() {
        Some(c) if ('\u{AC00}'..='\u{D7A3}').contains(&c) => 0,
        _ => 1,
    }
}

/// Aggregate one Monday..Friday span. Only rows inside the range on a
/// weekday count; for duplicate same-kind rows the last write wins. Every
/// directory student gets a row (empty when recordless), keyed by display
/// name and ordered by [`compare_names`].
///
/// Hours worked subtract rounded clock values, so a check-out row with a raw
/// clock earlier than the check-in produces a negative figure, reported
/// as-is rather than clamped.
pub fn weekly_summary(
    records: &[AttendanceRecord],
    directory: &StudentDirectory,
    week_start: NaiveDate,
    week_end: NaiveDate,
) -> WeeklySummary {
    // (student id, weekday) -> raw (check-in, check-out) clock times
    let mut raw: HashMap<&str, [(Option<NaiveTime>, Option<NaiveTime>); 5]> = HashMap::new();
    for record in records {
        if record.date < week_start || record.date > week_end {
            continue;
        }
        let day = record.date.weekday().num_days_from_monday() as usize;
        if day >= 5 {
            continue;
        }
        let slots = raw.entry(record.student_id.as_str()).or_default();
        match record.kind {
            RecordKind::CheckIn => slots[day].0 = Some(record.time),
            RecordKind::CheckOut => slots[day].1 = Some(record.time),
        }
    }

    let mut rows: Vec<StudentWeek> = directory
        .iter()
        .map(|(id, name)| {
            let mut row = StudentWeek::empty(name.clone());
            if let Some(slots) = raw.get(id.as_str()) {
                for (day, (check_in, check_out)) in slots.iter().enumerate() {
                    let check_in = check_in.map(round_to_half_hour);
                    let check_out = check_out.map(round_to_half_hour);
                    let hours = match (check_in, check_out) {
                        (Some(start), Some(end)) => end - start,
                        _ => 0.0,
                    };
                    row.days[day] = DaySummary {
                        check_in,
                        check_out,
                        hours,
                    };
                }
            }
            row
        })
        .collect();
    rows.sort_by(|a, b| compare_names(&a.name, &b.name));

    WeeklySummary {
        week_start,
        week_end,
        rows,
    }
}

/// Leaderboard over a summary: total weekly hours per student (zero days
/// excluded from the sum), descending by hours, ties broken by name.
pub fn rank_by_hours(summary: &WeeklySummary) -> Vec<RankedStudent> {
    let mut ranked: Vec<RankedStudent> = summary
        .rows
        .iter()
        .map(|row| RankedStudent {
            name: row.name.clone(),
            total_hours: row
                .days
                .iter()
                .filter(|day| day.hours != 0.0)
                .map(|day| day.hours)
                // Fold from +0.0: the stdlib's empty float sum starts at -0.0,
                // which would render a zero total as "-0.0" instead of "0.0".
                .fold(0.0, |acc, hours| acc + hours),
        })
        .collect();
    ranked.sort_by(|a, b| {
        b.total_hours
            .total_cmp(&a.total_hours)
            .then_with(|| compare_names(&a.name, &b.name))
    });
    ranked
}
