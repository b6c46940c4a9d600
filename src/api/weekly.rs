use actix_web::{HttpResponse, Responder, web};
use chrono::{Datelike, Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::model::summary::WeeklySummary;
use crate::store::Stores;
use crate::{locale, report};

/// Month and week-of-month selection, 1-based on both axes.
#[derive(Debug, Deserialize, ToSchema)]
pub struct WeekSelect {
    #[schema(example = 8, minimum = 1, maximum = 12)]
    pub month: u32,
    #[schema(example = 4, minimum = 1, maximum = 6)]
    pub week: u32,
}

/// One weekday cell: rounded clock values and the hours derived from them,
/// all rendered with one decimal.
#[derive(Debug, Serialize, ToSchema)]
pub struct DayCell {
    #[schema(example = "월요일")]
    pub day: String,
    #[schema(example = "9.0")]
    pub check_in: Option<String>,
    #[schema(example = "18.5")]
    pub check_out: Option<String>,
    #[schema(example = "9.5")]
    pub hours: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StudentWeekRow {
    #[schema(example = "가영")]
    pub name: String,
    /// Monday through Friday, always five cells.
    pub days: Vec<DayCell>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RankedRow {
    #[schema(example = 1)]
    pub rank: usize,
    #[schema(example = "가영")]
    pub name: String,
    #[schema(example = "42.5")]
    pub total_hours: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct WeeklyResponse {
    #[schema(example = "8월(4주차, 08/24~08/28) 출석부")]
    pub title: String,
    pub month: u32,
    pub week: u32,
    #[schema(example = "2026-08-24")]
    pub week_start: String,
    #[schema(example = "2026-08-28")]
    pub week_end: String,
    pub rows: Vec<StudentWeekRow>,
    pub ranking: Vec<RankedRow>,
}

/// Assembles the response for one week. A week that has not started yet gets
/// the empty sheet and no ranking, without touching the log.
fn build_weekly(
    stores: &Stores,
    today: NaiveDate,
    week_start: NaiveDate,
    month: u32,
    week: u32,
) -> WeeklyResponse {
    let week_end = week_start + Duration::days(4);
    let directory = stores.students.load();

    let (title, summary, ranking) = if week_start > today {
        let summary = report::weekly_summary(&[], &directory, week_start, week_end);
        (locale::future_week_title(month, week), summary, Vec::new())
    } else {
        let records = stores.log.read_all();
        let summary = report::weekly_summary(&records, &directory, week_start, week_end);
        let ranking = report::rank_by_hours(&summary);
        (
            locale::weekly_title(month, week, week_start, week_end),
            summary,
            ranking,
        )
    };

    WeeklyResponse {
        title,
        month,
        week,
        week_start: week_start.format("%Y-%m-%d").to_string(),
        week_end: week_end.format("%Y-%m-%d").to_string(),
        rows: to_rows(&summary),
        ranking: ranking
            .into_iter()
            .enumerate()
            .map(|(idx, entry)| RankedRow {
                rank: idx + 1,
                name: entry.name,
                total_hours: report::format_hours(entry.total_hours),
            })
            .collect(),
    }
}

fn to_rows(summary: &WeeklySummary) -> Vec<StudentWeekRow> {
    summary
        .rows
        .iter()
        .map(|row| StudentWeekRow {
            name: row.name.clone(),
            days: row
                .days
                .iter()
                .enumerate()
                .map(|(weekday, day)| DayCell {
                    day: locale::DAY_NAMES[weekday].to_string(),
                    check_in: day.check_in.map(report::format_hours),
                    check_out: day.check_out.map(report::format_hours),
                    hours: report::format_hours(day.hours),
                })
                .collect(),
        })
        .collect()
}

/// Attendance sheet for the week containing today
#[utoipa::path(
    get,
    path = "/weekly",
    responses(
        (status = 200, description = "Per-student hours and ranking for the current week", body = WeeklyResponse)
    ),
    tag = "Report"
)]
pub async fn weekly_current(stores: web::Data<Stores>) -> impl Responder {
    let today = Local::now().date_naive();
    let week_start = report::current_week_start(today);
    // Month and week labels come from the week's Monday, so a week spanning
    // a month boundary stays under the month it started in.
    let month = week_start.month();
    let week = report::week_of_month(week_start);

    HttpResponse::Ok().json(build_weekly(&stores, today, week_start, month, week))
}

/// Attendance sheet for a selected month and week of the current year
#[utoipa::path(
    post,
    path = "/weekly",
    request_body(
        content = WeekSelect,
        content_type = "application/x-www-form-urlencoded",
        description = "1-based month and week-of-month"
    ),
    responses(
        (status = 200, description = "Per-student hours and ranking for the selected week", body = WeeklyResponse),
        (status = 400, description = "Selection out of range", body = Object, example = json!({
            "message": "Invalid month or week selection"
        }))
    ),
    tag = "Report"
)]
pub async fn weekly_select(
    form: web::Form<WeekSelect>,
    stores: web::Data<Stores>,
) -> impl Responder {
    let today = Local::now().date_naive();

    match report::selected_week_start(today.year(), form.month, form.week) {
        Some(week_start) => HttpResponse::Ok().json(build_weekly(
            &stores, today, week_start, form.month, form.week,
        )),
        None => HttpResponse::BadRequest().json(json!({
            "message": "Invalid month or week selection"
        })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::record::{AttendanceRecord, RecordKind};
    use crate::store::{STUDENTS_FILE, init_stores};
    use std::fs;
    use tempfile::TempDir;

    fn stores_with_students() -> (TempDir, Stores) {
        let dir = TempDir::new().unwrap();
        let stores = init_stores(dir.path()).unwrap();
        fs::write(
            dir.path().join(STUDENTS_FILE),
            r#"{"1001": "가영", "1002": "Bob"}"#,
        )
        .unwrap();
        (dir, stores)
    }

    fn log_entry(id: &str, kind: RecordKind, date: NaiveDate, hour: u32, minute: u32) -> AttendanceRecord {
        AttendanceRecord::new(
            id.to_string(),
            kind,
            date.and_hms_opt(hour, minute, 0).unwrap(),
        )
    }

    #[test]
    fn current_week_rows_carry_logged_hours() {
        let (_dir, stores) = stores_with_students();
        let monday = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
        stores
            .log
            .append(&log_entry("1001", RecordKind::CheckIn, monday, 9, 0))
            .unwrap();
        stores
            .log
            .append(&log_entry("1001", RecordKind::CheckOut, monday, 18, 30))
            .unwrap();

        let response = build_weekly(&stores, monday, monday, 8, 4);

        assert_eq!(response.title, "8월(4주차, 08/24~08/28) 출석부");
        assert_eq!(response.week_start, "2026-08-24");
        assert_eq!(response.week_end, "2026-08-28");
        assert_eq!(response.rows.len(), 2);
        // Hangul names sort ahead of Latin ones.
        assert_eq!(response.rows[0].name, "가영");
        assert_eq!(response.rows[0].days[0].day, "월요일");
        assert_eq!(response.rows[0].days[0].check_in.as_deref(), Some("9.0"));
        assert_eq!(response.rows[0].days[0].check_out.as_deref(), Some("18.5"));
        assert_eq!(response.rows[0].days[0].hours, "9.5");
        assert_eq!(response.rows[1].name, "Bob");
        assert_eq!(response.rows[1].days[0].check_in, None);

        // Ranking lists every directory student, zero totals last.
        assert_eq!(response.ranking.len(), 2);
        assert_eq!(response.ranking[0].rank, 1);
        assert_eq!(response.ranking[0].name, "가영");
        assert_eq!(response.ranking[0].total_hours, "9.5");
        assert_eq!(response.ranking[1].rank, 2);
        assert_eq!(response.ranking[1].name, "Bob");
        assert_eq!(response.ranking[1].total_hours, "0.0");
    }

    #[test]
    fn future_week_renders_empty_sheet_and_no_ranking() {
        let (_dir, stores) = stores_with_students();
        let today = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
        let next_monday = NaiveDate::from_ymd_opt(2026, 8, 31).unwrap();
        // A stray row inside the future week must not leak into the view.
        stores
            .log
            .append(&log_entry("1001", RecordKind::CheckIn, next_monday, 9, 0))
            .unwrap();

        let response = build_weekly(&stores, today, next_monday, 8, 5);

        assert_eq!(response.title, "8월(5주차): 미래 주차");
        assert!(response.ranking.is_empty());
        assert_eq!(response.rows.len(), 2);
        assert!(response.rows.iter().all(|row| {
            row.days
                .iter()
                .all(|day| day.check_in.is_none() && day.check_out.is_none() && day.hours == "0.0")
        }));
    }
}
