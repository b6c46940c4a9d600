use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, web};
use chrono::{Local, NaiveDateTime, NaiveTime};
use derive_more::Display;
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};
use utoipa::ToSchema;

use crate::config::Config;
use crate::locale;
use crate::model::record::{AttendanceRecord, RecordKind};
use crate::policy::{self, AttendanceWindow};
use crate::store::Stores;

/// Kiosk form payload. Fields default to empty strings so a half-filled form
/// gets the kiosk message instead of a deserialization error.
#[derive(Debug, Deserialize, ToSchema)]
pub struct RecordForm {
    #[serde(default)]
    #[schema(example = "20261042")]
    pub student_id: String,
    /// `check_in` or `check_out`
    #[serde(default)]
    #[schema(example = "check_in")]
    pub action: String,
}

/// Why a record request was refused. A rejection never touches the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Rejection {
    #[display(fmt = "Student ID and action are required")]
    MissingInput,
    #[display(fmt = "Student ID is not registered")]
    UnknownStudent,
    #[display(
        fmt = "Attendance is only open on weekdays, {:02}:00~{:02}:00",
        open,
        close
    )]
    OutsideWindow { open: u32, close: u32 },
    #[display(fmt = "Already checked in today")]
    AlreadyCheckedIn,
    #[display(fmt = "No check-in found for today")]
    NoCheckInToday,
    #[display(fmt = "Already checked out today")]
    AlreadyCheckedOut,
}

impl Rejection {
    fn status(&self) -> StatusCode {
        match self {
            Rejection::UnknownStudent => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

/// A record that made it into the log, ready to be announced to the kiosk.
#[derive(Debug)]
pub struct Accepted {
    pub student: String,
    pub kind: RecordKind,
    pub time: NaiveTime,
}

#[derive(Debug)]
pub enum RecordOutcome {
    Accepted(Accepted),
    Rejected(Rejection),
}

/// Runs the whole check-in/check-out protocol against the stores: input
/// checks, directory lookup, attendance window, duplicate rules, then the
/// append. Split out of the handler so it can run under a fixed clock.
pub fn apply_record(
    now: NaiveDateTime,
    student_id: &str,
    action: &str,
    window: AttendanceWindow,
    stores: &Stores,
) -> anyhow::Result<RecordOutcome> {
    let student_id = student_id.trim();
    if student_id.is_empty() {
        return Ok(RecordOutcome::Rejected(Rejection::MissingInput));
    }
    let Some(kind) = RecordKind::from_action(action) else {
        return Ok(RecordOutcome::Rejected(Rejection::MissingInput));
    };

    // Directory and holidays are re-read per request so edits to the files
    // take effect without a restart.
    let directory = stores.students.load();
    let Some(name) = directory.name_of(student_id) else {
        return Ok(RecordOutcome::Rejected(Rejection::UnknownStudent));
    };

    let holidays = stores.holidays.load();
    if !policy::is_within_attendance_window(now, window, &holidays) {
        return Ok(RecordOutcome::Rejected(Rejection::OutsideWindow {
            open: window.open_hour,
            close: window.close_hour,
        }));
    }

    let today = now.date();
    match kind {
        RecordKind::CheckIn => {
            if stores.log.has_record(student_id, RecordKind::CheckIn, today) {
                return Ok(RecordOutcome::Rejected(Rejection::AlreadyCheckedIn));
            }
        }
        RecordKind::CheckOut => {
            if !stores.log.has_record(student_id, RecordKind::CheckIn, today) {
                return Ok(RecordOutcome::Rejected(Rejection::NoCheckInToday));
            }
            if stores.log.has_record(student_id, RecordKind::CheckOut, today) {
                return Ok(RecordOutcome::Rejected(Rejection::AlreadyCheckedOut));
            }
        }
    }

    let record = AttendanceRecord::new(student_id.to_string(), kind, now);
    stores.log.append(&record)?;

    Ok(RecordOutcome::Accepted(Accepted {
        student: name.to_string(),
        kind,
        time: now.time(),
    }))
}

/// Check-in / check-out endpoint for the kiosk form
#[utoipa::path(
    post,
    path = "/record",
    request_body(
        content = RecordForm,
        content_type = "application/x-www-form-urlencoded",
        description = "Kiosk form fields"
    ),
    responses(
        (status = 200, description = "Record appended", body = Object, example = json!({
            "message": "가영님 출근 처리되었습니다.",
            "student": "가영",
            "time": "오전 09:12"
        })),
        (status = 400, description = "Missing input, closed window, or duplicate record", body = Object, example = json!({
            "message": "Already checked in today"
        })),
        (status = 404, description = "Student ID is not registered", body = Object, example = json!({
            "message": "Student ID is not registered"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn record(
    form: web::Form<RecordForm>,
    stores: web::Data<Stores>,
    config: web::Data<Config>,
) -> impl Responder {
    let now = Local::now().naive_local();
    let window = config.attendance_window();

    match apply_record(now, &form.student_id, &form.action, window, &stores) {
        Ok(RecordOutcome::Accepted(accepted)) => {
            info!("Recorded {} for student {}", accepted.kind, form.student_id);
            HttpResponse::Ok().json(json!({
                "message": locale::record_message(&accepted.student, accepted.kind),
                "student": accepted.student,
                "time": locale::format_time(accepted.time),
            }))
        }
        Ok(RecordOutcome::Rejected(rejection)) => {
            HttpResponse::build(rejection.status()).json(json!({
                "message": rejection.to_string(),
            }))
        }
        Err(err) => {
            error!(error = ?err, "Failed to apply record");
            HttpResponse::InternalServerError().json(json!({
                "message": "Internal server error"
            }))
        }
    }
}
