use actix_web::{HttpResponse, Responder, get, web};
use chrono::Local;
use serde_json::json;
use tracing::warn;

use crate::locale;
use crate::maintenance;
use crate::store::Stores;

/// Kiosk status line: today's date and the current time
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Localized date and clock for the kiosk screen", body = Object, example = json!({
            "date": "2026년 08월 24일 월요일",
            "time": "오후 03:05"
        }))
    ),
    tag = "Attendance"
)]
#[get("/")]
pub async fn home(stores: web::Data<Stores>) -> impl Responder {
    let now = Local::now().naive_local();

    // Maintenance is best-effort here; a failed backup or reset must not
    // take down the kiosk screen.
    if let Err(err) = maintenance::run_daily(&stores, now.date()) {
        warn!(error = ?err, "Daily maintenance failed");
    }

    HttpResponse::Ok().json(json!({
        "date": locale::format_date(now.date()),
        "time": locale::format_time(now.time()),
    }))
}
