use actix_web::{HttpResponse, Responder, web};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;
use tracing::error;
use utoipa::ToSchema;

use crate::store::Stores;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddHoliday {
    #[schema(example = "2026-08-15", format = "date", value_type = String)]
    pub date: NaiveDate,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RemoveHolidays {
    #[schema(value_type = Vec<String>, example = json!(["2026-08-15"]))]
    pub dates: Vec<NaiveDate>,
}

/// Registered holiday dates, in insertion order
#[utoipa::path(
    get,
    path = "/holidays",
    responses(
        (status = 200, description = "Current holiday list", body = Object, example = json!({
            "holidays": ["2026-08-15", "2026-10-09"]
        }))
    ),
    tag = "Holidays"
)]
pub async fn list_holidays(stores: web::Data<Stores>) -> impl Responder {
    let holidays = stores.holidays.load();
    HttpResponse::Ok().json(json!({ "holidays": holidays.dates() }))
}

/// Register a holiday date
#[utoipa::path(
    post,
    path = "/holidays",
    request_body = AddHoliday,
    responses(
        (status = 200, description = "Holiday added, or already present", body = Object, example = json!({
            "message": "Holiday added",
            "holidays": ["2026-08-15"]
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Holidays"
)]
pub async fn add_holiday(
    payload: web::Json<AddHoliday>,
    stores: web::Data<Stores>,
) -> impl Responder {
    let mut holidays = stores.holidays.load();
    let added = holidays.add(payload.date);
    if added {
        if let Err(err) = stores.holidays.save(&holidays) {
            error!(error = ?err, "Failed to save holidays");
            return HttpResponse::InternalServerError().json(json!({
                "message": "Internal server error"
            }));
        }
    }

    let message = if added {
        "Holiday added"
    } else {
        "Holiday already registered"
    };
    HttpResponse::Ok().json(json!({ "message": message, "holidays": holidays.dates() }))
}

/// Remove holiday dates
#[utoipa::path(
    delete,
    path = "/holidays",
    request_body = RemoveHolidays,
    responses(
        (status = 200, description = "Listed dates removed; unknown dates are ignored", body = Object, example = json!({
            "message": "Removed 1 holiday(s)",
            "holidays": []
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Holidays"
)]
pub async fn remove_holidays(
    payload: web::Json<RemoveHolidays>,
    stores: web::Data<Stores>,
) -> impl Responder {
    let mut holidays = stores.holidays.load();
    let removed = holidays.remove_all(&payload.dates);
    if removed > 0 {
        if let Err(err) = stores.holidays.save(&holidays) {
            error!(error = ?err, "Failed to save holidays");
            return HttpResponse::InternalServerError().json(json!({
                "message": "Internal server error"
            }));
        }
    }

    HttpResponse::Ok().json(json!({
        "message": format!("Removed {} holiday(s)", removed),
        "holidays": holidays.dates(),
    }))
}
