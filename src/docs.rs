use crate::api::attendance::RecordForm;
use crate::api::holiday::{AddHoliday, RemoveHolidays};
use crate::api::weekly::{DayCell, RankedRow, StudentWeekRow, WeekSelect, WeeklyResponse};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Attendance Kiosk API",
        version = "1.0.0",
        description = r#"
## Student Attendance Kiosk

This API powers a shared check-in/check-out kiosk for a student study room,
backed by flat files instead of a database.

### 🔹 Key Features
- **Attendance Recording**
  - Check in and check out with a student ID, weekdays 08:00~22:00
- **Weekly Report**
  - Per-day hours rounded to the half hour, plus a weekly ranking
- **Holiday Management**
  - Dates on which attendance is closed
- **Daily Maintenance**
  - Automatic dated backup and log reset once per calendar day

### 📦 Response Format
- JSON-based responses; kiosk-facing strings are Korean

---
Built with **Rust**, **Actix Web**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::home::home,

        crate::api::attendance::record,

        crate::api::weekly::weekly_current,
        crate::api::weekly::weekly_select,

        crate::api::holiday::list_holidays,
        crate::api::holiday::add_holiday,
        crate::api::holiday::remove_holidays
    ),
    components(
        schemas(
            RecordForm,
            WeekSelect,
            WeeklyResponse,
            StudentWeekRow,
            DayCell,
            RankedRow,
            AddHoliday,
            RemoveHolidays
        )
    ),
    tags(
        (name = "Attendance", description = "Kiosk check-in/check-out APIs"),
        (name = "Report", description = "Weekly attendance report APIs"),
        (name = "Holidays", description = "Holiday calendar APIs"),
    )
)]
pub struct ApiDoc;
