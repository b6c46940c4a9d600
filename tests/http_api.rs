use actix_web::http::StatusCode;
use actix_web::web::Data;
use actix_web::{App, test};
use chrono::Local;
use chulseok::config::Config;
use chulseok::model::record::{AttendanceRecord, RecordKind};
use chulseok::store::{STUDENTS_FILE, Stores, init_stores};
use chulseok::{report, routes};
use serde_json::{Value, json};
use std::fs;
use std::net::SocketAddr;
use std::path::Path;
use tempfile::TempDir;

fn test_config(data_dir: &Path) -> Config {
    Config {
        server_addr: "127.0.0.1:0".to_string(),
        data_dir: data_dir.to_path_buf(),
        open_hour: 8,
        close_hour: 22,
        rate_record_per_min: 600,
        rate_holiday_per_min: 600,
    }
}

fn seeded_stores(dir: &TempDir) -> Stores {
    let stores = init_stores(dir.path()).unwrap();
    fs::write(
        dir.path().join(STUDENTS_FILE),
        r#"{"1001": "가영", "1002": "Bob"}"#,
    )
    .unwrap();
    stores
}

// The per-IP rate limiter needs a peer address on every request.
fn peer() -> SocketAddr {
    "127.0.0.1:40000".parse().unwrap()
}

macro_rules! app {
    ($stores:expr, $config:expr) => {
        test::init_service(
            App::new()
                .app_data(Data::new($stores.clone()))
                .app_data(Data::new($config.clone()))
                .configure(|cfg| routes::configure(cfg, $config.clone())),
        )
        .await
    };
}

#[actix_web::test]
async fn record_requires_student_id_and_action() {
    let dir = TempDir::new().unwrap();
    let stores = seeded_stores(&dir);
    let config = test_config(dir.path());
    let app = app!(stores, config);

    let req = test::TestRequest::post()
        .uri("/record")
        .peer_addr(peer())
        .set_form([("student_id", ""), ("action", "check_in")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Student ID and action are required");
}

#[actix_web::test]
async fn record_rejects_unregistered_students() {
    let dir = TempDir::new().unwrap();
    let stores = seeded_stores(&dir);
    let config = test_config(dir.path());
    let app = app!(stores, config);

    let req = test::TestRequest::post()
        .uri("/record")
        .peer_addr(peer())
        .set_form([("student_id", "9999"), ("action", "check_in")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Student ID is not registered");
}

#[actix_web::test]
async fn holiday_add_list_remove_flow() {
    let dir = TempDir::new().unwrap();
    let stores = seeded_stores(&dir);
    let config = test_config(dir.path());
    let app = app!(stores, config);

    let req = test::TestRequest::get()
        .uri("/holidays")
        .peer_addr(peer())
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["holidays"], json!([]));

    let req = test::TestRequest::post()
        .uri("/holidays")
        .peer_addr(peer())
        .set_json(json!({ "date": "2026-12-25" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["message"], "Holiday added");
    assert_eq!(body["holidays"], json!(["2026-12-25"]));

    let req = test::TestRequest::post()
        .uri("/holidays")
        .peer_addr(peer())
        .set_json(json!({ "date": "2026-12-25" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["message"], "Holiday already registered");

    let req = test::TestRequest::delete()
        .uri("/holidays")
        .peer_addr(peer())
        .set_json(json!({ "dates": ["2026-12-25", "2026-01-01"] }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["message"], "Removed 1 holiday(s)");
    assert_eq!(body["holidays"], json!([]));
}

#[actix_web::test]
async fn weekly_report_shows_current_week_rows() {
    let dir = TempDir::new().unwrap();
    let stores = seeded_stores(&dir);
    let config = test_config(dir.path());

    let monday = report::current_week_start(Local::now().date_naive());
    stores
        .log
        .append(&AttendanceRecord::new(
            "1001".to_string(),
            RecordKind::CheckIn,
            monday.and_hms_opt(9, 0, 0).unwrap(),
        ))
        .unwrap();
    stores
        .log
        .append(&AttendanceRecord::new(
            "1001".to_string(),
            RecordKind::CheckOut,
            monday.and_hms_opt(18, 30, 0).unwrap(),
        ))
        .unwrap();

    let app = app!(stores, config);
    let req = test::TestRequest::get().uri("/weekly").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["week_start"], monday.format("%Y-%m-%d").to_string());
    assert_eq!(body["rows"][0]["name"], "가영");
    assert_eq!(body["rows"][0]["days"][0]["day"], "월요일");
    assert_eq!(body["rows"][0]["days"][0]["check_in"], "9.0");
    assert_eq!(body["rows"][0]["days"][0]["check_out"], "18.5");
    assert_eq!(body["rows"][0]["days"][0]["hours"], "9.5");
    assert_eq!(body["rows"][1]["name"], "Bob");
    assert_eq!(body["ranking"][0]["name"], "가영");
    assert_eq!(body["ranking"][0]["total_hours"], "9.5");
}

#[actix_web::test]
async fn weekly_selection_rejects_out_of_range_input() {
    let dir = TempDir::new().unwrap();
    let stores = seeded_stores(&dir);
    let config = test_config(dir.path());
    let app = app!(stores, config);

    let req = test::TestRequest::post()
        .uri("/weekly")
        .set_form([("month", "13"), ("week", "1")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Invalid month or week selection");
}

#[actix_web::test]
async fn home_reports_kiosk_clock_and_runs_maintenance() {
    let dir = TempDir::new().unwrap();
    let stores = seeded_stores(&dir);
    let config = test_config(dir.path());
    let app = app!(stores, config);

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    let date = body["date"].as_str().unwrap();
    let time = body["time"].as_str().unwrap();
    assert!(date.ends_with("요일"), "unexpected date line: {date}");
    assert!(
        time.starts_with("오전") || time.starts_with("오후"),
        "unexpected clock line: {time}"
    );

    // The home screen kicks the daily maintenance pass.
    assert!(stores.reset_marker.exists());
}
