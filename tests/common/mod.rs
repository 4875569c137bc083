use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use chrono::{Datelike, Local, NaiveDate};
use http_body_util::BodyExt;
use parentportal::parentportal_config::{CorsConfig, EmailConfig, JwtConfig};
use parentportal::parentportal_models::{
    BalanceResultSets, Inquiry, InquiryId, RawSession, ResultRow, Student, StudentId, TimeSlotId,
};
use parentportal::router::init_router;
use parentportal::state::AppState;
use parentportal::store::MemoryStore;
use serde_json::{Value, json};
use tower::ServiceExt;

pub const PARENT_PHONE: &str = "555-0100";
pub const NO_STUDENTS_PHONE: &str = "555-0142";
pub const PARENT_INQUIRY: i32 = 7;
pub const ADA: i32 = 11;
pub const ALAN: i32 = 12;

pub fn jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "integration-test-secret".to_string(),
        access_token_expiry: 3600,
    }
}

pub fn test_app(store: MemoryStore) -> Router {
    let state = AppState::new(
        Arc::new(store),
        jwt_config(),
        EmailConfig::disabled(),
        CorsConfig::parse("http://localhost:5173"),
    );
    init_router(state)
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// The first of this month, unless today is the first.
#[allow(dead_code)]
pub fn earlier_this_month() -> Option<NaiveDate> {
    today().with_day(1).filter(|d| *d < today())
}

/// A date in a different month than today.
pub fn last_month() -> NaiveDate {
    today().with_day(1).and_then(|d| d.pred_opt()).unwrap()
}

fn session(student_id: i32, time_id: Option<i32>, date: NaiveDate) -> RawSession {
    RawSession {
        day: None,
        time_id: time_id.map(TimeSlotId),
        schedule_date: Some(date.format("%Y-%m-%d").to_string()),
        student_id: StudentId(student_id),
    }
}

fn row(value: Value) -> ResultRow {
    match value {
        Value::Object(map) => map,
        _ => panic!("row fixture must be an object"),
    }
}

pub fn balance_sets() -> BalanceResultSets {
    BalanceResultSets::new(vec![
        vec![row(json!({ "InquiryID": PARENT_INQUIRY, "Email": "mom@example.com" }))],
        vec![row(json!({
            "InquiryID": PARENT_INQUIRY,
            "Purchases": 40.0,
            "AttendancePresent": -5.0,
            "UnexcusedAbsences": -2.0,
            "MiscAdjustments": 0.0,
        }))],
        vec![row(json!({ "PurchasedOn": "2026-09-01", "Hours": 40.0, "Amount": 1200.0 }))],
    ])
}

/// One family with two students, a family without students, and sessions
/// for Ada today, earlier this month and last month, plus one for Alan today.
pub fn family_store() -> MemoryStore {
    let mut store = MemoryStore::new()
        .with_inquiry(Inquiry {
            inquiry_id: InquiryId(PARENT_INQUIRY),
            email: Some("mom@example.com".to_string()),
            contact_phone: Some(PARENT_PHONE.to_string()),
        })
        .with_inquiry(Inquiry {
            inquiry_id: InquiryId(9),
            email: None,
            contact_phone: Some(NO_STUDENTS_PHONE.to_string()),
        })
        .with_student(
            InquiryId(PARENT_INQUIRY),
            Student {
                id: StudentId(ADA),
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
            },
        )
        .with_student(
            InquiryId(PARENT_INQUIRY),
            Student {
                id: StudentId(ALAN),
                first_name: "Alan".to_string(),
                last_name: "Turing".to_string(),
            },
        )
        .with_time_slot(TimeSlotId(1), Some("13:00:00"))
        .with_time_slot(TimeSlotId(2), Some("09:30:00"))
        .with_balance(InquiryId(PARENT_INQUIRY), balance_sets())
        .with_session(session(ADA, Some(1), today()))
        .with_session(session(ADA, Some(2), last_month()))
        .with_session(session(ALAN, None, today()));

    if let Some(date) = earlier_this_month() {
        store = store.with_session(session(ADA, Some(2), date));
    }
    store
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[allow(dead_code)]
pub fn get_with_token(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: Value, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

/// Logs in through the API and returns the access token.
#[allow(dead_code)]
pub async fn login(app: Router, contact_number: &str) -> String {
    let (status, body) = send(
        app,
        post_json(
            "/api/auth/login",
            json!({ "contact_number": contact_number }),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed: {body}");
    body["access_token"].as_str().unwrap().to_string()
}
