
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::{Duration, Weekday};
use fixtures::{create_local_router, create_test_state, next_weekday};
use little_lemon_booking::handlers::BookingState;
use little_lemon_booking::logic::{AvailabilityProvider, SubmissionGateway};
use little_lemon_booking::routes::routes;
use little_lemon_booking::service::mock::{
    FailingAvailabilityService, MockReply, RecordingReservationService,
};
use little_lemon_common::services::{share_availability, share_reservation};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::String(
        String::from_utf8_lossy(&bytes).into_owned(),
    ));
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn today(state: &Arc<BookingState>) -> chrono::NaiveDate {
    state.today()
}

#[tokio::test]
async fn test_get_availability_endpoint_weekend() {
    let (status, body) = send(create_local_router(), get("/availability?date=2025-06-15")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["date"], "2025-06-15");
    assert_eq!(body["slots"].as_array().map(Vec::len), Some(12));
    assert_eq!(body["slots"][0], "10:00");
}

#[tokio::test]
async fn test_get_availability_endpoint_weekday() {
    let (status, body) = send(create_local_router(), get("/availability?date=2025-06-16")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["slots"],
        json!(["17:00", "18:00", "19:00", "20:00", "21:00", "22:00"])
    );
}

#[tokio::test]
async fn test_get_availability_endpoint_invalid_date() {
    let (status, body) = send(create_local_router(), get("/availability?date=2025-13-01")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, Value::String("Invalid date format (YYYY-MM-DD)".into()));
}

#[tokio::test]
async fn test_availability_survives_failing_source() {
    let state = create_test_state(
        AvailabilityProvider::new(Some(share_availability(FailingAvailabilityService))),
        SubmissionGateway::local_only(),
    );
    let (status, body) = send(routes(state), get("/availability?date=2025-06-16")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["slots"].as_array().map(Vec::len), Some(6));
}

#[tokio::test]
async fn test_get_booking_options_endpoint() {
    let (status, body) = send(create_local_router(), get("/booking/options")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["min_guests"], 1);
    assert_eq!(body["max_guests"], 10);
    assert_eq!(body["seating"][3], json!({"value": "window", "label": "Window Seat"}));
}

#[tokio::test]
async fn test_book_endpoint_accepts_numeric_guests() {
    let state = create_test_state(
        AvailabilityProvider::fallback_only(),
        SubmissionGateway::local_only(),
    );
    let date = next_weekday(today(&state) + Duration::days(1), Weekday::Sat);
    let payload = json!({
        "date": date.to_string(),
        "time": "11:00",
        "guests": 2,
        "occasion": "anniversary",
        "seating": "outdoor"
    });

    let (status, body) = send(routes(state), post_json("/book", payload)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["next"], "/confirmed");
    assert_eq!(body["reservation"]["occasion"], "anniversary");
    assert_eq!(body["reservation"]["guests"], 2);
}

#[tokio::test]
async fn test_book_endpoint_validation_errors() {
    let (status, body) = send(
        create_local_router(),
        post_json("/book", json!({"date": "", "time": "", "guests": "0"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["errors"]["date"], "Please select a date");
    assert_eq!(body["errors"]["time"], "Please select a time");
    assert_eq!(body["errors"]["guests"], "Number of guests must be between 1 and 10");
}

#[tokio::test]
async fn test_book_endpoint_rejects_past_date() {
    let state = create_test_state(
        AvailabilityProvider::fallback_only(),
        SubmissionGateway::local_only(),
    );
    let yesterday = today(&state) - Duration::days(1);
    let payload = json!({"date": yesterday.to_string(), "time": "17:00", "guests": 2});

    let (status, body) = send(routes(state), post_json("/book", payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"]["date"], "Please select today or a later date");
}

#[tokio::test]
async fn test_book_endpoint_rejected_by_sink() {
    let sink = Arc::new(RecordingReservationService::new(MockReply::Reject));
    let state = create_test_state(
        AvailabilityProvider::fallback_only(),
        SubmissionGateway::new(Some(share_reservation(sink.clone()))),
    );
    let date = today(&state) + Duration::days(1);
    let payload = json!({"date": date.to_string(), "time": "17:00", "guests": 4});

    let (status, body) = send(routes(state), post_json("/book", payload)).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["message"], "Failed to submit booking. Please try again.");
    assert!(body.get("next").is_none());
    assert_eq!(sink.requests().len(), 1);
}
