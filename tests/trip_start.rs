//! Starting a trip: validation, busy guard and failure reporting.

mod common;

use std::time::Duration;

use common::{test_client, trip_status, MockBackend, MockResponse, ACTIVE_TRIP};
use tripclient::client::TripError;
use tripclient::trip::{Activity, TripPhase};

const STARTED: &str = r#"{"success": true, "active_trip": true, "trip_id": 42, "device_code": "AB1234"}"#;

#[tokio::test]
async fn blank_code_is_rejected_locally() {
    let backend = MockBackend::idle().await;
    let (client, _host) = test_client(&backend);

    let result = client.start_trip("   ").await;

    assert!(matches!(result, Err(TripError::EmptyCode)));
    let state = client.state();
    assert_eq!(state.error.as_deref(), Some("Enter scooter code"));
    assert_eq!(state.activity, Activity::Free);
    assert!(backend.requests_to("/api/start_trip").await.is_empty());
}

#[tokio::test]
async fn success_adopts_trip_and_polls_it() {
    let backend = MockBackend::idle().await;
    backend
        .enqueue("/api/start_trip", MockResponse::json(STARTED))
        .await;
    backend
        .enqueue("/api/trip_info", MockResponse::json(ACTIVE_TRIP))
        .await;
    let (client, _host) = test_client(&backend);
    client.set_code("AB1234");

    let trip = client.start_trip(" AB1234 ").await.unwrap();

    assert_eq!(trip.trip_id().as_deref(), Some("42"));
    // The payload keeps every field, including the envelope's `success`
    assert_eq!(trip, trip_status(STARTED));

    let starts = backend.requests_to("/api/start_trip").await;
    assert_eq!(starts.len(), 1);
    assert_eq!(starts[0].method, "POST");
    assert_eq!(starts[0].json(), serde_json::json!({"code": "AB1234"}));

    let polls = backend.requests_to("/api/trip_info").await;
    assert_eq!(polls.len(), 1);
    assert_eq!(polls[0].query.as_deref(), Some("trip_id=42"));

    let state = client.state();
    assert_eq!(state.activity, Activity::Free);
    assert_eq!(state.code_input, "");
    assert_eq!(state.error, None);
    // The follow-up poll replaced the adopted payload
    let active = state.active_trip().unwrap();
    assert_eq!(active, &trip_status(ACTIVE_TRIP));
}

#[tokio::test]
async fn success_payload_is_stored_verbatim() {
    let backend = MockBackend::idle().await;
    backend
        .enqueue("/api/start_trip", MockResponse::json(STARTED))
        .await;
    // Follow-up poll answers with nothing the reducer acts on
    backend
        .enqueue(
            "/api/trip_info",
            MockResponse::json(r#"{"active_trip": false, "message": "Maintenance"}"#),
        )
        .await;
    let (client, _host) = test_client(&backend);

    client.start_trip("ABC123").await.unwrap();

    assert!(backend.wait_for_requests("/api/trip_info", 1, Duration::from_secs(1)).await);
    let state = client.state();
    assert_eq!(state.active_trip(), Some(&trip_status(STARTED)));
    assert_eq!(
        serde_json::to_value(state.active_trip().unwrap()).unwrap(),
        serde_json::from_str::<serde_json::Value>(STARTED).unwrap()
    );
}

#[tokio::test]
async fn rejected_start_shows_detail() {
    let backend = MockBackend::idle().await;
    backend
        .enqueue(
            "/api/start_trip",
            MockResponse::json(r#"{"success": false, "detail": "Scooter is busy"}"#),
        )
        .await;
    let (client, _host) = test_client(&backend);

    let result = client.start_trip("AB1234").await;

    assert!(matches!(result, Err(TripError::Rejected { .. })));
    let state = client.state();
    assert_eq!(state.error.as_deref(), Some("Scooter is busy"));
    assert_eq!(state.phase, TripPhase::Idle);
    assert_eq!(state.activity, Activity::Free);
}

#[tokio::test]
async fn rejected_start_falls_back_to_message_then_default() {
    let backend = MockBackend::idle().await;
    backend
        .enqueue(
            "/api/start_trip",
            MockResponse::json(r#"{"success": false, "message": "Low battery"}"#),
        )
        .await;
    backend
        .enqueue("/api/start_trip", MockResponse::json(r#"{"success": false}"#))
        .await;
    let (client, _host) = test_client(&backend);

    let _ = client.start_trip("AB1234").await;
    assert_eq!(client.state().error.as_deref(), Some("Low battery"));

    let _ = client.start_trip("AB1234").await;
    assert_eq!(client.state().error.as_deref(), Some("Failed to start trip"));
}

#[tokio::test]
async fn http_error_uses_detail_or_status() {
    let backend = MockBackend::idle().await;
    backend
        .enqueue(
            "/api/start_trip",
            MockResponse::with_status(400, r#"{"detail": "Scooter not found"}"#),
        )
        .await;
    backend
        .enqueue("/api/start_trip", MockResponse::text(503, "unavailable"))
        .await;
    let (client, _host) = test_client(&backend);

    let _ = client.start_trip("ZZ0000").await;
    assert_eq!(client.state().error.as_deref(), Some("Scooter not found"));

    let _ = client.start_trip("ZZ0000").await;
    assert_eq!(client.state().error.as_deref(), Some("API error: 503"));
    assert_eq!(client.state().activity, Activity::Free);
}

#[tokio::test]
async fn next_attempt_clears_previous_error() {
    let backend = MockBackend::idle().await;
    backend
        .enqueue(
            "/api/start_trip",
            MockResponse::json(r#"{"success": false, "detail": "Scooter is busy"}"#),
        )
        .await;
    backend
        .enqueue("/api/start_trip", MockResponse::json(STARTED))
        .await;
    let (client, _host) = test_client(&backend);

    let _ = client.start_trip("AB1234").await;
    assert!(client.state().error.is_some());

    client.start_trip("AB1234").await.unwrap();
    assert_eq!(client.state().error, None);
}

#[tokio::test]
async fn concurrent_start_is_dropped_while_busy() {
    let backend = MockBackend::idle().await;
    backend
        .enqueue(
            "/api/start_trip",
            MockResponse::json(STARTED).with_delay(200),
        )
        .await;
    let (client, _host) = test_client(&backend);

    let first = {
        let client = client.clone();
        tokio::spawn(async move { client.start_trip("AB1234").await })
    };
    assert!(
        common::eventually(Duration::from_secs(2), || client.state().activity == Activity::Busy)
            .await
    );

    let second = client.start_trip("AB1234").await;
    assert!(matches!(second, Err(TripError::Busy)));
    assert_eq!(client.state().error, None);

    first.await.unwrap().unwrap();
    assert_eq!(backend.requests_to("/api/start_trip").await.len(), 1);
    assert_eq!(client.state().activity, Activity::Free);
}
