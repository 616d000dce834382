mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::json;

#[tokio::test]
async fn registering_twice_for_the_same_event_fails() {
    let app = TestApp::new();
    app.create_user("E1", "secret1", "user").await;
    let token = app.login("E1", "secret1").await;

    let registration = json!({
        "eventName": "Tech Fest",
        "eventDate": "2025-03-01",
        "department": "CSE",
        "location": "Hall A"
    });

    let (status, body) = app
        .post_json("/api/events/register", Some(&token), registration.clone())
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Successfully registered for the event!");

    let (status, body) = app
        .post_json("/api/events/register", Some(&token), registration)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "You are already registered for this event!");

    let (status, body) = app
        .get("/api/users/registered-events", Some(&token))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["enrollment"], "E1");
    assert_eq!(body["eventCount"], 1);

    let entry = &body["registeredEvents"][0];
    assert_eq!(entry["eventName"], "Tech Fest");
    assert_eq!(entry["eventDate"], "2025-03-01");
    assert_eq!(entry["department"], "CSE");
    assert_eq!(entry["isPaid"], "Unpaid");
    assert_eq!(entry["eventDescription"], "");
    assert!(entry["registeredAt"].is_string());
}

#[tokio::test]
async fn registrations_are_scoped_to_the_caller() {
    let app = TestApp::new();
    app.create_user("E1", "secret1", "user").await;
    app.create_user("E2", "secret2", "user").await;
    let first = app.login("E1", "secret1").await;
    let second = app.login("E2", "secret2").await;

    for event_name in ["Tech Fest", "Quiz"] {
        let (status, _) = app
            .post_json(
                "/api/events/register",
                Some(&first),
                json!({ "eventName": event_name, "eventDate": "2025-03-01" }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
    }
    // 別ユーザーなら同じイベントに登録できる
    let (status, _) = app
        .post_json(
            "/api/events/register",
            Some(&second),
            json!({ "eventName": "Tech Fest", "eventDate": "2025-03-01" }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, body) = app.get("/api/users/registered-events", Some(&first)).await;
    assert_eq!(body["eventCount"], 2);
    let (_, body) = app.get("/api/users/registered-events", Some(&second)).await;
    assert_eq!(body["eventCount"], 1);
}

#[tokio::test]
async fn registration_needs_name_and_date() {
    let app = TestApp::new();
    app.create_user("E1", "secret1", "user").await;
    let token = app.login("E1", "secret1").await;

    let (status, _) = app
        .post_json(
            "/api/events/register",
            Some(&token),
            json!({ "eventName": "Tech Fest" }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = app.get("/api/users/registered-events", Some(&token)).await;
    assert_eq!(body["eventCount"], 0);
    assert_eq!(body["registeredEvents"], json!([]));
}

#[tokio::test]
async fn registration_requires_a_token() {
    let app = TestApp::new();
    let (status, _) = app
        .post_json(
            "/api/events/register",
            None,
            json!({ "eventName": "Tech Fest", "eventDate": "2025-03-01" }),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app.get("/api/users/registered-events", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
