//! API Integration Tests
//!
//! These tests require a running PostgreSQL instance reachable through
//! `DATABASE_URL`. Every test skips itself when it is unset.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use chrono::Duration;
use futures::future::join_all;
use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;
use serde_json::{json, Value};

/// Create an event through the admin API and return its first link
async fn create_event(server: &TestServer, token: &str, starts_in: Duration) -> EventCreatedResponse {
    let response = server
        .post_auth(
            "/api/admin/add-event",
            token,
            &AddEventRequest::starting_in(starts_in),
        )
        .await
        .unwrap();
    assert_json(response, StatusCode::OK).await.unwrap()
}

async fn submit(server: &TestServer, link_id: &str, request: &SubmitRequest) -> reqwest::Response {
    server
        .post(&format!("/api/submit/{link_id}"), request)
        .await
        .unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_root_and_health() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let info: Value = assert_json(server.get("/").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert_eq!(info["status"], "ok");

    let response = server.get("/health").await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
    assert_status(response, StatusCode::OK).await.unwrap();

    let ready: Value = assert_json(server.get("/health/ready").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert_eq!(ready["checks"]["database"], "healthy");
}

// ============================================================================
// Admin Tests
// ============================================================================

#[tokio::test]
async fn test_admin_login() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post(
            "/api/admin/login",
            &LoginRequest {
                username: ADMIN_USERNAME.to_string(),
                password: ADMIN_PASSWORD.to_string(),
            },
        )
        .await
        .unwrap();
    let token: AdminTokenResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(token.token_type, "Bearer");
    assert!(token.expires_in > 0);

    let response = server
        .post(
            "/api/admin/login",
            &LoginRequest {
                username: ADMIN_USERNAME.to_string(),
                password: "guess".to_string(),
            },
        )
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(body.error.code, "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn test_admin_routes_require_token() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let body = AddEventRequest::starting_in(Duration::days(1));

    let response = server.post("/api/admin/add-event", &body).await.unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(error.error.code, "MISSING_AUTHORIZATION");

    let response = server
        .post_auth("/api/admin/add-event", "not-a-token", &body)
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server.get("/api/winners").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_add_event_and_generate_link() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.admin_token().await.unwrap();

    let created = create_event(&server, &token, Duration::days(30)).await;
    assert_eq!(created.message, "Event and link created");
    assert_eq!(created.expires_at - created.event_date, Duration::hours(1));

    let status: LinkStatusResponse = assert_json(
        server
            .get(&format!("/api/check-link/{}", created.link_id))
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert!(!status.is_used);

    let response = server
        .post_auth("/api/generate-link", &token, &json!({}))
        .await
        .unwrap();
    let generated: GeneratedLinkResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_ne!(generated.link_id, created.link_id);

    let response = server
        .post_auth(
            "/api/admin/add-event",
            &token,
            &json!({ "eventDate": "next tuesday" }),
        )
        .await
        .unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error.code, "INVALID_EVENT_DATE");
}

// ============================================================================
// Redemption Tests
// ============================================================================

#[tokio::test]
async fn test_submission_outcomes() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.admin_token().await.unwrap();

    // Not started
    let future = create_event(&server, &token, Duration::days(10)).await;
    let response = submit(&server, &future.link_id, &SubmitRequest::unique()).await;
    let body: SubmissionResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.attempt_count, 1);
    assert!(body.event_date_formatted.is_some());

    // Expired
    let past = create_event(&server, &token, -Duration::hours(2)).await;
    let response = submit(&server, &past.link_id, &SubmitRequest::unique()).await;
    let body: SubmissionResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.message, "This link has expired!");
    assert!(body.expired_at_formatted.is_some());

    // Active: first submission wins, second sees the winner
    let live = create_event(&server, &token, -Duration::minutes(1)).await;
    let winner = SubmitRequest::unique();
    let response = submit(&server, &live.link_id, &winner).await;
    let body: SubmissionResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.attempt_count, 1);
    assert!(body.role_reward.is_some());
    assert!(body.expires_at.is_some());

    let response = submit(&server, &live.link_id, &SubmitRequest::unique()).await;
    let body: SubmissionResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.attempt_count, 2);
    assert_eq!(body.winner_username.as_deref(), Some(winner.username.as_str()));

    let status: LinkStatusResponse = assert_json(
        server
            .get(&format!("/api/check-link/{}", live.link_id))
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert!(status.is_used);
}

#[tokio::test]
async fn test_unknown_and_invalid_links() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = submit(&server, "not-a-link", &SubmitRequest::unique()).await;
    let body: SubmissionResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.message, "Invalid link!");
    assert_eq!(body.attempt_count, 0);

    let response = server
        .get("/api/check-link/00000000-0000-4000-8000-000000000000")
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    // Blank identity is rejected before any lookup
    let response = server
        .post(
            "/api/submit/00000000-0000-4000-8000-000000000000",
            &json!({ "username": " ", "discordId": "1" }),
        )
        .await
        .unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error.code, "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_concurrent_submissions_have_one_winner() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.admin_token().await.unwrap();
    let live = create_event(&server, &token, -Duration::seconds(5)).await;

    let contenders = 25;
    let requests: Vec<SubmitRequest> = (0..contenders).map(|_| SubmitRequest::unique()).collect();
    let responses = join_all(
        requests
            .iter()
            .map(|request| submit(&server, &live.link_id, request)),
    )
    .await;

    let mut winners = 0;
    let mut counts = Vec::new();
    for response in responses {
        let status = response.status();
        let body: SubmissionResponse = response.json().await.unwrap();
        if status == StatusCode::OK {
            winners += 1;
        } else {
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert!(body.winner_username.is_some());
        }
        counts.push(body.attempt_count);
    }

    assert_eq!(winners, 1);
    counts.sort_unstable();
    assert_eq!(counts, (1..=contenders).collect::<Vec<i32>>());
}

#[tokio::test]
async fn test_submit_rate_limit() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start_with(&[("RATE_LIMIT_SUBMIT_PER_HOUR", "2")])
        .await
        .expect("Failed to start server");

    for _ in 0..2 {
        let response = submit(&server, "not-a-link", &SubmitRequest::unique()).await;
        assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
    }

    let response = submit(&server, "not-a-link", &SubmitRequest::unique()).await;
    assert_status(response, StatusCode::TOO_MANY_REQUESTS).await.unwrap();

    // Other routes keep their own budget
    let response = server.get("/health").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Public Listing Tests
// ============================================================================

#[tokio::test]
async fn test_winner_listings_and_stats() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.admin_token().await.unwrap();

    let before: StatsResponse = assert_json(
        server.get("/api/public/stats").await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();

    let live = create_event(&server, &token, -Duration::seconds(30)).await;
    let winner = SubmitRequest::unique();
    let response = submit(&server, &live.link_id, &winner).await;
    assert_status(response, StatusCode::OK).await.unwrap();

    let after: StatsResponse = assert_json(
        server.get("/api/public/stats").await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert!(after.total_events > before.total_events);
    assert!(after.total_roles > before.total_roles);
    assert!(after.average_speed >= 0);

    let admin_view: Vec<WinnerResponse> = assert_json(
        server.get_auth("/api/winners", &token).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    let entry = admin_view
        .iter()
        .find(|w| w.id == live.link_id)
        .expect("winner listed");
    assert_eq!(entry.winner_username, winner.username);
    assert_eq!(entry.discord_id.as_deref(), Some(winner.discord_id.as_str()));

    let public_view: Vec<WinnerResponse> = assert_json(
        server.get("/api/public/winners").await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert!(public_view.len() <= 10);
    assert!(public_view.iter().all(|w| w.discord_id.is_none()));

    let next: Value = assert_json(
        server.get("/api/public/next-event").await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert!(next["current_time"].is_string());
}
