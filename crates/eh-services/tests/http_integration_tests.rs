//! Integration tests for the HTTP collaborators using wiremock mock server

use eh_auth::{PasswordResetService, ResetFailureKind};
use eh_config::RetryConfig;
use eh_core::Announcement;
use eh_services::{
    AnnouncementPublisher, GeminiReportGenerator, HttpAnnouncementPublisher, HttpClient,
    HttpPasswordResetService, ReportGenerator, ServiceError,
};

use std::time::Duration;

use reqwest::Method;
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, body_string_contains, header, method, path},
};

fn retry(max_attempts: u32) -> RetryConfig {
    RetryConfig {
        max_attempts,
        initial_delay_ms: 10,
        max_delay_secs: 1,
        backoff_multiplier: 2.0,
        jitter: false,
    }
}

fn reset_service(base_url: &str) -> HttpPasswordResetService {
    HttpPasswordResetService::new(base_url, Duration::from_secs(2), retry(2)).unwrap()
}

#[tokio::test]
async fn test_password_reset_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/password-resets"))
        .and(body_json(json!({ "email": "student@abuad.edu.ng" })))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = reset_service(&mock_server.uri())
        .request_reset("student@abuad.edu.ng")
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_password_reset_unknown_email() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/password-resets"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": { "code": "NOT_FOUND", "message": "No account for that email" }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let failure = reset_service(&mock_server.uri())
        .request_reset("nobody@abuad.edu.ng")
        .await
        .unwrap_err();

    assert_eq!(failure.kind, ResetFailureKind::UnknownEmail);
    assert!(failure.message.contains("NOT_FOUND"));
}

#[tokio::test]
async fn test_password_reset_rejected_after_retries() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/password-resets"))
        .respond_with(ResponseTemplate::new(500))
        .expect(2)
        .mount(&mock_server)
        .await;

    let failure = reset_service(&mock_server.uri())
        .request_reset("student@abuad.edu.ng")
        .await
        .unwrap_err();

    assert_eq!(failure.kind, ResetFailureKind::Rejected);
}

#[tokio::test]
async fn test_password_reset_unreachable() {
    // Nothing listens on the discard port
    let failure = reset_service("http://127.0.0.1:9")
        .request_reset("student@abuad.edu.ng")
        .await
        .unwrap_err();

    assert_eq!(failure.kind, ResetFailureKind::Unreachable);
}

#[tokio::test]
async fn test_report_generation_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-1.5-flash:generateContent"))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_string_contains("Title: Ohm's Law"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [
                { "content": { "parts": [ { "text": "## Theory\nV = IR" } ] } }
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let generator = GeminiReportGenerator::new(
        &mock_server.uri(),
        "gemini-1.5-flash",
        Some(String::from("test-key")),
        Duration::from_secs(2),
        retry(1),
    )
    .unwrap();

    let report = generator
        .generate("Ohm's Law", "Verify V = IR", "V=5, I=0.5")
        .await
        .unwrap();

    assert_eq!(report, "## Theory\nV = IR");
}

#[tokio::test]
async fn test_report_generation_empty_candidates() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-1.5-flash:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
        .mount(&mock_server)
        .await;

    let generator = GeminiReportGenerator::new(
        &mock_server.uri(),
        "gemini-1.5-flash",
        Some(String::from("test-key")),
        Duration::from_secs(2),
        retry(1),
    )
    .unwrap();

    let result = generator.generate("t", "o", "d").await;

    assert!(matches!(result, Err(ServiceError::EmptyResponse { .. })));
}

#[tokio::test]
async fn test_report_generation_server_error_is_retryable() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-1.5-flash:generateContent"))
        .respond_with(ResponseTemplate::new(503))
        .expect(3)
        .mount(&mock_server)
        .await;

    let generator = GeminiReportGenerator::new(
        &mock_server.uri(),
        "gemini-1.5-flash",
        Some(String::from("test-key")),
        Duration::from_secs(2),
        retry(3),
    )
    .unwrap();

    let error = generator.generate("t", "o", "d").await.unwrap_err();

    assert!(error.is_retryable());
    assert_eq!(error.status(), Some(503));
}

#[tokio::test]
async fn test_announcement_publish_posts_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/announcements"))
        .and(body_string_contains("Exam timetable"))
        .and(body_string_contains("Admin Office"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "ok": true })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let publisher =
        HttpAnnouncementPublisher::new(&mock_server.uri(), Duration::from_secs(2), retry(1))
            .unwrap();

    let result = publisher
        .publish(&Announcement::from_admin("Exam timetable", "Out now"))
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_client_error_without_body_uses_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(418))
        .mount(&mock_server)
        .await;

    let client = HttpClient::new(&format!("{}/", mock_server.uri()), Duration::from_secs(2)).unwrap();
    let error = client
        .execute(client.request(Method::GET, "/missing"))
        .await
        .unwrap_err();

    match error {
        ServiceError::Api { status, code, .. } => {
            assert_eq!(status, 418);
            assert_eq!(code, "HTTP_418");
        }
        other => panic!("Expected Api error, got {other:?}"),
    }
}
