//! tests/api/login_form.rs

use crate::helpers::{configuration, spawn_page, unreachable_base_url, wait_until, LogBuffer};
use loginform::messages::Messages;
use loginform::startup::build;
use loginform::telemetry::get_subscriber;
use std::time::Duration;
use wiremock::matchers::{any, body_string, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn submit_posts_the_email_to_the_authentication_endpoint() {
    // Arrange
    let page = spawn_page("?next=/dashboard").await;

    Mock::given(method("POST"))
        .and(path("/_authentication/authenticate"))
        .and(body_string("email=user@example.com"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&page.auth_server)
        .await;

    // Act
    let (_, text) = page.submit_and_wait("user@example.com").await;

    // Assert
    assert_eq!(text, page.messages.success);
    let received = page.auth_server.received_requests().await.unwrap();
    assert_eq!(received[0].url.query(), Some("next=/dashboard"));
}

#[tokio::test]
async fn forbidden_response_shows_the_failure_message_and_logs_the_status() {
    // Arrange
    let logs = LogBuffer::default();
    let _guard = tracing::subscriber::set_default(get_subscriber(
        "test".into(),
        "info".into(),
        logs.clone(),
    ));
    let page = spawn_page("?next=/dashboard").await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(403))
        .expect(1)
        .mount(&page.auth_server)
        .await;

    // Act
    let (_, text) = page.submit_and_wait("user@example.com").await;

    // Assert
    assert_eq!(text, page.messages.failure);

    let errors = logs.errors();
    assert_eq!(errors.len(), 1);
    assert!(errors[0]["error.message"].as_str().unwrap().contains("403"));
}

#[tokio::test]
async fn error_statuses_all_show_the_same_failure_message() {
    for status in [400u16, 401, 404, 500, 503] {
        // Arrange
        let page = spawn_page("").await;

        Mock::given(any())
            .respond_with(ResponseTemplate::new(status))
            .expect(1)
            .mount(&page.auth_server)
            .await;

        // Act
        let (_, text) = page.submit_and_wait("user@example.com").await;

        // Assert
        assert_eq!(
            text, page.messages.failure,
            "Status {} did not show the failure message",
            status
        );
    }
}

#[tokio::test]
async fn empty_query_string_posts_to_the_bare_endpoint() {
    // Arrange
    let page = spawn_page("").await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&page.auth_server)
        .await;

    // Act
    page.submit_and_wait("user@example.com").await;

    // Assert
    let received = page.auth_server.received_requests().await.unwrap();
    assert_eq!(received[0].url.path(), "/_authentication/authenticate");
    assert_eq!(received[0].url.query(), None);
}

#[tokio::test]
async fn submit_is_prevented_before_the_response_arrives() {
    // Arrange
    let page = spawn_page("").await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
        .mount(&page.auth_server)
        .await;

    // Act
    let event = page.submit_email("user@example.com");

    // Assert
    assert!(event.default_prevented());
    assert_eq!(page.app.status().text(), "");
}

#[tokio::test]
async fn failed_submissions_never_reload_the_page() {
    // Arrange
    let page = spawn_page("").await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .mount(&page.auth_server)
        .await;

    // Act
    let (event, _) = page.submit_and_wait("user@example.com").await;

    // Assert
    assert!(event.default_prevented());
}

#[tokio::test]
async fn email_is_read_when_the_form_is_submitted() {
    // Arrange
    let page = spawn_page("").await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&page.auth_server)
        .await;

    // Act
    let mut status = page.app.status().subscribe();
    page.submit_email(" first@example.com");
    page.app.email_input().set_value("second@example.com");
    status.changed().await.unwrap();

    // Assert
    assert_eq!(page.received_bodies().await, vec!["email= first@example.com"]);
}

#[tokio::test]
async fn email_is_sent_without_escaping() {
    // Arrange
    let page = spawn_page("").await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&page.auth_server)
        .await;

    // Act
    page.submit_and_wait("a+b&c=d@example.com").await;

    // Assert
    assert_eq!(page.received_bodies().await, vec!["email=a+b&c=d@example.com"]);
}

#[tokio::test]
async fn each_submission_sends_its_own_request_and_the_last_response_wins() {
    // Arrange
    let page = spawn_page("").await;

    Mock::given(body_string("email=slow@example.com"))
        .respond_with(ResponseTemplate::new(500).set_delay(Duration::from_millis(300)))
        .expect(1)
        .mount(&page.auth_server)
        .await;
    Mock::given(body_string("email=fast@example.com"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&page.auth_server)
        .await;

    // Act
    let first = page.submit_email("slow@example.com");
    let second = page.submit_email("fast@example.com");

    // Assert
    assert!(first.default_prevented());
    assert!(second.default_prevented());
    let page = &page;
    wait_until(|| async move { page.app.status().text() == page.messages.success }).await;
    wait_until(|| async move { page.app.status().text() == page.messages.failure }).await;
    assert_eq!(page.received_bodies().await.len(), 2);
}

#[tokio::test]
async fn network_failure_shows_the_failure_message_and_logs_the_cause() {
    // Arrange
    let logs = LogBuffer::default();
    let _guard = tracing::subscriber::set_default(get_subscriber(
        "test".into(),
        "info".into(),
        logs.clone(),
    ));
    let config = configuration(unreachable_base_url(), "?next=/dashboard");
    let messages = Messages::for_locale(config.page.locale);
    let app = build(config).expect("Failed to build the login page.");

    // Act
    let mut status = app.status().subscribe();
    app.email_input().set_value("user@example.com");
    let event = app.submit();
    tokio::time::timeout(Duration::from_secs(5), status.changed())
        .await
        .expect("Status was never updated")
        .unwrap();

    // Assert
    assert!(event.default_prevented());
    assert_eq!(app.status().text(), messages.failure);

    let errors = logs.errors();
    assert_eq!(errors.len(), 1);
    assert!(errors[0]["msg"]
        .as_str()
        .unwrap()
        .contains("Authentication request failed"));
    assert_eq!(
        errors[0]["error.message"],
        "Failed to reach the authentication endpoint"
    );
}
