#![allow(clippy::unwrap_used)]
//! End-to-end chat flow: controller + HTTP transport against a mock backend.

use medchat::controller::{
    ChatController, ControllerOptions, FailureKind, IgnoreReason, SendOutcome,
};
use medchat::render::{BubbleWidth, Sender};
use medchat::transport::HttpTransport;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn controller(server: &MockServer, timeout: Duration) -> ChatController<HttpTransport> {
    ChatController::new(
        HttpTransport::new(server.uri(), timeout),
        ControllerOptions {
            timeout,
            greeting_delay: Duration::ZERO,
        },
    )
}

#[tokio::test]
async fn test_patient_table_reply_rendered_wide() {
    let table = r#"<table class="patient-table"><thead><tr><th>Name</th></tr></thead><tbody><tr><td>John Smith</td></tr></tbody></table>"#;
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"message": "Show all patients"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": table})))
        .expect(1)
        .mount(&server)
        .await;

    let controller = controller(&server, Duration::from_secs(5));
    controller.set_input("Show all patients");

    assert_eq!(controller.send_message().await, SendOutcome::Replied);

    let transcript = controller.transcript();
    let messages: Vec<_> = transcript.messages().collect();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].sender(), Sender::User);
    assert_eq!(messages[0].text(), "Show all patients");
    assert_eq!(messages[1].body(), table);
    assert_eq!(messages[1].width(), BubbleWidth::Wide);
    assert!(transcript.to_html().contains("max-width: 98%"));
}

#[tokio::test]
async fn test_bad_gateway_then_retry() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(502))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": "Back online"})))
        .mount(&server)
        .await;

    let controller = controller(&server, Duration::from_secs(5));

    controller.set_input("Show all patients");
    let outcome = controller.send_message().await;

    assert_eq!(outcome, SendOutcome::Failed(FailureKind::Unavailable));
    assert!(!controller.is_busy());
    let transcript = controller.transcript();
    let last = transcript.last_message().unwrap();
    assert_eq!(last.sender(), Sender::Bot);
    assert!(last.text().contains("temporarily unavailable"));

    let outcome = controller.send_quick_message("Show all patients").await;
    assert_eq!(outcome, SendOutcome::Replied);
    assert_eq!(
        controller.transcript().last_message().unwrap().text(),
        "Back online"
    );
}

#[tokio::test]
async fn test_slow_backend_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"response": "too late"}))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let controller = controller(&server, Duration::from_millis(200));
    controller.set_input("a very complicated question");

    let outcome = controller.send_message().await;

    assert_eq!(outcome, SendOutcome::Failed(FailureKind::TimedOut));
    assert!(!controller.is_busy());
    assert!(!controller.transcript().is_typing());
}

#[tokio::test]
async fn test_one_request_while_busy() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"response": "done"}))
                .set_delay(Duration::from_millis(300)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let controller = Arc::new(controller(&server, Duration::from_secs(5)));
    controller.set_input("first");

    let first = tokio::spawn({
        let controller = controller.clone();
        async move { controller.send_message().await }
    });
    while !controller.is_busy() && !first.is_finished() {
        tokio::task::yield_now().await;
    }

    assert_eq!(
        controller.send_quick_message("second").await,
        SendOutcome::Ignored(IgnoreReason::Busy)
    );
    assert_eq!(first.await.unwrap(), SendOutcome::Replied);

    let users: Vec<_> = controller
        .transcript()
        .messages()
        .filter(|m| m.sender() == Sender::User)
        .map(|m| m.text().to_string())
        .collect();
    assert_eq!(users, vec!["first"]);
}
