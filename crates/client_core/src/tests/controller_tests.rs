use super::*;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::render::{render, Tone};

struct FakeClient {
    outcome: Result<AccessCheckResponse, ClientError>,
    calls: Mutex<Vec<AccessCheckRequest>>,
}

impl FakeClient {
    fn returning(outcome: Result<AccessCheckResponse, ClientError>) -> Self {
        Self {
            outcome,
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<AccessCheckRequest> {
        self.calls.lock().expect("calls lock").clone()
    }
}

#[async_trait]
impl AccessCheckClient for FakeClient {
    async fn check(
        &self,
        request: &AccessCheckRequest,
    ) -> Result<AccessCheckResponse, ClientError> {
        self.calls
            .lock()
            .expect("calls lock")
            .push(request.clone());
        self.outcome.clone()
    }
}

fn mixed_access() -> AccessCheckResponse {
    serde_json::from_str(
        r#"{"vpn":true,"production":false,"configTool":true,"currentProfile":"dev","missingGroups":["prod"]}"#,
    )
    .expect("fixture")
}

#[test]
fn starts_idle() {
    let controller = StateController::new();
    assert_eq!(controller.state(), &UiState::Idle);
    assert!(!controller.is_loading());
}

#[tokio::test]
async fn empty_email_is_rejected_without_network_call() {
    let client = FakeClient::returning(Ok(mixed_access()));
    let mut controller = StateController::new();

    let state = controller.submit(&client, "").await;
    assert_eq!(state, &UiState::Error("Please enter your email".to_string()));
    assert!(client.calls().is_empty());
}

#[tokio::test]
async fn malformed_email_is_rejected_without_network_call() {
    let client = FakeClient::returning(Ok(mixed_access()));
    let mut controller = StateController::new();

    let state = controller.submit(&client, "not-an-email").await;
    assert_eq!(
        state,
        &UiState::Error("Please enter a valid email address".to_string())
    );
    assert!(client.calls().is_empty());
}

#[tokio::test]
async fn padded_email_is_rejected_without_network_call() {
    let client = FakeClient::returning(Ok(mixed_access()));
    let mut controller = StateController::new();

    let state = controller.submit(&client, " bob@example.org ").await;
    assert_eq!(
        state,
        &UiState::Error("Please enter a valid email address".to_string())
    );
    assert!(client.calls().is_empty());
}

#[tokio::test]
async fn successful_check_renders_checklist() {
    let client = FakeClient::returning(Ok(mixed_access()));
    let mut controller = StateController::new();

    let state = controller.submit(&client, "alice@example.com").await;
    assert_eq!(state, &UiState::Success(mixed_access()));
    assert_eq!(
        client.calls(),
        vec![AccessCheckRequest::production("alice@example.com")]
    );

    let view = render(controller.state());
    let checklist = view.checklist.expect("checklist");
    assert_eq!(checklist.vpn.tone(), Tone::Success);
    assert_eq!(checklist.production.tone(), Tone::Failure);
    assert_eq!(checklist.config_tool.tone(), Tone::Success);
    assert!(checklist.groups.text.contains("prod"));
    assert_eq!(checklist.profile.tone, Tone::Caution);
    assert!(checklist.profile.text.contains("please switch to prod"));
}

#[tokio::test]
async fn server_error_message_is_shown() {
    let client = FakeClient::returning(Err(ClientError::ServerError {
        status: 403,
        message: "not authorized".to_string(),
    }));
    let mut controller = StateController::new();

    let state = controller.submit(&client, "alice@example.com").await;
    assert_eq!(state, &UiState::Error("not authorized".to_string()));
}

#[tokio::test]
async fn raw_server_body_is_shown() {
    let client = FakeClient::returning(Err(ClientError::ServerError {
        status: 500,
        message: "internal error".to_string(),
    }));
    let mut controller = StateController::new();

    let state = controller.submit(&client, "alice@example.com").await;
    assert_eq!(state, &UiState::Error("internal error".to_string()));
}

#[tokio::test]
async fn network_failure_falls_back_to_generic_message() {
    let client = FakeClient::returning(Err(ClientError::NetworkError(
        "error sending request: connection refused".to_string(),
    )));
    let mut controller = StateController::new();

    let state = controller.submit(&client, "alice@example.com").await;
    assert_eq!(state, &UiState::Error(GENERIC_FAILURE_MESSAGE.to_string()));
}

#[tokio::test]
async fn malformed_response_falls_back_to_generic_message() {
    let client = FakeClient::returning(Err(ClientError::MalformedResponse(
        "missing field `vpn`".to_string(),
    )));
    let mut controller = StateController::new();

    let state = controller.submit(&client, "alice@example.com").await;
    assert_eq!(state, &UiState::Error("Failed to check access".to_string()));
}

#[tokio::test]
async fn new_error_replaces_previous_checklist() {
    let mut controller = StateController::new();
    controller
        .submit(&FakeClient::returning(Ok(mixed_access())), "alice@example.com")
        .await;
    assert!(matches!(controller.state(), UiState::Success(_)));

    controller
        .submit(&FakeClient::returning(Ok(mixed_access())), "bad")
        .await;
    let view = render(controller.state());
    assert_eq!(
        view.error.as_deref(),
        Some("Please enter a valid email address")
    );
    assert_eq!(view.checklist, None);
}

#[test]
fn begin_clears_previous_error_and_enters_loading() {
    let mut controller = StateController::new();
    assert_eq!(controller.begin(""), None);
    assert!(matches!(controller.state(), UiState::Error(_)));

    let request = controller.begin("alice@example.com").expect("request");
    assert_eq!(request, AccessCheckRequest::production("alice@example.com"));
    assert_eq!(controller.state(), &UiState::Loading);
    let view = render(controller.state());
    assert_eq!(view.error, None);
    assert_eq!(view.checklist, None);
    assert!(!view.submit.enabled);
}

#[test]
fn begin_refuses_while_loading() {
    let mut controller = StateController::new();
    assert!(controller.begin("alice@example.com").is_some());
    assert_eq!(controller.begin("bob@example.com"), None);
    assert_eq!(controller.begin(""), None);
    assert_eq!(controller.state(), &UiState::Loading);
}

#[test]
fn complete_outside_loading_is_ignored() {
    let mut controller = StateController::new();
    controller.complete(Ok(mixed_access()));
    assert_eq!(controller.state(), &UiState::Idle);

    assert!(controller.begin("alice@example.com").is_some());
    controller.complete(Ok(mixed_access()));
    controller.complete(Err(ClientError::NetworkError("late".to_string())));
    assert_eq!(controller.state(), &UiState::Success(mixed_access()));
}

#[test]
fn reset_returns_to_idle_except_while_loading() {
    let mut controller = StateController::new();
    assert!(controller.begin("alice@example.com").is_some());
    controller.reset();
    assert_eq!(controller.state(), &UiState::Loading);

    controller.complete(Err(ClientError::NetworkError("refused".to_string())));
    controller.reset();
    assert_eq!(controller.state(), &UiState::Idle);
}

#[test]
fn message_of_prefers_carried_message() {
    assert_eq!(
        message_of(&ClientError::ServerError {
            status: 403,
            message: "not authorized".to_string()
        }),
        "not authorized"
    );
    assert_eq!(
        message_of(&ClientError::NetworkError("timeout".to_string())),
        GENERIC_FAILURE_MESSAGE
    );
}
