use std::sync::Arc;

use gridwalk::core::state::{EMAIL_REQUIRED, SUBMIT_FAILED, SUBMIT_SUCCESS_NO_MESSAGE};
use gridwalk::core::{Direction, GridController, GridState, SubmitOutcome};
use gridwalk::submission::{HttpResultSink, ResultPayload, ResultSink, SubmitError};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path},
};

// ============================================================================
// Helper Functions
// ============================================================================

const RESULT_PATH: &str = "/api/result";

fn endpoint(server: &MockServer) -> String {
    format!("{}{}", server.uri(), RESULT_PATH)
}

fn controller_for(server: &MockServer) -> GridController {
    GridController::new(Arc::new(HttpResultSink::new(endpoint(server))))
}

// ============================================================================
// Sink Tests
// ============================================================================

#[tokio::test]
async fn test_sink_posts_json_payload() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(RESULT_PATH))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"x": 1, "y": 3, "steps": 4, "email": "lady@gaga.com"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "lady win #43"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let sink = HttpResultSink::new(endpoint(&mock_server));
    let payload = ResultPayload {
        x: 1,
        y: 3,
        steps: 4,
        email: "lady@gaga.com".to_string(),
    };

    let response = sink.submit(&payload).await.unwrap();
    assert_eq!(response.message(), Some("lady win #43"));
}

#[tokio::test]
async fn test_sink_api_error_keeps_server_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(RESULT_PATH))
        .respond_with(
            ResponseTemplate::new(422)
                .set_body_json(json!({"message": "Ouch: email must be a valid email"})),
        )
        .mount(&mock_server)
        .await;

    let sink = HttpResultSink::new(endpoint(&mock_server));
    let payload = ResultPayload {
        x: 2,
        y: 2,
        steps: 0,
        email: "not-an-email".to_string(),
    };

    let result = sink.submit(&payload).await;
    assert_eq!(
        result,
        Err(SubmitError::Api {
            status: 422,
            message: Some("Ouch: email must be a valid email".to_string()),
        })
    );
}

#[tokio::test]
async fn test_sink_non_json_body_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(RESULT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let sink = HttpResultSink::new(endpoint(&mock_server));
    let payload = ResultPayload {
        x: 2,
        y: 2,
        steps: 0,
        email: "a@b.c".to_string(),
    };

    let result = sink.submit(&payload).await;
    assert!(matches!(result, Err(SubmitError::Parse(_))));
}

// ============================================================================
// Controller Round-Trip Tests
// ============================================================================

#[tokio::test]
async fn test_submission_round_trip() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(RESULT_PATH))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"x": 2, "y": 2, "steps": 0, "email": "test@example.com"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"message": "Submission successful!"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut controller = controller_for(&mock_server);
    controller.set_email("test@example.com");

    let outcome = controller.submit().await;

    assert_eq!(
        outcome,
        SubmitOutcome::Succeeded("Submission successful!".to_string())
    );
    assert_eq!(controller.state.message, "Submission successful!");
    assert!(controller.state.email.is_empty());
    assert!(!controller.state.is_submitting());
}

#[tokio::test]
async fn test_payload_reflects_walk() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(RESULT_PATH))
        .and(body_json(json!({"x": 3, "y": 1, "steps": 2, "email": "walker@example.com"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut controller = controller_for(&mock_server);
    controller.move_marker(Direction::Right);
    controller.move_marker(Direction::Up);
    controller.move_marker(Direction::Up); // blocked: top row
    controller.set_email("walker@example.com");

    let outcome = controller.submit().await;

    assert_eq!(
        outcome,
        SubmitOutcome::Succeeded(SUBMIT_SUCCESS_NO_MESSAGE.to_string())
    );
    assert_eq!(controller.state.steps, 2);
}

#[tokio::test]
async fn test_blank_email_never_hits_network() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut controller = controller_for(&mock_server);
    controller.move_marker(Direction::Down);
    controller.set_email("   ");
    let before = controller.state.clone();

    let outcome = controller.submit().await;

    assert_eq!(outcome, SubmitOutcome::Rejected);
    assert_eq!(controller.state.message, EMAIL_REQUIRED);
    assert_eq!(controller.state.position, before.position);
    assert_eq!(controller.state.steps, before.steps);
    assert_eq!(controller.state.email, "   ");
}

#[tokio::test]
async fn test_server_error_preserves_email_for_retry() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(RESULT_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .expect(2)
        .mount(&mock_server)
        .await;

    let mut controller = controller_for(&mock_server);
    controller.move_marker(Direction::Left);
    controller.set_email("retry@example.com");

    for _ in 0..2 {
        let outcome = controller.submit().await;
        assert_eq!(outcome, SubmitOutcome::Failed(SUBMIT_FAILED.to_string()));
        assert_eq!(controller.state.email, "retry@example.com");
        assert_eq!(controller.state.steps, 1);
        assert_eq!(controller.state.position.index(), 3);
    }
}

#[tokio::test]
async fn test_unmatched_route_shows_generic_error() {
    // No mocks mounted: the server answers 404 with an empty body.
    let mock_server = MockServer::start().await;

    let mut controller = controller_for(&mock_server);
    controller.set_email("lost@example.com");

    let outcome = controller.submit().await;

    assert_eq!(outcome, SubmitOutcome::Failed(SUBMIT_FAILED.to_string()));
    assert_eq!(controller.state.email, "lost@example.com");
}

#[tokio::test]
async fn test_reset_after_submission_returns_initial_state() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "ok"})))
        .mount(&mock_server)
        .await;

    let mut controller = controller_for(&mock_server);
    controller.move_marker(Direction::Down);
    controller.set_email("a@b.c");
    controller.submit().await;
    controller.reset();

    assert_eq!(controller.state, GridState::new());
}
