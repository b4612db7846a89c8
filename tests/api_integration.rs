//! Integration tests for the backend client and turn orchestration.
//!
//! Each test spins up an Axum server on a random port serving stub
//! `/answer` and `/suggest` routes, and exercises the real reqwest-backed
//! client through full orchestrator turns.

use std::sync::Arc;
use std::time::Duration;

use axum::Json;
use axum::Router;
use axum::http::StatusCode;
use axum::routing::post;
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tokio::time::timeout;

use fin_assist::api::{AssistantApi, AssistantClient};
use fin_assist::chat::{AppState, Sender, SharedState};
use fin_assist::config::ClientConfig;
use fin_assist::error::ApiError;
use fin_assist::orchestrator;
use fin_assist::presets;
use fin_assist::profile::{ProfileForm, UserProfile};

/// Maximum time any test is allowed to run before we consider it hung.
const TEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Start an Axum server on a random port, return the port.
async fn start_server(app: Router) -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    // Give the server a moment to start accepting connections.
    tokio::time::sleep(Duration::from_millis(50)).await;

    port
}

fn client_for(port: u16) -> AssistantClient {
    AssistantClient::new(&ClientConfig {
        base_url: format!("http://127.0.0.1:{port}"),
        request_timeout: Duration::from_secs(2),
    })
}

fn fresh_state() -> SharedState {
    Arc::new(Mutex::new(AppState::new()))
}

/// Build a profile through the public form surface.
fn sample_profile() -> UserProfile {
    let mut form = ProfileForm::new();
    for (name, value) in [
        ("age", "30"),
        ("income", "5000"),
        ("region", "seoul"),
        ("marital", "single"),
        ("children", "no"),
        ("main_bank", "kakao"),
        ("credit_score", "700"),
        ("financial_knowledge", "mid"),
        ("financial_goals", "growth"),
        ("investment_experience", "deposit"),
        ("real_estate_owned", "no"),
    ] {
        form.push_entry(name, value);
    }
    form.set_job_selection(vec!["employee".to_string(), "freelancer".to_string()]);
    form.aggregate().unwrap()
}

/// Stub backend that echoes the question and serves numbered suggestions,
/// capturing both request bodies.
fn happy_app(seen: Arc<Mutex<Vec<Value>>>) -> Router {
    let seen_answer = Arc::clone(&seen);
    let seen_suggest = seen;

    Router::new()
        .route(
            "/answer",
            post(move |Json(body): Json<Value>| {
                let seen = Arc::clone(&seen_answer);
                async move {
                    let question = body["selected_question"].as_str().unwrap_or_default();
                    let answer = format!("answer to: {question}");
                    seen.lock().await.push(body);
                    Json(json!({ "answer": answer }))
                }
            }),
        )
        .route(
            "/suggest",
            post(move |Json(body): Json<Value>| {
                let seen = Arc::clone(&seen_suggest);
                async move {
                    seen.lock().await.push(body);
                    Json(json!({ "suggested_questions": ["1. A?", "2. B?"] }))
                }
            }),
        )
}

#[tokio::test]
async fn full_turn_success() {
    timeout(TEST_TIMEOUT, async {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let port = start_server(happy_app(Arc::clone(&seen))).await;
        let client = client_for(port);
        let state = fresh_state();

        orchestrator::run_turn(&client, &state, "what about ETFs?").await;

        let state = state.lock().await;
        let last = state.last_message().unwrap();
        assert_eq!(last.sender, Sender::Bot);
        assert_eq!(last.text, "answer to: what about ETFs?");
        assert_eq!(state.suggested_questions, vec!["A?", "B?"]);
        assert!(!state.loading);
    })
    .await
    .unwrap();
}

#[tokio::test]
async fn profile_travels_verbatim_to_both_endpoints() {
    timeout(TEST_TIMEOUT, async {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let port = start_server(happy_app(Arc::clone(&seen))).await;
        let client = client_for(port);

        let state = fresh_state();
        state.lock().await.profile = Some(sample_profile());

        orchestrator::run_turn(&client, &state, "hello").await;

        let seen = seen.lock().await;
        assert_eq!(seen.len(), 2, "both endpoints should have been hit");
        for body in seen.iter() {
            let profile = &body["user_profile"];
            assert_eq!(profile["region"], "seoul");
            assert_eq!(profile["credit_score"], 700);
            let jobs = profile["job"].as_array().unwrap();
            assert!(jobs.contains(&json!("employee")));
            assert!(jobs.contains(&json!("freelancer")));
        }
    })
    .await
    .unwrap();
}

#[tokio::test]
async fn answer_failure_yields_single_apology_and_no_suggestions() {
    timeout(TEST_TIMEOUT, async {
        let app = Router::new()
            .route("/answer", post(|| async { StatusCode::INTERNAL_SERVER_ERROR }))
            .route(
                "/suggest",
                post(|| async { Json(json!({ "suggested_questions": ["1. A?"] })) }),
            );
        let port = start_server(app).await;
        let client = client_for(port);
        let state = fresh_state();

        orchestrator::run_turn(&client, &state, "hello").await;

        let state = state.lock().await;
        let apologies = state
            .messages()
            .iter()
            .filter(|m| m.text == presets::APOLOGY)
            .count();
        assert_eq!(apologies, 1);
        assert!(state.suggested_questions.is_empty());
        assert!(!state.loading);
    })
    .await
    .unwrap();
}

#[tokio::test]
async fn suggest_failure_is_invisible_to_the_user() {
    timeout(TEST_TIMEOUT, async {
        let app = Router::new()
            .route("/answer", post(|| async { Json(json!({ "answer": "fine" })) }))
            .route("/suggest", post(|| async { StatusCode::BAD_GATEWAY }));
        let port = start_server(app).await;
        let client = client_for(port);
        let state = fresh_state();

        orchestrator::run_turn(&client, &state, "hello").await;

        let state = state.lock().await;
        assert_eq!(state.last_message().unwrap().text, "fine");
        assert!(state.suggested_questions.is_empty());
        assert!(state.messages().iter().all(|m| m.text != presets::APOLOGY));
        assert!(!state.loading);
    })
    .await
    .unwrap();
}

#[tokio::test]
async fn malformed_suggest_body_fails_the_turn() {
    timeout(TEST_TIMEOUT, async {
        // 200 with a body that is not JSON: not the silently-ignored
        // non-2xx case, so the whole turn fails.
        let app = Router::new()
            .route("/answer", post(|| async { Json(json!({ "answer": "X" })) }))
            .route("/suggest", post(|| async { "not json" }));
        let port = start_server(app).await;
        let client = client_for(port);
        let state = fresh_state();

        orchestrator::run_turn(&client, &state, "hello").await;

        let state = state.lock().await;
        assert_eq!(state.last_message().unwrap().text, presets::APOLOGY);
        assert!(state.messages().iter().all(|m| m.text != "X"));
        assert!(state.suggested_questions.is_empty());
        assert!(!state.loading);
    })
    .await
    .unwrap();
}

#[tokio::test]
async fn missing_answer_field_falls_back_to_placeholder() {
    timeout(TEST_TIMEOUT, async {
        let app = Router::new()
            .route("/answer", post(|| async { Json(json!({})) }))
            .route(
                "/suggest",
                post(|| async { Json(json!({ "suggested_questions": [] })) }),
            );
        let port = start_server(app).await;
        let client = client_for(port);
        let state = fresh_state();

        orchestrator::run_turn(&client, &state, "hello").await;

        let state = state.lock().await;
        assert_eq!(state.last_message().unwrap().text, presets::EMPTY_ANSWER);
    })
    .await
    .unwrap();
}

#[tokio::test]
async fn client_reports_non_2xx_as_status_error() {
    timeout(TEST_TIMEOUT, async {
        let app = Router::new()
            .route("/answer", post(|| async { StatusCode::INTERNAL_SERVER_ERROR }))
            .route("/suggest", post(|| async { StatusCode::INTERNAL_SERVER_ERROR }));
        let port = start_server(app).await;
        let client = client_for(port);

        let error = client.answer("hello", None).await.unwrap_err();
        assert!(error.is_status());
        match error {
            ApiError::Status { endpoint, status } => {
                assert_eq!(endpoint, "/answer");
                assert_eq!(status, 500);
            }
            other => panic!("expected status error, got {other:?}"),
        }
    })
    .await
    .unwrap();
}

#[tokio::test]
async fn connection_refused_is_a_transport_error_and_turn_apologizes() {
    timeout(TEST_TIMEOUT, async {
        // Grab a port with no listener behind it.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let client = client_for(port);
        let error = client.suggest("hello", None).await.unwrap_err();
        assert!(matches!(error, ApiError::Transport { endpoint: "/suggest", .. }));

        let state = fresh_state();
        orchestrator::run_turn(&client, &state, "hello").await;

        let state = state.lock().await;
        assert_eq!(state.last_message().unwrap().text, presets::APOLOGY);
        assert!(!state.loading);
    })
    .await
    .unwrap();
}
