#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    body::Body,
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap, Request, StatusCode},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower::ServiceExt;

use wedding_rsvp::config::{Config, DispatchPolicy};
use wedding_rsvp::mail::Mailer;
use wedding_rsvp::{api, AppState};

pub const API_KEY: &str = "re_test_key";
pub const NO_REPLY: &str = "no-reply@wedding.test";
pub const ORGANIZERS: [&str; 2] = ["anna.organizer@wedding.test", "erik.organizer@wedding.test"];

/// Stand-in for the Resend API that records every send attempt
#[derive(Clone, Default)]
pub struct MockProvider {
    sent: Arc<Mutex<Vec<Value>>>,
    fail_recipient: Option<String>,
    delay: Option<Duration>,
}

impl MockProvider {
    /// Every attempted send, including rejected ones
    pub fn sent(&self) -> Vec<Value> {
        self.sent.lock().unwrap().clone()
    }
}

async fn send_email(
    State(mock): State<MockProvider>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    if let Some(delay) = mock.delay {
        tokio::time::sleep(delay).await;
    }

    let attempt = {
        let mut sent = mock.sent.lock().unwrap();
        sent.push(body.clone());
        sent.len()
    };

    let expected = format!("Bearer {}", API_KEY);
    if headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()) != Some(expected.as_str()) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "API key is invalid" })),
        );
    }

    let rejected = mock.fail_recipient.as_deref().is_some_and(|bad| {
        body["to"]
            .as_array()
            .is_some_and(|to| to.iter().any(|addr| addr == bad))
    });
    if rejected {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "message": "Recipient address rejected" })),
        );
    }

    (StatusCode::OK, Json(json!({ "id": format!("msg-{}", attempt) })))
}

/// Start a mock provider on an ephemeral port; returns its base URL.
pub async fn spawn_provider(fail_recipient: Option<&str>) -> (String, MockProvider) {
    start_provider(MockProvider {
        sent: Arc::default(),
        fail_recipient: fail_recipient.map(str::to_string),
        delay: None,
    })
    .await
}

/// Mock provider that waits `delay` before answering each send.
pub async fn spawn_slow_provider(delay: Duration) -> (String, MockProvider) {
    start_provider(MockProvider {
        sent: Arc::default(),
        fail_recipient: None,
        delay: Some(delay),
    })
    .await
}

async fn start_provider(mock: MockProvider) -> (String, MockProvider) {
    let app = Router::new()
        .route("/emails", post(send_email))
        .with_state(mock.clone());

    (serve(app).await, mock)
}

/// Serve a router on an ephemeral local port; returns its base URL.
pub async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("No local address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Test server failed");
    });

    format!("http://{}", addr)
}

pub fn test_config(provider_url: &str, api_key: Option<&str>, policy: DispatchPolicy) -> Config {
    Config {
        server_host: "127.0.0.1".to_string(),
        server_port: 0,
        resend_api_key: api_key.map(str::to_string),
        resend_api_url: provider_url.to_string(),
        mail_from: "Anna & Erik <rsvp@wedding.test>".to_string(),
        mail_no_reply: NO_REPLY.to_string(),
        organizer_emails: ORGANIZERS.iter().map(|s| s.to_string()).collect(),
        dispatch_policy: policy,
        request_timeout_seconds: 10,
    }
}

pub fn test_state(config: Config) -> AppState {
    let mailer = Mailer::from_config(&config).expect("Should build mailer");
    AppState::new(config, mailer)
}

/// Full app (with layers) wired to a fresh mock provider
pub async fn test_app(
    fail_recipient: Option<&str>,
    policy: DispatchPolicy,
) -> (Router, MockProvider) {
    let (url, mock) = spawn_provider(fail_recipient).await;
    let state = test_state(test_config(&url, Some(API_KEY), policy));
    (api::create_app(state), mock)
}

/// POST a raw body to the dispatcher and decode the JSON answer
pub async fn post_rsvp(app: Router, body: String) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/rsvp")
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, serde_json::from_slice(&bytes).unwrap())
}

pub fn attending_payload(locale: Option<&str>) -> Value {
    let mut payload = json!({
        "attending": "yes",
        "name": "Karin Lind",
        "email": "karin@example.com",
        "days": "both",
        "companion": { "name": "Johan Lind", "days": "single" },
        "meal": "vegetarian",
        "shuttle": true,
        "dietary": "Lactose intolerant",
        "song": "September",
        "message": "See you there!"
    });
    if let Some(locale) = locale {
        payload["locale"] = json!(locale);
    }
    payload
}
