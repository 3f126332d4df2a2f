// Mock chat backend served on an ephemeral port.
#![allow(dead_code)]

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::{Value, json};
use tokio::net::TcpListener;

type Responder = Box<dyn Fn(&Value) -> (StatusCode, String) + Send + Sync>;

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub content_type: Option<String>,
    pub body: Value,
}

struct MockState {
    responder: Responder,
    health: (StatusCode, String),
    requests: Mutex<Vec<RecordedRequest>>,
    hits: AtomicUsize,
}

pub struct MockBackend {
    pub endpoint: String,
    state: Arc<MockState>,
}

impl MockBackend {
    pub fn hits(&self) -> usize {
        self.state.hits.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }
}

pub async fn spawn<F>(responder: F) -> MockBackend
where
    F: Fn(&Value) -> (StatusCode, String) + Send + Sync + 'static,
{
    spawn_with_health(responder, StatusCode::OK, json!({ "status": "ok" }).to_string()).await
}

pub async fn spawn_with_health<F>(responder: F, health_status: StatusCode, health_body: String) -> MockBackend
where
    F: Fn(&Value) -> (StatusCode, String) + Send + Sync + 'static,
{
    let state = Arc::new(MockState {
        responder: Box::new(responder),
        health: (health_status, health_body),
        requests: Mutex::new(Vec::new()),
        hits: AtomicUsize::new(0),
    });

    let app = Router::new()
        .route("/api/chat", post(chat_handler))
        .route("/health", get(health_handler))
        .with_state(state.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockBackend { endpoint: format!("http://{addr}/api/chat"), state }
}

/// Fixed status and body for every chat request.
pub async fn spawn_fixed(status: StatusCode, body: impl Into<String>) -> MockBackend {
    let body = body.into();
    spawn(move |_| (status, body.clone())).await
}

/// Echoes the message back, assigning a fresh session id when none was sent.
pub async fn spawn_echo() -> MockBackend {
    spawn(|req| {
        let session_id = match req.get("session_id").and_then(Value::as_str) {
            Some(id) => id.to_string(),
            None => uuid::Uuid::new_v4().to_string(),
        };
        let body = json!({
            "session_id": session_id,
            "reply": req["message"],
            "agent": "receptionist",
            "citations": [],
            "source_type": "kb",
        });
        (StatusCode::OK, body.to_string())
    })
    .await
}

async fn chat_handler(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    state.hits.fetch_add(1, Ordering::SeqCst);

    let body: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let (status, reply) = (state.responder)(&body);
    state
        .requests
        .lock()
        .unwrap()
        .push(RecordedRequest { content_type, body });

    (status, [(header::CONTENT_TYPE, "application/json")], reply)
}

async fn health_handler(State(state): State<Arc<MockState>>) -> impl IntoResponse {
    let (status, body) = state.health.clone();
    (status, [(header::CONTENT_TYPE, "application/json")], body)
}
