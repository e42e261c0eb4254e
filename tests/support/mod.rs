// Shared fixtures for the interceptor integration tests: a one-time stub API
// server and a session store that records the order of commits.
use std::sync::{Arc, Mutex, OnceLock};

use async_trait::async_trait;
use axum::{
    Json, Router,
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    routing::get,
};
use serde_json::{Value, json};
use session_auth::{InMemorySessionState, Session, SessionMutation, SessionState};

// Base URL of the stub server, bound once per test binary.
static SERVER_URL: OnceLock<String> = OnceLock::new();

// Start the stub server on first use and return its base URL.
pub fn ensure_server() -> &'static str {
    SERVER_URL.get_or_init(|| {
        // Bind synchronously so the address is known and accepting before any test sends.
        let listener =
            std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral test port");
        listener
            .set_nonblocking(true)
            .expect("set listener non-blocking");
        let addr = listener.local_addr().expect("get local addr");

        // Own OS thread + runtime so the server outlives individual `#[tokio::test]` runtimes.
        std::thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("test runtime");
            runtime.block_on(async move {
                let listener =
                    tokio::net::TcpListener::from_std(listener).expect("adopt std listener");
                axum::serve(listener, stub_api())
                    .await
                    .expect("stub server failed");
            });
        });

        format!("http://{addr}")
    })
}

// Address nothing listens on, for transport-failure cases.
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr = listener.local_addr().expect("get local addr");
    drop(listener);
    format!("http://{addr}")
}

fn stub_api() -> Router {
    Router::new()
        .route("/noToken", get(echo_authorization))
        .route("/token", get(echo_authorization).post(echo_authorization))
        .route("/invalidToken", get(|| async { StatusCode::UNAUTHORIZED }))
        .route(
            "/otherError",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded") }),
        )
}

// Echo back the Authorization header the server actually received.
async fn echo_authorization(headers: HeaderMap) -> Json<Value> {
    let authorization = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    Json(json!({ "authorization": authorization }))
}

// Session store that forwards to the real in-memory store and logs mutation names.
#[derive(Clone)]
pub struct RecordingSession {
    inner: InMemorySessionState,
    commits: Arc<Mutex<Vec<&'static str>>>,
}

impl RecordingSession {
    pub fn new(session: Session) -> Self {
        Self {
            inner: InMemorySessionState::with_session(session),
            commits: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn commits(&self) -> Vec<&'static str> {
        self.commits.lock().expect("commits mutex poisoned").clone()
    }
}

#[async_trait]
impl SessionState for RecordingSession {
    async fn read(&self) -> Session {
        self.inner.read().await
    }

    async fn commit(&self, mutation: SessionMutation) {
        self.commits
            .lock()
            .expect("commits mutex poisoned")
            .push(mutation.name());
        self.inner.commit(mutation).await;
    }
}
