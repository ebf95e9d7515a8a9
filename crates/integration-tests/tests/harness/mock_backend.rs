//! Mock explorer backend for client tests
//!
//! Records every request it receives and returns a configurable response,
//! so tests can assert exactly what the client put on the wire.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::IntoResponse;
use tokio_util::sync::CancellationToken;

/// A request as seen by the mock backend
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub body: serde_json::Value,
}

enum Reply {
    /// Fixed status and JSON body
    Fixed(StatusCode, serde_json::Value),
    /// Response derived from the request body, for concurrency tests:
    /// one planet named `planet-{max_distance_ly}`
    Echo,
}

struct MockState {
    requests: Mutex<Vec<RecordedRequest>>,
    reply: Reply,
}

/// Mock backend that records requests and returns canned responses
pub struct MockExplorer {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockState>,
}

impl MockExplorer {
    /// Start a mock that replies 200 with the given JSON body
    pub async fn start_with_response(body: serde_json::Value) -> anyhow::Result<Self> {
        Self::start_inner(Reply::Fixed(StatusCode::OK, body)).await
    }

    /// Start a mock that replies with the given error status and body
    pub async fn start_failing(status: u16, body: serde_json::Value) -> anyhow::Result<Self> {
        let status = StatusCode::from_u16(status)?;
        Self::start_inner(Reply::Fixed(status, body)).await
    }

    /// Start a mock whose response is derived from each request
    pub async fn start_echo() -> anyhow::Result<Self> {
        Self::start_inner(Reply::Echo).await
    }

    async fn start_inner(reply: Reply) -> anyhow::Result<Self> {
        let state = Arc::new(MockState {
            requests: Mutex::new(Vec::new()),
            reply,
        });

        // Fallback catches every path so tests can assert the one the
        // client actually used
        let app = Router::new()
            .fallback(record_request)
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Base URL for pointing a client at the mock
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    /// Number of requests received
    pub fn request_count(&self) -> usize {
        self.state.requests.lock().unwrap().len()
    }
}

impl Drop for MockExplorer {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn record_request(
    State(state): State<Arc<MockState>>,
    uri: Uri,
    axum::Json(body): axum::Json<serde_json::Value>,
) -> impl IntoResponse {
    state.requests.lock().unwrap().push(RecordedRequest {
        path: uri.path().to_owned(),
        body: body.clone(),
    });

    match &state.reply {
        Reply::Fixed(status, reply_body) => (*status, axum::Json(reply_body.clone())),
        Reply::Echo => {
            let max_distance_ly = body["max_distance_ly"].as_i64().unwrap_or_default();
            let reply_body = serde_json::json!({
                "exoplanets": [{
                    "name": format!("planet-{max_distance_ly}"),
                    "distance_ly": max_distance_ly,
                    "habitability": 0.5,
                }]
            });
            (StatusCode::OK, axum::Json(reply_body))
        }
    }
}
