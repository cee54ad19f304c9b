//! In-process stand-in for the Todoist API used by client and tool tests.
//!
//! Records every request and answers with an echo of what it received, so
//! tests can assert on both the outbound request and the tool output.

use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use super::TodoistClient;

pub(crate) const STUB_TOKEN: &str = "stub-token";

#[derive(Debug, Clone)]
pub(crate) struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct StubState {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    failure: Option<(StatusCode, String)>,
}

pub(crate) struct StubTodoist {
    base_url: String,
    state: StubState,
    handle: JoinHandle<()>,
}

impl StubTodoist {
    /// Stub answering every request successfully.
    pub async fn start() -> Self {
        Self::spawn(None).await
    }

    /// Stub answering every request with `status` and `message`.
    pub async fn failing(status: StatusCode, message: &str) -> Self {
        Self::spawn(Some((status, message.to_string()))).await
    }

    async fn spawn(failure: Option<(StatusCode, String)>) -> Self {
        let state = StubState {
            requests: Arc::new(Mutex::new(Vec::new())),
            failure,
        };
        let app = Router::new().fallback(record).with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}/api/v1", addr),
            state,
            handle,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn client(&self) -> TodoistClient {
        TodoistClient::new(STUB_TOKEN, &self.base_url).unwrap()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests()
            .pop()
            .expect("stub should have received a request")
    }
}

impl Drop for StubTodoist {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn record(
    State(state): State<StubState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let body = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or(Value::Null)
    };
    let path = uri.path().to_string();

    state.requests.lock().unwrap().push(RecordedRequest {
        method: method.clone(),
        path: path.clone(),
        query: uri.query().map(str::to_string),
        authorization: headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: body.clone(),
    });

    if let Some((status, message)) = &state.failure {
        return (*status, message.clone()).into_response();
    }

    if method == Method::DELETE || path.ends_with("/close") || path.ends_with("/reopen") {
        return StatusCode::NO_CONTENT.into_response();
    }

    Json(json!({
        "id": "stub-1",
        "method": method.as_str(),
        "path": path,
        "body": body,
    }))
    .into_response()
}
