//! In-process mock ATC for client tests
//!
//! Replies to every request with the next queued response, in order, and
//! records what it received. One server per test; nothing is shared.

use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{Method, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::task::JoinHandle;

/// A request as seen by the mock server
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    /// Raw (still percent-encoded) request path
    pub path: String,
    pub body: String,
}

#[derive(Debug, Clone)]
struct CannedResponse {
    status: StatusCode,
    content_type: &'static str,
    body: String,
}

#[derive(Debug, Default)]
struct Exchange {
    responses: VecDeque<CannedResponse>,
    received: Vec<RecordedRequest>,
}

type SharedExchange = Arc<Mutex<Exchange>>;

pub struct MockServer {
    url: String,
    exchange: SharedExchange,
    handle: JoinHandle<()>,
}

impl MockServer {
    /// Bind to an ephemeral port on localhost and start serving
    pub async fn start() -> Self {
        let exchange = SharedExchange::default();
        let app = Router::new()
            .fallback(record_and_reply)
            .with_state(exchange.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let addr = listener.local_addr().expect("Mock server has no address");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Mock server stopped");
        });

        Self {
            url: format!("http://{}", addr),
            exchange,
            handle,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Queue a plain-text response
    pub fn respond_with(&self, status: StatusCode, body: impl Into<String>) {
        self.push(CannedResponse {
            status,
            content_type: "text/plain",
            body: body.into(),
        });
    }

    /// Queue a JSON-encoded response
    pub fn respond_with_json<T: Serialize + ?Sized>(&self, status: StatusCode, value: &T) {
        self.push(CannedResponse {
            status,
            content_type: "application/json",
            body: serde_json::to_string(value).expect("Failed to encode canned response"),
        });
    }

    /// Every request received so far, oldest first
    pub fn received(&self) -> Vec<RecordedRequest> {
        self.exchange.lock().unwrap().received.clone()
    }

    fn push(&self, response: CannedResponse) {
        self.exchange.lock().unwrap().responses.push_back(response);
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn record_and_reply(
    State(exchange): State<SharedExchange>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> Response {
    let mut exchange = exchange.lock().unwrap();
    exchange.received.push(RecordedRequest {
        method,
        path: uri.path().to_string(),
        body: String::from_utf8_lossy(&body).into_owned(),
    });

    match exchange.responses.pop_front() {
        Some(canned) => (
            canned.status,
            [(header::CONTENT_TYPE, canned.content_type)],
            canned.body,
        )
            .into_response(),
        None => (StatusCode::INTERNAL_SERVER_ERROR, "no response queued").into_response(),
    }
}
