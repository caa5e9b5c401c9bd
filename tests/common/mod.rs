#![allow(dead_code)]

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, mpsc};
use tokio::net::TcpListener;

/// A request as the stub server received it.
#[derive(Debug)]
pub struct CapturedRequest {
    pub method: Method,
    pub uri: Uri,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl CapturedRequest {
    /// Method plus path and query, e.g. `GET /payments/p1`.
    pub fn target(&self) -> String {
        let path = self
            .uri
            .path_and_query()
            .map(|p| p.as_str())
            .unwrap_or("/");
        format!("{} {}", self.method, path)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn header_count(&self, name: &str) -> usize {
        self.headers.get_all(name).iter().count()
    }
}

#[derive(Clone, Default)]
struct StubState {
    replies: Arc<Mutex<VecDeque<(u16, &'static str)>>>,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

/// Local HTTP server answering every request with the next scripted reply.
///
/// Runs on its own thread and runtime so blocking tests (driving the binary)
/// and `#[tokio::test]` ones can share it.
pub struct StubServer {
    pub base_url: String,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl StubServer {
    pub fn serve(replies: Vec<(u16, &'static str)>) -> Self {
        let state = StubState {
            replies: Arc::new(Mutex::new(replies.into())),
            ..Default::default()
        };
        let captured = state.captured.clone();
        let (ready_tx, ready_rx) = mpsc::channel();

        std::thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();
            runtime.block_on(async move {
                let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
                ready_tx.send(listener.local_addr().unwrap().port()).unwrap();

                let app = Router::new().fallback(capture).with_state(state);
                axum::serve(listener, app).await.unwrap();
            });
        });

        let port = ready_rx.recv().unwrap();
        Self {
            base_url: format!("http://127.0.0.1:{port}/payments/"),
            captured,
        }
    }

    /// Requests received so far, in arrival order.
    pub fn finish(self) -> Vec<CapturedRequest> {
        std::mem::take(&mut *self.captured.lock().unwrap())
    }
}

async fn capture(
    State(state): State<StubState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    state.captured.lock().unwrap().push(CapturedRequest {
        method,
        uri,
        headers,
        body,
    });

    let (status, body) = state
        .replies
        .lock()
        .unwrap()
        .pop_front()
        .unwrap_or((200, "{}"));
    let status = StatusCode::from_u16(status).unwrap();
    if body.is_empty() {
        status.into_response()
    } else {
        (status, [(CONTENT_TYPE, "application/json")], body).into_response()
    }
}
