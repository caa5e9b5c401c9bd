use crate::domain::ports::PaymentsTransport;
use crate::domain::request::{ApiRequest, ApiResponse};
use crate::error::Result;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A transport that never touches the network.
///
/// Every request is recorded in order and answered from a queue of scripted
/// replies. When the queue runs dry it answers `200` with `{}`. Clones share
/// state, so a test can keep one handle while the dispatcher owns another.
#[derive(Default, Clone)]
pub struct RecordingTransport {
    requests: Arc<RwLock<Vec<ApiRequest>>>,
    replies: Arc<RwLock<VecDeque<Result<ApiResponse>>>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the reply for the next unanswered request.
    pub async fn push_reply(&self, reply: Result<ApiResponse>) {
        self.replies.write().await.push_back(reply);
    }

    pub async fn push_json(&self, status: u16, body: &serde_json::Value) {
        self.push_reply(Ok(ApiResponse::new(status, body.to_string())))
            .await;
    }

    pub async fn requests(&self) -> Vec<ApiRequest> {
        self.requests.read().await.clone()
    }
}

#[async_trait]
impl PaymentsTransport for RecordingTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        self.requests.write().await.push(request);
        self.replies
            .write()
            .await
            .pop_front()
            .unwrap_or_else(|| Ok(ApiResponse::new(200, "{}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConsoleError;
    use serde_json::json;

    #[tokio::test]
    async fn test_records_requests_in_order() {
        let transport = RecordingTransport::new();
        transport.send(ApiRequest::get("a")).await.unwrap();
        transport
            .send(ApiRequest::post("b", json!({"x": 1})))
            .await
            .unwrap();

        let requests = transport.requests().await;
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].path, "a");
        assert_eq!(requests[1].body, Some(json!({"x": 1})));
    }

    #[tokio::test]
    async fn test_scripted_replies_then_default() {
        let transport = RecordingTransport::new();
        transport.push_json(201, &json!({"id": "p1"})).await;
        transport
            .push_reply(Err(ConsoleError::StatusError {
                status: 404,
                body: String::new(),
            }))
            .await;

        let first = transport.send(ApiRequest::get("")).await.unwrap();
        assert_eq!(first.status, 201);
        assert_eq!(first.json().unwrap(), json!({"id": "p1"}));

        let second = transport.send(ApiRequest::get("")).await;
        assert!(matches!(
            second,
            Err(ConsoleError::StatusError { status: 404, .. })
        ));

        let third = transport.send(ApiRequest::get("")).await.unwrap();
        assert_eq!(third, ApiResponse::new(200, "{}"));
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let transport = RecordingTransport::new();
        let handle = transport.clone();
        transport.send(ApiRequest::get("a")).await.unwrap();
        assert_eq!(handle.requests().await.len(), 1);
    }
}
