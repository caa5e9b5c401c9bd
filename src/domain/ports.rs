use super::request::{ApiRequest, ApiResponse};
use crate::error::Result;
use async_trait::async_trait;

/// Sends one request to the payments service.
///
/// Implementations return `Ok` only for 2xx replies; any other status is
/// reported as `ConsoleError::StatusError`.
#[async_trait]
pub trait PaymentsTransport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse>;
}

pub type TransportBox = Box<dyn PaymentsTransport>;
