use crate::error::{ConsoleError, Result};
use reqwest::Url;
use reqwest::header::HeaderValue;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8181/payments/";
pub const DEFAULT_SERVICE_ID: &str = "divorce";

/// Validated settings for the HTTP transport.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    base_url: String,
    service_id: String,
    timeout: Option<Duration>,
}

impl ClientConfig {
    /// Validates the base URL and service id.
    ///
    /// Request paths are concatenated onto the base URL, so a trailing `/` is
    /// appended when missing.
    pub fn new(
        base_url: impl Into<String>,
        service_id: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        let mut base_url = base_url.into().trim().to_string();
        let url = Url::parse(&base_url)
            .map_err(|e| ConsoleError::ConfigError(format!("invalid base URL '{base_url}': {e}")))?;
        if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
            return Err(ConsoleError::ConfigError(format!(
                "base URL '{base_url}' must be an http(s) URL"
            )));
        }
        if url.query().is_some() || url.fragment().is_some() {
            return Err(ConsoleError::ConfigError(format!(
                "base URL '{base_url}' must not carry a query or fragment"
            )));
        }
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        let service_id = service_id.into();
        if service_id.is_empty() || HeaderValue::from_str(&service_id).is_err() {
            return Err(ConsoleError::ConfigError(format!(
                "service id '{service_id}' is not a valid header value"
            )));
        }

        Ok(Self {
            base_url,
            service_id,
            timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn service_id(&self) -> &str {
        &self.service_id
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            service_id: DEFAULT_SERVICE_ID.to_string(),
            timeout: None,
        }
    }
}
