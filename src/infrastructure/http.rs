use super::config::ClientConfig;
use crate::domain::ports::PaymentsTransport;
use crate::domain::request::{ApiRequest, ApiResponse, Method};
use crate::error::{ConsoleError, Result};
use async_trait::async_trait;
use log::debug;
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use reqwest::{Client, Url};

pub const SERVICE_ID_HEADER: &str = "service_id";
const APPLICATION_JSON: &str = "application/json";

/// Transport backed by a single `reqwest::Client`, created once and reused for
/// every call.
pub struct ReqwestTransport {
    client: Client,
    config: ClientConfig,
    service_id: HeaderValue,
}

impl ReqwestTransport {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ConsoleError::ConfigError(format!("cannot build HTTP client: {e}")))?;
        let service_id = HeaderValue::from_str(config.service_id())
            .map_err(|e| ConsoleError::ConfigError(e.to_string()))?;

        Ok(Self {
            client,
            config,
            service_id,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Resolves the target as `base_url + path`, with no separator inserted.
    pub fn url_for(&self, request: &ApiRequest) -> Result<Url> {
        let raw = format!("{}{}", self.config.base_url(), request.path);
        let mut url = Url::parse(&raw)
            .map_err(|e| ConsoleError::InputError(format!("invalid request path '{}': {e}", request.path)))?;
        if !request.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&request.query);
        }
        Ok(url)
    }

    /// Builds the outgoing request without sending it.
    pub fn build_request(&self, request: &ApiRequest) -> Result<reqwest::Request> {
        let url = self.url_for(request)?;
        let mut builder = self
            .client
            .request(to_reqwest_method(request.method), url)
            .header(CONTENT_TYPE, APPLICATION_JSON)
            .header(SERVICE_ID_HEADER, self.service_id.clone());
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        Ok(builder.build()?)
    }
}

fn to_reqwest_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Patch => reqwest::Method::PATCH,
        Method::Delete => reqwest::Method::DELETE,
    }
}

/// Collapses an error body onto one line for diagnostics.
fn one_line(body: &str) -> String {
    body.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[async_trait]
impl PaymentsTransport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        let outgoing = self.build_request(&request)?;
        debug!("{} {}", outgoing.method(), outgoing.url());

        let response = self.client.execute(outgoing).await?;
        let status = response.status();
        let body = response.text().await?;
        debug!("{} -> {}", request.method, status);

        if !status.is_success() {
            return Err(ConsoleError::StatusError {
                status: status.as_u16(),
                body: one_line(&body),
            });
        }
        Ok(ApiResponse::new(status.as_u16(), body))
    }
}
