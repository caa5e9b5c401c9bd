use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error("Transport error: {0}")]
    TransportError(#[from] reqwest::Error),
    #[error("Service returned HTTP {status}{}", render_body(.body))]
    StatusError { status: u16, body: String },
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Invalid input: {0}")]
    InputError(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

fn render_body(body: &str) -> String {
    if body.is_empty() {
        String::new()
    } else {
        format!(": {body}")
    }
}

pub type Result<T> = std::result::Result<T, ConsoleError>;
