use crate::transport::Method;
use reqwest::StatusCode;
use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid host {host:?}: {reason}")]
    InvalidHost { host: String, reason: String },
    #[error("no API key configured (set it with --apikey or INVOICE_APIKEY)")]
    MissingApiKey,
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("request to {url} failed: {source}")]
    Transport { url: String, source: BoxError },
    #[error("{method} {url} failed ({status})")]
    Status {
        method: Method,
        url: String,
        status: StatusCode,
        body: String,
    },
    #[error("unexpected response from {url}: {source}")]
    Decode {
        url: String,
        source: serde_json::Error,
    },
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),
}

impl ApiError {
    /// Raw body of a rejected request, when the server sent one
    pub fn response_body(&self) -> Option<&str> {
        match self {
            ApiError::Status { body, .. } if !body.is_empty() => Some(body),
            _ => None,
        }
    }

    /// Errors raised before any request leaves the process
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            ApiError::InvalidHost { .. } | ApiError::MissingApiKey | ApiError::Client(_)
        )
    }
}
