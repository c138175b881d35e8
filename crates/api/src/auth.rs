use crate::error::ApiError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::fmt;

/// API key used for Basic authentication, with an empty password
#[derive(Clone)]
pub struct Credential {
    api_key: String,
}

impl Credential {
    pub fn new(api_key: impl Into<String>) -> Result<Self, ApiError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ApiError::MissingApiKey);
        }
        Ok(Self { api_key })
    }

    /// `base64(apikey + ":")`
    pub fn basic_token(&self) -> String {
        STANDARD.encode(format!("{}:", self.api_key))
    }

    /// Value of the `Authorization` header
    pub fn authorization(&self) -> String {
        format!("Basic {}", self.basic_token())
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("api_key", &"<redacted>")
            .finish()
    }
}
