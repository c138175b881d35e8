//! Settings resolved once at start-up

use api::{ApiError, InvoiceApi};

/// Connection settings for one invocation.
///
/// Built from flags and environment in `main` and handed to each command;
/// nothing reads configuration from global state.
#[derive(Clone)]
pub struct Settings {
    pub host: String,
    pub api_version: u32,
    pub api_key: String,
    pub verbose: bool,
}

impl Settings {
    /// Validate host and key and open an HTTP-backed API client.
    /// Fails before any request is made.
    pub fn connect(&self) -> Result<InvoiceApi, ApiError> {
        InvoiceApi::connect(&self.host, self.api_version, &self.api_key)
    }
}
