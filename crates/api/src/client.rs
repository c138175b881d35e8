use crate::auth::Credential;
use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::transport::{HttpTransport, Method, RawResponse, Request, Transport};
use log::debug;
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Serialize;

const JSON: &str = "application/json";

/// Authenticated request execution against one configured endpoint
pub struct ApiClient<T = HttpTransport> {
    transport: T,
    endpoint: Endpoint,
    credential: Credential,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T, endpoint: Endpoint, credential: Credential) -> Self {
        Self {
            transport,
            endpoint,
            credential,
        }
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Run one request and return the response when the status is 2xx.
    ///
    /// Any other status becomes [`ApiError::Status`] carrying the body text.
    pub fn perform(
        &self,
        method: Method,
        url: Url,
        body: Option<Vec<u8>>,
    ) -> Result<RawResponse, ApiError> {
        let mut headers = vec![
            ("Authorization", self.credential.authorization()),
            ("Content-Type", JSON.to_string()),
        ];
        if method == Method::Get {
            headers.push(("Accept", JSON.to_string()));
        }

        debug!("{} {}", method, url);
        let response = self.transport.execute(Request {
            method,
            url: url.clone(),
            headers,
            body,
        })?;

        if !response.status.is_success() {
            return Err(ApiError::Status {
                method,
                url: url.to_string(),
                status: response.status,
                body: String::from_utf8_lossy(&response.body).into_owned(),
            });
        }

        debug!("{} {} -> {}", method, url, response.status);
        Ok(response)
    }

    pub fn get_json<R: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, &str)],
    ) -> Result<R, ApiError> {
        let url = self.endpoint.url(segments, query)?;
        let response = self.perform(Method::Get, url.clone(), None)?;
        serde_json::from_slice(&response.body).map_err(|source| ApiError::Decode {
            url: url.to_string(),
            source,
        })
    }

    pub fn post_json<B: Serialize>(
        &self,
        segments: &[&str],
        query: &[(&str, &str)],
        body: &B,
    ) -> Result<RawResponse, ApiError> {
        let url = self.endpoint.url(segments, query)?;
        let body = serde_json::to_vec(body).map_err(ApiError::Encode)?;
        self.perform(Method::Post, url, Some(body))
    }

    pub fn delete(&self, segments: &[&str]) -> Result<(), ApiError> {
        let url = self.endpoint.url(segments, &[])?;
        self.perform(Method::Delete, url, None)?;
        Ok(())
    }
}
