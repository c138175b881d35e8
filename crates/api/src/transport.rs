use crate::error::ApiError;
use reqwest::blocking::Client;
use reqwest::{StatusCode, Url};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        })
    }
}

/// A fully prepared request: URL, headers and optional body
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    pub url: Url,
    pub headers: Vec<(&'static str, String)>,
    pub body: Option<Vec<u8>>,
}

impl Request {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Status and fully buffered body of an answered request
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

/// Executes prepared requests. Implementations block until the whole body
/// has been read and only fail on transport problems; status codes are left
/// to the caller.
pub trait Transport {
    fn execute(&self, request: Request) -> Result<RawResponse, ApiError>;
}

/// Blocking HTTP(S) transport backed by reqwest
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, ApiError> {
        let client = Client::builder().build().map_err(ApiError::Client)?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn execute(&self, request: Request) -> Result<RawResponse, ApiError> {
        let url = request.url.to_string();
        let transport_error = |e: reqwest::Error| ApiError::Transport {
            url: url.clone(),
            source: Box::new(e),
        };

        let mut builder = self.client.request(request.method.into(), request.url);
        for (name, value) in &request.headers {
            builder = builder.header(*name, value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().map_err(transport_error)?;
        let status = response.status();
        let body = response.bytes().map_err(transport_error)?.to_vec();

        Ok(RawResponse { status, body })
    }
}
