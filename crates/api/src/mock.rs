//! Recording transport for exercising request flows without a server

use crate::error::ApiError;
use crate::transport::{RawResponse, Request, Transport};
use reqwest::StatusCode;
use std::cell::RefCell;
use std::collections::VecDeque;

enum Scripted {
    Response(RawResponse),
    Failure(String),
}

/// Answers requests from a queue of scripted responses, in order, and keeps
/// every request it sees. Once the queue is drained it answers `200` with an
/// empty body.
#[derive(Default)]
pub struct MockTransport {
    script: RefCell<VecDeque<Scripted>>,
    requests: RefCell<Vec<Request>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        self.script.borrow_mut().push_back(Scripted::Response(RawResponse {
            status,
            body: body.into(),
        }));
        self
    }

    /// Queue a transport-level failure (connection refused, TLS, ...)
    pub fn fail(self, message: &str) -> Self {
        self.script
            .borrow_mut()
            .push_back(Scripted::Failure(message.to_string()));
        self
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.borrow().clone()
    }
}

impl Transport for MockTransport {
    fn execute(&self, request: Request) -> Result<RawResponse, ApiError> {
        let url = request.url.to_string();
        self.requests.borrow_mut().push(request);

        match self.script.borrow_mut().pop_front() {
            Some(Scripted::Response(response)) => Ok(response),
            Some(Scripted::Failure(message)) => Err(ApiError::Transport {
                url,
                source: message.into(),
            }),
            None => Ok(RawResponse {
                status: StatusCode::OK,
                body: Vec::new(),
            }),
        }
    }
}
