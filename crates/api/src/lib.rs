//! Client for the eInvoice REST API
//!
//! [`Endpoint`] composes request URLs, [`ApiClient`] runs authenticated
//! requests over a [`Transport`] and turns non-2xx answers into errors, and
//! [`InvoiceApi`] exposes the send/receive/get/delete calls on top of it.

pub mod auth;
pub mod client;
pub mod endpoint;
pub mod error;
pub mod invoices;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod transport;

pub use auth::Credential;
pub use client::ApiClient;
pub use endpoint::Endpoint;
pub use error::ApiError;
pub use invoices::InvoiceApi;
pub use reqwest::StatusCode;
pub use transport::{HttpTransport, Method, RawResponse, Request, Transport};
