use crate::auth::Credential;
use crate::client::ApiClient;
use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::transport::{HttpTransport, Transport};
use common::{ReceiveItem, ReceiveList, SendItem, Signature};
use log::debug;
use reqwest::StatusCode;

pub const SEND_RESOURCE: &str = "send";
pub const RECEIVE_RESOURCE: &str = "receive";

fn flag(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// The invoice exchange calls offered by the remote API
pub struct InvoiceApi<T = HttpTransport> {
    client: ApiClient<T>,
}

impl InvoiceApi<HttpTransport> {
    /// Validate host and key, then set up an HTTP-backed client
    pub fn connect(host: &str, version: u32, api_key: &str) -> Result<Self, ApiError> {
        let endpoint = Endpoint::new(host, version)?;
        let credential = Credential::new(api_key)?;
        let transport = HttpTransport::new()?;
        Ok(Self::new(ApiClient::new(transport, endpoint, credential)))
    }
}

impl<T: Transport> InvoiceApi<T> {
    pub fn new(client: ApiClient<T>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient<T> {
        &self.client
    }

    /// POST one document to `send`; returns the accepting status
    pub fn send(
        &self,
        item: &SendItem,
        validate: bool,
        signature: Signature,
    ) -> Result<StatusCode, ApiError> {
        debug!("{} is being sent to the remote", item.file_name);
        let response = self.client.post_json(
            &[SEND_RESOURCE],
            &[
                ("validate", flag(validate)),
                ("signature", signature.as_query_value()),
            ],
            item,
        )?;
        Ok(response.status)
    }

    /// List received documents, optionally only the unread ones
    pub fn receive(&self, unread: bool) -> Result<Vec<ReceiveItem>, ApiError> {
        let list: ReceiveList = self
            .client
            .get_json(&[RECEIVE_RESOURCE], &[("unread", flag(unread))])?;
        Ok(list.into_items())
    }

    /// Fetch a single received document
    pub fn get(&self, id: i64) -> Result<ReceiveItem, ApiError> {
        debug!("Requesting item #{}", id);
        self.client
            .get_json(&[RECEIVE_RESOURCE, id.to_string().as_str()], &[])
    }

    /// Remove a received document from the remote
    pub fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete(&[RECEIVE_RESOURCE, id.to_string().as_str()])?;
        debug!("Item #{} deleted from the remote", id);
        Ok(())
    }
}
