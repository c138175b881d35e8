pub mod file_utils;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Encoding tag the server uses for base64 payloads
pub const BASE64_ENCODING: &str = "Base64";

/// Outbound invoice file, POSTed to the `send` resource
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SendItem {
    #[serde(rename = "Payload")]
    pub payload: String, // base64-encoded file content
    #[serde(rename = "FileName")]
    pub file_name: String,
    #[serde(rename = "FilePath")]
    pub file_path: String, // client-side only, ignored by the server
}

/// Inbound invoice file as returned by the `receive` resource
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ReceiveItem {
    #[serde(rename = "Id")]
    pub id: i64,
    pub payload: String,
    pub file_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
}

/// Body of a `receive` listing.
///
/// Current servers answer with a bare array; older ones wrapped it in a
/// `$values` envelope.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum ReceiveList {
    Items(Vec<ReceiveItem>),
    Envelope {
        #[serde(rename = "$values")]
        items: Vec<ReceiveItem>,
    },
}

impl ReceiveList {
    pub fn into_items(self) -> Vec<ReceiveItem> {
        match self {
            ReceiveList::Items(items) | ReceiveList::Envelope { items } => items,
        }
    }
}

/// Digital signature handling requested when sending a document
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Signature {
    #[default]
    Auto,
    Apply,
    None,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid signature mode '{0}': expected one of auto, apply, none")]
pub struct InvalidSignature(pub String);

impl Signature {
    /// Value transmitted in the `signature` query parameter
    pub fn as_query_value(&self) -> &'static str {
        match self {
            Signature::Auto => "Auto",
            Signature::Apply => "Apply",
            Signature::None => "None",
        }
    }
}

impl FromStr for Signature {
    type Err = InvalidSignature;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Signature::Auto),
            "apply" => Ok(Signature::Apply),
            "none" => Ok(Signature::None),
            _ => Err(InvalidSignature(s.to_string())),
        }
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_query_value())
    }
}
