//! Raw session request types
//!
//! Shapes as delivered by the session transport after JSON decoding. All
//! fields are dapp-supplied and untrusted; the interpreter owns turning
//! them into something displayable.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request correlation id. The session protocol sends numbers, but some
/// transports re-encode them as strings on the way through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequestId {
    Number(u64),
    Text(String),
}

impl RequestId {
    /// The id's decimal digits, however it arrived.
    pub fn digits(&self) -> String {
        match self {
            RequestId::Number(n) => n.to_string(),
            RequestId::Text(s) => s.clone(),
        }
    }
}

/// An incoming signing or transaction request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RequestId>,
    pub method: String,
    #[serde(default)]
    pub params: Vec<Value>,
}

/// `params[0]` of a transaction-bearing request. Integer fields are
/// hex-encoded strings; empty or absent means zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransactionPayload {
    pub from: String,
    pub to: String,
    pub value: String,
    pub data: String,
    #[serde(alias = "gas")]
    pub gas_limit: String,
    pub gas_price: String,
    pub nonce: String,
}
