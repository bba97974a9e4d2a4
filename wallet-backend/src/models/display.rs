//! Display records handed to the approval UI
//!
//! The interpreter's output: one fully-formed record per request, tagged so
//! the frontend can pick a screen. Serialization is camelCase to match the
//! rest of the API surface.

use crate::assets::Asset;
use ethers::types::U256;
use rust_decimal::Decimal;
use serde::Serialize;

/// A message-signing request, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageDisplay {
    pub message: String,
    pub timestamp_ms: i64,
}

/// A recognized value or token transfer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDisplay {
    pub asset: Asset,
    pub from: String,
    pub to: String,
    /// Exact decimal amount in the asset's units.
    pub value: String,
    /// Exact amount in the display currency; zero when the price is unknown.
    pub native_amount: Decimal,
    /// Rendered fiat string; empty when the price is unknown.
    pub native_amount_display: String,
    pub gas_limit: U256,
    pub gas_price: U256,
    pub nonce: u64,
    pub timestamp_ms: i64,
}

/// An unrecognized contract call, shown with its raw data.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCallDisplay {
    pub data: String,
    pub from: String,
    pub to: String,
    /// Decimal ether amount attached to the call, `"0"` when absent.
    pub value: String,
    pub gas_limit: U256,
    pub gas_price: U256,
    pub nonce: u64,
    pub timestamp_ms: i64,
}

/// The interpreter's result: exactly one variant per request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RequestDisplay {
    Message(MessageDisplay),
    Transaction(TransactionDisplay),
    RawCall(RawCallDisplay),
    /// The method is not part of the signing vocabulary; nothing actionable.
    Empty,
}

impl RequestDisplay {
    pub fn is_empty(&self) -> bool {
        matches!(self, RequestDisplay::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_display_serializes_camel_case() {
        let display = RequestDisplay::Message(MessageDisplay {
            message: "hello".to_string(),
            timestamp_ms: 1627894526123,
        });
        let json = serde_json::to_value(&display).unwrap();
        assert_eq!(json["kind"], "message");
        assert_eq!(json["message"], "hello");
        assert_eq!(json["timestampMs"], 1627894526123i64);
    }

    #[test]
    fn test_empty_serializes_with_tag_only() {
        let json = serde_json::to_value(RequestDisplay::Empty).unwrap();
        assert_eq!(json["kind"], "empty");
    }

    #[test]
    fn test_is_empty() {
        assert!(RequestDisplay::Empty.is_empty());
        let message = RequestDisplay::Message(MessageDisplay {
            message: String::new(),
            timestamp_ms: 0,
        });
        assert!(!message.is_empty());
    }
}
