//! Request interpretation
//!
//! Turns a raw signing/transaction request into the display record the
//! approval screen renders. The contract is total: every request produces
//! exactly one [`RequestDisplay`], however adversarial the payload — a
//! garbled field degrades to a safe placeholder so the user can still
//! reject the request, and only structurally impossible requests (or
//! methods outside the signing vocabulary) come back as
//! [`RequestDisplay::Empty`].

pub mod amounts;
pub mod calldata;
pub mod hexutil;
pub mod methods;

use crate::assets::{Asset, AssetRegistry};
use crate::models::display::{
    MessageDisplay, RawCallDisplay, RequestDisplay, TransactionDisplay,
};
use crate::models::request::{RequestId, SignRequest, TransactionPayload};
use calldata::CallData;
use chrono::Utc;
use ethers::types::U256;
use methods::SigningMethod;
use std::str::FromStr;

/// Interpret one request against a registry snapshot.
///
/// `native_currency` is the display currency code (`"USD"`, ...); the
/// registry supplies asset metadata and unit prices. Both are read-only
/// and per-call, so concurrent requests never contend.
pub fn interpret_request(
    request: &SignRequest,
    registry: &AssetRegistry,
    native_currency: &str,
) -> RequestDisplay {
    let timestamp_ms = request_timestamp_ms(request);

    let method = match SigningMethod::from_str(&request.method) {
        Ok(m) => m,
        Err(_) => {
            log::debug!("[interpreter] unsupported method '{}'", request.method);
            return RequestDisplay::Empty;
        }
    };

    match method {
        SigningMethod::SendTransaction | SigningMethod::SignTransaction => {
            let payload = match transaction_payload(request) {
                Some(p) => p,
                None => return RequestDisplay::Empty,
            };
            transaction_display(&payload, registry, native_currency, timestamp_ms)
        }
        SigningMethod::Sign => {
            // params[0] is the signing address, params[1] the message hash
            match request.params.get(1).and_then(|v| v.as_str()) {
                Some(message) => message_display(message.to_string(), timestamp_ms),
                None => RequestDisplay::Empty,
            }
        }
        SigningMethod::PersonalSign => {
            match request.params.first().and_then(|v| v.as_str()) {
                Some(message) => {
                    message_display(decode_personal_message(message), timestamp_ms)
                }
                None => RequestDisplay::Empty,
            }
        }
        SigningMethod::SignTypedData
        | SigningMethod::SignTypedDataV3
        | SigningMethod::SignTypedDataV4 => {
            // params[0] is the signing address, params[1] the typed payload
            let message = request
                .params
                .get(1)
                .and_then(|v| v.get("message"))
                .and_then(|m| serde_json::to_string(m).ok());
            match message {
                Some(json) => message_display(json, timestamp_ms),
                None => RequestDisplay::Empty,
            }
        }
    }
}

fn message_display(message: String, timestamp_ms: i64) -> RequestDisplay {
    RequestDisplay::Message(MessageDisplay { message, timestamp_ms })
}

/// Personal-sign messages are conventionally hex-encoded UTF-8. Decode when
/// the message looks like hex; on any failure show the original unchanged.
fn decode_personal_message(message: &str) -> String {
    if hexutil::is_hex_string(message) {
        match hexutil::hex_to_utf8(message) {
            Ok(text) => text,
            Err(e) => {
                log::debug!("[interpreter] personal_sign message kept as hex: {}", e);
                message.to_string()
            }
        }
    } else {
        message.to_string()
    }
}

fn transaction_payload(request: &SignRequest) -> Option<TransactionPayload> {
    let value = request.params.first()?.clone();
    match serde_json::from_value(value) {
        Ok(payload) => Some(payload),
        Err(e) => {
            log::warn!("[interpreter] undecodable transaction payload: {}", e);
            None
        }
    }
}

fn transaction_display(
    payload: &TransactionPayload,
    registry: &AssetRegistry,
    native_currency: &str,
    timestamp_ms: i64,
) -> RequestDisplay {
    let gas_limit = hex_field_u256(&payload.gas_limit, "gasLimit");
    let gas_price = hex_field_u256(&payload.gas_price, "gasPrice");
    let nonce = hex_field_u64(&payload.nonce, "nonce");

    match calldata::decode_call_data(&payload.data) {
        CallData::PlainTransfer => {
            let value = amounts::wei_to_ether(hex_field_u256(&payload.value, "value"));
            let asset = registry
                .lookup(None)
                .cloned()
                .unwrap_or_else(Asset::unknown);
            let native =
                amounts::to_native_display(&value, asset.unit_price(), native_currency);
            RequestDisplay::Transaction(TransactionDisplay {
                asset,
                from: payload.from.clone(),
                to: payload.to.clone(),
                value,
                native_amount: native.amount,
                native_amount_display: native.display,
                gas_limit,
                gas_price,
                nonce,
                timestamp_ms,
            })
        }
        CallData::TokenTransfer { recipient, raw_amount } => {
            let asset = registry
                .lookup(Some(&payload.to))
                .cloned()
                .unwrap_or_else(|| {
                    log::warn!("[interpreter] unknown asset contract {}", payload.to);
                    Asset::unknown()
                });
            let value = amounts::raw_to_decimal(raw_amount, asset.decimals);
            let native =
                amounts::to_native_display(&value, asset.unit_price(), native_currency);
            RequestDisplay::Transaction(TransactionDisplay {
                asset,
                from: payload.from.clone(),
                // The payload `to` was the token contract; show the real recipient.
                to: format!("{:?}", recipient),
                value,
                native_amount: native.amount,
                native_amount_display: native.display,
                gas_limit,
                gas_price,
                nonce,
                timestamp_ms,
            })
        }
        CallData::Raw { data } => {
            let value = amounts::wei_to_ether(hex_field_u256(&payload.value, "value"));
            RequestDisplay::RawCall(RawCallDisplay {
                data,
                from: payload.from.clone(),
                to: payload.to.clone(),
                value,
                gas_limit,
                gas_price,
                nonce,
                timestamp_ms,
            })
        }
    }
}

fn hex_field_u256(raw: &str, field: &str) -> U256 {
    match hexutil::hex_to_u256(raw) {
        Ok(v) => v,
        Err(e) => {
            log::warn!("[interpreter] {} field '{}' ignored: {}", field, raw, e);
            U256::zero()
        }
    }
}

fn hex_field_u64(raw: &str, field: &str) -> u64 {
    match hexutil::hex_to_u64(raw) {
        Ok(v) => v,
        Err(e) => {
            log::warn!("[interpreter] {} field '{}' ignored: {}", field, raw, e);
            0
        }
    }
}

fn request_timestamp_ms(request: &SignRequest) -> i64 {
    request
        .id
        .as_ref()
        .and_then(timestamp_from_id)
        .unwrap_or_else(|| Utc::now().timestamp_millis())
}

/// The session protocol builds numeric ids as epoch-millis with three
/// random digits appended; drop the suffix to recover the timestamp.
/// Best effort only — ids from other schemes fall back to the wall clock.
fn timestamp_from_id(id: &RequestId) -> Option<i64> {
    let digits = id.digits();
    let cut = digits.len().checked_sub(3)?;
    let prefix = digits.get(..cut)?;
    if prefix.is_empty() {
        return None;
    }
    prefix.parse::<i64>().ok()
}
