//! Transaction call-data classification
//!
//! A transaction's `data` field decides what the approval screen shows:
//! empty data is a plain value transfer, a recognized ERC-20 `transfer`
//! call gets its recipient and amount decoded out of the fixed argument
//! slots, and everything else is surfaced as an opaque contract call.
//! The input is attacker-supplied, so classification is total: malformed
//! or truncated payloads fall back to the opaque variant instead of
//! failing the request.

use crate::interpreter::hexutil;
use ethers::types::{Address, U256};

/// Selector for `transfer(address,uint256)`: `keccak256(sig)[..4]`.
pub const TRANSFER_SELECTOR: [u8; 4] = [0xa9, 0x05, 0x9c, 0xbb];

/// Selector + 32-byte recipient word + 32-byte amount word.
const TRANSFER_CALL_LEN: usize = 68;

/// Classified call data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallData {
    /// Empty data: the value transfer target is the payload's `to` itself.
    PlainTransfer,
    /// Recognized ERC-20 `transfer` call on the contract at the payload's `to`.
    TokenTransfer { recipient: Address, raw_amount: U256 },
    /// Unrecognized or undecodable contract call; shown verbatim.
    Raw { data: String },
}

/// Classify a transaction `data` field.
///
/// Only the single `transfer(address,uint256)` selector is recognized;
/// other token operations (`transferFrom`, `approve`, ...) deliberately
/// stay opaque so the screen never shows a decoded amount it is not sure
/// about.
pub fn decode_call_data(data: &str) -> CallData {
    let digits = hexutil::strip_hex_prefix(data.trim());
    if digits.is_empty() {
        return CallData::PlainTransfer;
    }
    let bytes = match hex::decode(digits) {
        Ok(b) => b,
        Err(_) => return CallData::Raw { data: data.to_string() },
    };
    match parse_token_transfer(&bytes) {
        Some((recipient, raw_amount)) => CallData::TokenTransfer { recipient, raw_amount },
        None => CallData::Raw { data: data.to_string() },
    }
}

/// Extract `(recipient, amount)` from `transfer(address,uint256)` call data.
/// `None` for any other selector or a truncated argument section.
fn parse_token_transfer(data: &[u8]) -> Option<(Address, U256)> {
    if data.get(0..4)? != &TRANSFER_SELECTOR[..] {
        return None;
    }
    if data.len() < TRANSFER_CALL_LEN {
        return None;
    }
    // Argument words are 32 bytes; the address occupies the low 20 bytes
    // of word 1, the amount is word 2 big-endian.
    let recipient = Address::from_slice(data.get(16..36)?);
    let raw_amount = U256::from_big_endian(data.get(36..68)?);
    Some((recipient, raw_amount))
}
