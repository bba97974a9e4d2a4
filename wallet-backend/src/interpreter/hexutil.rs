//! Hex string conversions for request payload fields
//!
//! Session request payloads carry integers (value, gas, nonce) and message
//! bodies as `0x`-prefixed hex strings. Everything here tolerates a missing
//! prefix and treats empty/absent input as zero, since dapps are
//! inconsistent about both.

use ethers::types::U256;
use std::fmt;

/// Decoding failure for a single hex field. Always recovered by the caller;
/// never crosses the interpreter's public boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// A character outside `[0-9a-fA-F]` after prefix removal.
    MalformedHex,
    /// The decoded bytes are not valid UTF-8 text.
    InvalidUtf8,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::MalformedHex => write!(f, "malformed hex"),
            DecodeError::InvalidUtf8 => write!(f, "invalid utf-8"),
        }
    }
}

/// Strip an optional `0x`/`0X` prefix.
pub fn strip_hex_prefix(s: &str) -> &str {
    if s.starts_with("0x") || s.starts_with("0X") {
        &s[2..]
    } else {
        s
    }
}

/// Parse a hex-encoded integer field. Empty or absent input is zero.
pub fn hex_to_u256(s: &str) -> Result<U256, DecodeError> {
    let digits = strip_hex_prefix(s.trim());
    if digits.is_empty() {
        return Ok(U256::zero());
    }
    U256::from_str_radix(digits, 16).map_err(|_| DecodeError::MalformedHex)
}

/// Like [`hex_to_u256`] but narrowed for nonce-class fields.
pub fn hex_to_u64(s: &str) -> Result<u64, DecodeError> {
    let digits = strip_hex_prefix(s.trim());
    if digits.is_empty() {
        return Ok(0);
    }
    u64::from_str_radix(digits, 16).map_err(|_| DecodeError::MalformedHex)
}

/// Decode a hex-encoded UTF-8 message body.
pub fn hex_to_utf8(s: &str) -> Result<String, DecodeError> {
    let digits = strip_hex_prefix(s.trim());
    if digits.is_empty() {
        return Ok(String::new());
    }
    let bytes = hex::decode(digits).map_err(|_| DecodeError::MalformedHex)?;
    String::from_utf8(bytes).map_err(|_| DecodeError::InvalidUtf8)
}

/// True if `s` is a `0x`-prefixed hex string. Dapps conventionally hex-encode
/// personal-sign messages; this is the gate for the best-effort text decode.
pub fn is_hex_string(s: &str) -> bool {
    s.starts_with("0x") && s[2..].bytes().all(|b| b.is_ascii_hexdigit())
}

/// Remove leading `0` characters, preserving at least one digit.
pub fn strip_leading_zeros(s: &str) -> &str {
    let stripped = s.trim_start_matches('0');
    if stripped.is_empty() { "0" } else { stripped }
}
