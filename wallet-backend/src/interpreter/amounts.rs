//! Raw token amount and price conversion
//!
//! Token amounts arrive as raw integers in the token's smallest unit and
//! leave as exact decimal strings. All arithmetic is integer/string or
//! `rust_decimal`; binary floating point would silently corrupt amounts
//! with 18 fractional digits.

use crate::currencies;
use ethers::types::U256;
use rust_decimal::Decimal;
use std::str::FromStr;

/// A priced amount ready for the approval screen.
#[derive(Debug, Clone, PartialEq)]
pub struct NativeDisplay {
    /// Exact amount in the display currency.
    pub amount: Decimal,
    /// Rendered string (`"$16.00"`), empty when the price is unknown.
    pub display: String,
}

impl NativeDisplay {
    fn price_unknown() -> Self {
        NativeDisplay { amount: Decimal::ZERO, display: String::new() }
    }
}

/// Scale a raw minor-unit amount down by `decimals`, returning an exact
/// decimal string with trailing fractional zeros trimmed (`"1"`, `"0.01"`).
pub fn raw_to_decimal(raw: U256, decimals: u32) -> String {
    let digits = raw.to_string();
    if decimals == 0 {
        return digits;
    }
    let decimals = decimals as usize;
    // Left-pad so there is at least one integer digit.
    let padded = if digits.len() <= decimals {
        format!("{}{}", "0".repeat(decimals + 1 - digits.len()), digits)
    } else {
        digits
    };
    let (int_part, frac_part) = padded.split_at(padded.len() - decimals);
    let frac_part = frac_part.trim_end_matches('0');
    if frac_part.is_empty() {
        int_part.to_string()
    } else {
        format!("{}.{}", int_part, frac_part)
    }
}

/// Wei to ether: the native chain unit is always 18 decimals.
pub fn wei_to_ether(raw: U256) -> String {
    raw_to_decimal(raw, 18)
}

/// Price an exact decimal amount in the display currency.
///
/// A zero or unknown unit price is the recoverable "price unavailable" case:
/// the amount is zero and the display string empty, so the approval screen
/// simply omits the fiat line. Amounts outside `Decimal` range degrade the
/// same way rather than failing the request.
pub fn to_native_display(amount_decimal: &str, unit_price: Decimal, currency: &str) -> NativeDisplay {
    if unit_price.is_zero() {
        return NativeDisplay::price_unknown();
    }
    let amount = match Decimal::from_str(amount_decimal) {
        Ok(d) => d,
        Err(e) => {
            log::warn!("[amounts] amount '{}' not representable: {}", amount_decimal, e);
            return NativeDisplay::price_unknown();
        }
    };
    let native = match amount.checked_mul(unit_price) {
        Some(v) => v,
        None => {
            log::warn!("[amounts] native conversion overflow for amount '{}'", amount_decimal);
            return NativeDisplay::price_unknown();
        }
    };
    NativeDisplay {
        amount: native,
        display: currencies::format_native(native, currency),
    }
}
