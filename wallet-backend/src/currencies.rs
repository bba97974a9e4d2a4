//! Native display currency conventions
//!
//! Fixed reference table for the currencies the approval screen can price
//! amounts in. Codes outside the table still render, with the code as a
//! suffix instead of a symbol.

use rust_decimal::{Decimal, RoundingStrategy};

/// Display conventions for one settlement currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NativeCurrency {
    pub code: &'static str,
    pub symbol: &'static str,
    /// Fraction digits shown on the approval screen.
    pub decimals: u32,
    /// Whether the symbol precedes the amount (`$12.34` vs `12.34 kr`).
    pub symbol_leads: bool,
}

const CURRENCIES: &[NativeCurrency] = &[
    NativeCurrency { code: "USD", symbol: "$", decimals: 2, symbol_leads: true },
    NativeCurrency { code: "EUR", symbol: "€", decimals: 2, symbol_leads: true },
    NativeCurrency { code: "GBP", symbol: "£", decimals: 2, symbol_leads: true },
    NativeCurrency { code: "JPY", symbol: "¥", decimals: 2, symbol_leads: true },
    NativeCurrency { code: "CNY", symbol: "¥", decimals: 2, symbol_leads: true },
    NativeCurrency { code: "KRW", symbol: "₩", decimals: 2, symbol_leads: true },
    NativeCurrency { code: "INR", symbol: "₹", decimals: 2, symbol_leads: true },
    NativeCurrency { code: "RUB", symbol: "₽", decimals: 2, symbol_leads: false },
    NativeCurrency { code: "AUD", symbol: "A$", decimals: 2, symbol_leads: true },
    NativeCurrency { code: "CAD", symbol: "C$", decimals: 2, symbol_leads: true },
];

/// Look up a currency by its code, case-insensitive.
pub fn lookup(code: &str) -> Option<&'static NativeCurrency> {
    CURRENCIES.iter().find(|c| c.code.eq_ignore_ascii_case(code))
}

/// Render `amount` in the conventions of `code`: fixed fraction digits,
/// symbol placement per the table, `"12.34 XYZ"` for unknown codes.
pub fn format_native(amount: Decimal, code: &str) -> String {
    match lookup(code) {
        Some(currency) => {
            let rounded = amount
                .round_dp_with_strategy(currency.decimals, RoundingStrategy::MidpointAwayFromZero);
            if currency.symbol_leads {
                format!("{}{:.*}", currency.symbol, currency.decimals as usize, rounded)
            } else {
                format!("{:.*} {}", currency.decimals as usize, rounded, currency.symbol)
            }
        }
        None => {
            let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            format!("{:.2} {}", rounded, code)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_lookup_case_insensitive() {
        assert_eq!(lookup("usd").unwrap().symbol, "$");
        assert_eq!(lookup("USD").unwrap().symbol, "$");
        assert!(lookup("XYZ").is_none());
    }

    #[test]
    fn test_format_prefix_symbol() {
        assert_eq!(format_native(dec!(16), "USD"), "$16.00");
        assert_eq!(format_native(dec!(1234.5), "EUR"), "€1234.50");
    }

    #[test]
    fn test_format_suffix_symbol() {
        assert_eq!(format_native(dec!(99.9), "RUB"), "99.90 ₽");
    }

    #[test]
    fn test_format_rounds_half_away_from_zero() {
        assert_eq!(format_native(dec!(0.005), "USD"), "$0.01");
        assert_eq!(format_native(dec!(2.675), "USD"), "$2.68");
    }

    #[test]
    fn test_format_unknown_code_uses_suffix() {
        assert_eq!(format_native(dec!(3.14159), "XYZ"), "3.14 XYZ");
    }
}
