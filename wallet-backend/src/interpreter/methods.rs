//! Session protocol signing methods
//!
//! Closed vocabulary of the request methods the interpreter understands.
//! Method strings are an external protocol contract; anything outside this
//! enum is routed to the empty display by the dispatcher's default arm.

use strum::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum SigningMethod {
    #[strum(serialize = "eth_sendTransaction")]
    SendTransaction,
    #[strum(serialize = "eth_signTransaction")]
    SignTransaction,
    #[strum(serialize = "eth_sign")]
    Sign,
    #[strum(serialize = "personal_sign")]
    PersonalSign,
    #[strum(serialize = "eth_signTypedData")]
    SignTypedData,
    #[strum(serialize = "eth_signTypedData_v3")]
    SignTypedDataV3,
    #[strum(serialize = "eth_signTypedData_v4")]
    SignTypedDataV4,
}

impl SigningMethod {
    /// True for methods whose `params[0]` is a transaction payload.
    pub fn carries_transaction(&self) -> bool {
        matches!(self, SigningMethod::SendTransaction | SigningMethod::SignTransaction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_parse_known_methods() {
        assert_eq!(
            SigningMethod::from_str("eth_sendTransaction").unwrap(),
            SigningMethod::SendTransaction
        );
        assert_eq!(
            SigningMethod::from_str("personal_sign").unwrap(),
            SigningMethod::PersonalSign
        );
        assert_eq!(
            SigningMethod::from_str("eth_signTypedData_v4").unwrap(),
            SigningMethod::SignTypedDataV4
        );
    }

    #[test]
    fn test_unknown_method_fails_parse() {
        assert!(SigningMethod::from_str("wallet_switchEthereumChain").is_err());
        assert!(SigningMethod::from_str("ETH_SIGN").is_err());
        assert!(SigningMethod::from_str("").is_err());
    }

    #[test]
    fn test_wire_name_round_trip() {
        let method = SigningMethod::SignTransaction;
        assert_eq!(SigningMethod::from_str(&method.to_string()).unwrap(), method);
    }

    #[test]
    fn test_carries_transaction() {
        assert!(SigningMethod::SendTransaction.carries_transaction());
        assert!(SigningMethod::SignTransaction.carries_transaction());
        assert!(!SigningMethod::PersonalSign.carries_transaction());
    }
}
