//! Environment-driven settings for the embedding application.

use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    /// Display currency code for fiat-equivalent amounts.
    pub native_currency: String,
    /// Path to the RON asset registry file.
    pub assets_path: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            native_currency: env::var("NATIVE_CURRENCY").unwrap_or_else(|_| "USD".to_string()),
            assets_path: env::var("ASSETS_CONFIG")
                .unwrap_or_else(|_| "./config/assets.ron".to_string()),
        }
    }
}
