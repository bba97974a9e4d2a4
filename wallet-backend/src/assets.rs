//! Asset registry for resolving transfer targets to known assets
//!
//! Maps contract addresses to asset metadata (symbol, decimals, unit price)
//! plus a distinguished entry for the chain's native asset. The registry is
//! a read-only snapshot passed into each interpretation call; price updates
//! are the price feed's problem, not ours. Asset data can be loaded from
//! `assets.ron` in the config directory or built programmatically.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Unit price of an asset in the display currency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AssetPrice {
    pub value: Decimal,
}

/// A displayable asset: the native coin or an ERC-20 token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// Contract address; `None` for the native asset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub symbol: String,
    pub decimals: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<AssetPrice>,
}

impl Asset {
    /// Placeholder for a registry miss. Decimals are assumed 18 — the most
    /// common token precision — and no price, so the fiat line stays blank.
    pub fn unknown() -> Self {
        Asset {
            address: None,
            symbol: "unknown".to_string(),
            decimals: 18,
            price: None,
        }
    }

    /// Unit price, zero when no price is known.
    pub fn unit_price(&self) -> Decimal {
        self.price.map(|p| p.value).unwrap_or(Decimal::ZERO)
    }
}

/// On-disk registry file shape (`assets.ron`).
#[derive(Debug, Deserialize)]
struct RegistryFile {
    native: Asset,
    #[serde(default)]
    tokens: HashMap<String, Asset>,
}

/// Read-only asset lookup, keyed by lowercase contract address.
#[derive(Debug, Clone)]
pub struct AssetRegistry {
    native: Asset,
    tokens: HashMap<String, Asset>,
}

impl AssetRegistry {
    /// A registry holding only the native asset.
    pub fn new(native: Asset) -> Self {
        AssetRegistry {
            native,
            tokens: HashMap::new(),
        }
    }

    /// Load from a RON registry file.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read asset registry {:?}: {}", path, e))?;
        let file: RegistryFile = ron::from_str(&content)
            .map_err(|e| format!("Failed to parse asset registry {:?}: {}", path, e))?;

        let mut registry = AssetRegistry::new(file.native);
        for (address, mut token) in file.tokens {
            if token.address.is_none() {
                token.address = Some(address.clone());
            }
            registry.tokens.insert(address.to_lowercase(), token);
        }
        log::info!(
            "[assets] Loaded {} token assets from {:?}",
            registry.tokens.len(),
            path
        );
        Ok(registry)
    }

    /// Add or replace a token asset. No-op for assets without an address;
    /// the native entry is fixed at construction.
    pub fn insert(&mut self, asset: Asset) {
        if let Some(address) = asset.address.clone() {
            self.tokens.insert(address.to_lowercase(), asset);
        }
    }

    /// Resolve an asset by contract address. `None` resolves to the native
    /// asset; a miss returns `None` and the caller substitutes
    /// [`Asset::unknown`].
    pub fn lookup(&self, address: Option<&str>) -> Option<&Asset> {
        match address {
            None => Some(&self.native),
            Some(addr) => self.tokens.get(&addr.to_lowercase()),
        }
    }

    pub fn native(&self) -> &Asset {
        &self.native
    }

    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }
}
