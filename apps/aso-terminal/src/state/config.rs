//! # Store Configuration
//!
//! The catalog, tax rate and branding the engine runs with.
//!
//! ## Configuration Sources
//! 1. `StallConfig::default()` - the built-in hotdog stall (what the binary runs)
//! 2. `StallConfig::from_json_str` - a JSON document; missing fields fall back
//!    to the defaults
//!
//! Read-only once the session starts.

use aso_core::{default_catalog, CatalogEntry, CoreError, Inventory, TaxRate};
use aso_core::validation::validate_tax_rate_bps;
use serde::Deserialize;

/// Store configuration.
///
/// ## Example document
/// ```json
/// {
///   "store_name": "Kanto Dogs",
///   "currency_symbol": "₱",
///   "tax_rate_bps": 1200,
///   "catalog": [
///     { "name": "Jumbo Dog", "price_cents": 6500, "quantity": 12, "max_stock": 30 }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StallConfig {
    /// Printed on the menu banner, receipts and goodbye line.
    pub store_name: String,

    /// Prefix for every money amount.
    pub currency_symbol: String,

    /// Checkout tax in basis points (700 = 7%).
    pub tax_rate_bps: u32,

    /// Items the store opens with, in display order.
    pub catalog: Vec<CatalogEntry>,
}

impl Default for StallConfig {
    /// ## Default Values
    /// - Store: "Mainit na Aso's"
    /// - Currency: `$`
    /// - Tax: 7%
    /// - Catalog: the six-item hotdog menu
    fn default() -> Self {
        StallConfig {
            store_name: aso_core::DEFAULT_STORE_NAME.to_string(),
            currency_symbol: aso_core::money::DEFAULT_CURRENCY_SYMBOL.to_string(),
            tax_rate_bps: aso_core::DEFAULT_TAX_RATE.bps(),
            catalog: default_catalog(),
        }
    }
}

impl StallConfig {
    /// Parses and validates a JSON configuration document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: StallConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks every field the engine depends on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.store_name.trim().is_empty() {
            return Err(ConfigError::InvalidValue("store_name".to_string()));
        }

        validate_tax_rate_bps(self.tax_rate_bps)
            .map_err(|_| ConfigError::InvalidValue("tax_rate_bps".to_string()))?;

        // Builds and discards an inventory so catalog errors surface here
        Inventory::from_catalog(&self.catalog)?;

        Ok(())
    }

    #[inline]
    pub fn tax_rate(&self) -> TaxRate {
        TaxRate::from_bps(self.tax_rate_bps)
    }

    /// Fresh inventory from the catalog. Every run starts here.
    pub fn build_inventory(&self) -> Result<Inventory, ConfigError> {
        Ok(Inventory::from_catalog(&self.catalog)?)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Invalid catalog: {0}")]
    Catalog(#[from] CoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = StallConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.tax_rate().bps(), 700);
        assert_eq!(config.build_inventory().unwrap().len(), 6);
    }

    #[test]
    fn test_partial_document_fills_defaults() {
        let config = StallConfig::from_json_str(r#"{ "tax_rate_bps": 1200 }"#).unwrap();
        assert_eq!(config.tax_rate_bps, 1200);
        assert_eq!(config.store_name, "Mainit na Aso's");
        assert_eq!(config.catalog.len(), 6);
    }

    #[test]
    fn test_custom_catalog() {
        let config = StallConfig::from_json_str(
            r#"{
                "store_name": "Kanto Dogs",
                "currency_symbol": "₱",
                "catalog": [
                    { "name": "Jumbo Dog", "price_cents": 6500, "quantity": 12, "max_stock": 30 }
                ]
            }"#,
        )
        .unwrap();
        let inventory = config.build_inventory().unwrap();
        assert_eq!(inventory.len(), 1);
        assert_eq!(inventory.get(1).unwrap().needed(), 18);
    }

    #[test]
    fn test_rejects_bad_documents() {
        assert!(matches!(
            StallConfig::from_json_str("not json"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            StallConfig::from_json_str(r#"{ "tax_rate_bps": 20000 }"#),
            Err(ConfigError::InvalidValue(_))
        ));
        assert!(matches!(
            StallConfig::from_json_str(r#"{ "catalog": [] }"#),
            Err(ConfigError::Catalog(CoreError::EmptyCatalog))
        ));
        assert!(matches!(
            StallConfig::from_json_str(r#"{ "store_name": " " }"#),
            Err(ConfigError::InvalidValue(_))
        ));
    }
}
