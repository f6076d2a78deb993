//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use storefront_commerce::cart::{CartConfig, StockPolicy};
use storefront_commerce::catalog::PriceUnit;
use storefront_commerce::Currency;
use storefront_observability::{LogFormat, LogLevel};

/// File names searched for, in order, from the working directory upward.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["storefront.toml", ".storefront.toml", "storefront.json"];

/// Storefront configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub cart: CartSection,

    #[serde(default)]
    pub log: LogConfig,
}

impl StorefrontConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        Self::parse(path, &content)
    }

    /// Parse `content` as JSON when `path` ends in `.json`, TOML otherwise.
    pub fn parse(path: &str, content: &str) -> Result<Self> {
        if path.ends_with(".json") {
            serde_json::from_str(content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }

    /// Settings for a new cart session.
    pub fn cart_config(&self) -> CartConfig {
        CartConfig {
            currency: self.catalog.currency,
            stock_policy: self.cart.stock_policy,
        }
    }
}

/// Where products come from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON catalog file. Without it the built-in demo catalog is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Unit of the `price` field in catalog records.
    #[serde(default)]
    pub price_unit: PriceUnit,

    #[serde(default)]
    pub currency: Currency,
}

/// Cart behavior.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CartSection {
    #[serde(default)]
    pub stock_policy: StockPolicy,
}

/// Session log settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default)]
    pub format: LogFormat,

    #[serde(default)]
    pub level: LogLevel,
}

/// Generate a default storefront.toml config file.
pub fn generate_default_config() -> String {
    r#"# Storefront configuration

[catalog]
# JSON file of product records; the demo catalog is used when unset.
# path = "catalog.json"
# "major" (49.99) or "minor" (4999)
price_unit = "major"
currency = "USD"

[cart]
# "unchecked" or "cap-at-stock"
stock_policy = "unchecked"

[log]
# "human" or "json"
format = "human"
level = "info"
"#
    .to_string()
}
