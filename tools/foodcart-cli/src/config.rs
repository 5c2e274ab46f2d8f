//! CLI configuration.

use std::path::PathBuf;

use anyhow::{Context, Result};
use foodcart_core::CartConfig;
use serde::{Deserialize, Serialize};

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Cart settings.
    #[serde(default)]
    pub cart: CartConfig,

    /// Storage settings.
    #[serde(default)]
    pub storage: StorageConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }
}

/// Where the cart store lives.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Store directory. Defaults to the user data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

/// Generate a default foodcart.toml config file.
pub fn generate_default_config() -> String {
    r#"# Foodcart configuration

[cart]
# Key the cart is saved under in the store
storage_key = "cart"
# Suffix shown after prices
currency_suffix = "₫"
# Print confirmation messages after add/remove/clear
notifications = true

[storage]
# dir = "/path/to/cart/store"
"#
    .to_string()
}
