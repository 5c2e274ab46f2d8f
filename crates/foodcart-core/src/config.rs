//! Cart configuration.

use serde::{Deserialize, Serialize};

use crate::error::CartError;

/// Settings for a [`CartStore`](crate::cart::CartStore).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartConfig {
    /// Key the cart is persisted under.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Currency suffix used when formatting prices.
    #[serde(default = "default_currency_suffix")]
    pub currency_suffix: String,

    /// Whether the store emits user-facing notifications.
    #[serde(default = "default_true")]
    pub notifications: bool,
}

fn default_storage_key() -> String {
    "cart".to_string()
}

fn default_currency_suffix() -> String {
    "₫".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            currency_suffix: default_currency_suffix(),
            notifications: true,
        }
    }
}

impl CartConfig {
    /// Parse a TOML document holding cart settings at its top level.
    pub fn from_toml_str(s: &str) -> Result<Self, CartError> {
        Ok(toml::from_str(s)?)
    }

    /// Use a different storage key, e.g. one namespaced per session.
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }
}
