//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use foodcart_cache::Cache;
use foodcart_core::CartStore;

use crate::config::CliConfig;
use crate::output::Output;

const CONFIG_NAMES: [&str; 3] = ["foodcart.toml", ".foodcart.toml", "foodcart.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Path the configuration was read from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// Directory holding the cart store.
    pub data_dir: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, data_dir: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            (CliConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            // Try to find config in current directory or parent directories
            match Self::find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            }
        };

        let data_dir = match (data_dir, &config.storage.dir) {
            (Some(dir), _) => resolve(&cwd, Path::new(dir)),
            (None, Some(dir)) => resolve(&cwd, dir),
            (None, None) => dirs_path().join("foodcart"),
        };

        tracing::debug!(
            config = ?config_path,
            data_dir = %data_dir.display(),
            "resolved cli context"
        );

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
            data_dir,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(CliConfig, PathBuf)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = CliConfig::load(config_path.to_str()?) {
                        return Some((config, config_path));
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Open the key-value store under the data directory.
    pub fn open_cache(&self) -> Result<Cache> {
        Cache::open_dir(&self.data_dir)
            .with_context(|| format!("Failed to open cart store at {}", self.data_dir.display()))
    }

    /// Open the cart store, wiring notifications to the terminal.
    pub fn open_cart(&self) -> Result<CartStore> {
        let cache = self.open_cache()?;
        self.output.debug(&format!(
            "Cart store: {} (key '{}')",
            self.data_dir.display(),
            self.config.cart.storage_key
        ));

        let output = self.output.clone();
        let mut cart = CartStore::open(cache, self.config.cart.clone())
            .with_notifier(move |n: &foodcart_core::notify::Notification| output.notify(n));

        if self.output.is_verbose() {
            let output = self.output.clone();
            cart.subscribe(move |event, lines| {
                let event = serde_json::to_string(event).unwrap_or_default();
                output.debug(&format!("{} ({} lines)", event, lines.len()));
            });
        }

        Ok(cart)
    }

    /// Format a price with the configured currency suffix.
    pub fn price(&self, price: foodcart_core::Price) -> String {
        price.display_with(&self.config.cart.currency_suffix)
    }
}

fn resolve(cwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

/// Get the platform-specific data directory.
fn dirs_path() -> PathBuf {
    if let Some(home) = std::env::var_os("HOME") {
        PathBuf::from(home).join(".local").join("share")
    } else {
        PathBuf::from("/tmp")
    }
}
