//! # Configuration State
//!
//! Client configuration loaded once at startup.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     VELA_API_BASE_URL=http://localhost:3000/api/v1                     │
//! │     VELA_PAGE_SIZE=20                                                  │
//! │     VELA_FEATURED_LIMIT=30                                             │
//! │     VELA_REQUEST_TIMEOUT_SECS=10                                       │
//! │     VELA_CURRENCY_SYMBOL=€                                             │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/vela-shop/client.toml (Linux)                            │
//! │     ~/Library/Application Support/com.vela.vela-shop/client.toml (macOS)│
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     public catalog API, page size 10, three shipping options, "$"      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [catalog]
//! base_url = "https://api.escuelajs.co/api/v1"
//! page_size = 10
//! featured_limit = 30
//! request_timeout_secs = 30
//!
//! [[checkout.shipping_methods]]
//! id = "free"
//! name = "Free"
//! price_cents = 0
//! delivery_time = "Delivery from 3 to 7 business days"
//!
//! [display]
//! currency_symbol = "$"
//! currency_decimals = 2
//! ```
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};
use vela_catalog::{CatalogConfig, CatalogError};
use vela_core::money::Money;
use vela_core::types::ShippingMethod;

// =============================================================================
// Errors
// =============================================================================

/// Configuration loading failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// Sections
// =============================================================================

/// One delivery option as written in `client.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingMethodConfig {
    pub id: String,
    pub name: String,
    pub price_cents: i64,
    pub delivery_time: String,
}

impl From<&ShippingMethodConfig> for ShippingMethod {
    fn from(config: &ShippingMethodConfig) -> Self {
        ShippingMethod::new(
            config.id.clone(),
            config.name.clone(),
            Money::from_cents(config.price_cents),
            config.delivery_time.clone(),
        )
    }
}

impl From<ShippingMethod> for ShippingMethodConfig {
    fn from(method: ShippingMethod) -> Self {
        ShippingMethodConfig {
            id: method.id,
            name: method.name,
            price_cents: method.unit_price.cents(),
            delivery_time: method.delivery_time,
        }
    }
}

/// `[checkout]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutConfig {
    #[serde(default = "default_shipping_methods")]
    pub shipping_methods: Vec<ShippingMethodConfig>,
}

fn default_shipping_methods() -> Vec<ShippingMethodConfig> {
    ShippingMethod::default_options()
        .into_iter()
        .map(ShippingMethodConfig::from)
        .collect()
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        CheckoutConfig {
            shipping_methods: default_shipping_methods(),
        }
    }
}

/// `[display]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    #[serde(default = "default_currency_decimals")]
    pub currency_decimals: u8,
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_currency_decimals() -> u8 {
    2
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            currency_symbol: default_currency_symbol(),
            currency_decimals: default_currency_decimals(),
        }
    }
}

// =============================================================================
// Client Configuration
// =============================================================================

/// Complete client configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub checkout: CheckoutConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

impl ClientConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`config_path`, or client.toml in the platform config dir)
    /// 3. Environment variables
    /// 4. Validation
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading client config from file");
                config = Self::from_file(&path)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Parses a TOML file. Missing sections and keys take their defaults.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Applies `VELA_*` overrides read through `lookup`.
    ///
    /// Values that do not parse are ignored with a warning.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("VELA_API_BASE_URL") {
            debug!(url = %url, "Overriding catalog URL from environment");
            self.catalog.base_url = url;
        }

        if let Some(raw) = lookup("VELA_PAGE_SIZE") {
            match raw.parse() {
                Ok(size) => self.catalog.page_size = size,
                Err(_) => warn!(value = %raw, "Ignoring invalid VELA_PAGE_SIZE"),
            }
        }

        if let Some(raw) = lookup("VELA_FEATURED_LIMIT") {
            match raw.parse() {
                Ok(limit) => self.catalog.featured_limit = limit,
                Err(_) => warn!(value = %raw, "Ignoring invalid VELA_FEATURED_LIMIT"),
            }
        }

        if let Some(raw) = lookup("VELA_REQUEST_TIMEOUT_SECS") {
            match raw.parse() {
                Ok(secs) => self.catalog.request_timeout_secs = secs,
                Err(_) => warn!(value = %raw, "Ignoring invalid VELA_REQUEST_TIMEOUT_SECS"),
            }
        }

        if let Some(symbol) = lookup("VELA_CURRENCY_SYMBOL") {
            self.display.currency_symbol = symbol;
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        self.catalog.validate()?;

        let methods = &self.checkout.shipping_methods;
        if methods.is_empty() {
            return Err(ConfigError::Invalid(
                "at least one shipping method is required".into(),
            ));
        }

        let mut seen = HashSet::new();
        for method in methods {
            if method.id.trim().is_empty() {
                return Err(ConfigError::Invalid("shipping method id is empty".into()));
            }
            if !seen.insert(method.id.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate shipping method id: {}",
                    method.id
                )));
            }
            if method.price_cents < 0 {
                return Err(ConfigError::Invalid(format!(
                    "shipping method {} has a negative price",
                    method.id
                )));
            }
        }

        if self.display.currency_decimals > 4 {
            return Err(ConfigError::Invalid(
                "currency_decimals must be at most 4".into(),
            ));
        }

        Ok(())
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "vela", "vela-shop")
            .map(|dirs| dirs.config_dir().join("client.toml"))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    /// Shipping options in configured order.
    pub fn shipping_methods(&self) -> Vec<ShippingMethod> {
        self.checkout
            .shipping_methods
            .iter()
            .map(ShippingMethod::from)
            .collect()
    }

    pub fn shipping_method(&self, id: &str) -> Option<ShippingMethod> {
        self.checkout
            .shipping_methods
            .iter()
            .find(|m| m.id == id)
            .map(ShippingMethod::from)
    }

    /// Formats a cent amount as a currency string.
    ///
    /// Amounts are always cents. `currency_decimals` only changes how many
    /// digits are shown: fewer than two rounds half away from zero, more
    /// than two pads with zeros.
    ///
    /// ## Example
    /// ```rust
    /// use vela_client::state::ClientConfig;
    ///
    /// let config = ClientConfig::default();
    /// assert_eq!(config.format_currency(1234), "$12.34");
    /// ```
    pub fn format_currency(&self, cents: i64) -> String {
        let decimals = u32::from(self.display.currency_decimals);
        let abs = u128::from(cents.unsigned_abs());

        let minor = if decimals >= 2 {
            abs * 10_u128.pow(decimals - 2)
        } else {
            let divisor = 10_u128.pow(2 - decimals);
            (abs + divisor / 2) / divisor
        };
        let scale = 10_u128.pow(decimals);
        let whole = minor / scale;
        let frac = minor % scale;

        format!(
            "{}{}{}",
            if cents < 0 && minor > 0 { "-" } else { "" },
            self.display.currency_symbol,
            if decimals > 0 {
                format!("{}.{:0width$}", whole, frac, width = decimals as usize)
            } else {
                whole.to_string()
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_are_valid() {
        let config = ClientConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.catalog.page_size, 10);
        assert_eq!(config.shipping_methods().len(), 3);
        assert_eq!(
            config.shipping_method("standard").map(|m| m.unit_price.cents()),
            Some(990)
        );
        assert_eq!(config.shipping_method("teleport"), None);
    }

    #[test]
    fn test_format_currency() {
        let config = ClientConfig::default();
        assert_eq!(config.format_currency(1234), "$12.34");
        assert_eq!(config.format_currency(990), "$9.90");
        assert_eq!(config.format_currency(0), "$0.00");
        assert_eq!(config.format_currency(-1234), "-$12.34");
    }

    #[test]
    fn test_format_currency_without_decimals() {
        let mut config = ClientConfig::default();
        config.display.currency_symbol = "¥".to_string();
        config.display.currency_decimals = 0;
        assert_eq!(config.format_currency(1500), "¥15");
        assert_eq!(config.format_currency(3490), "¥35");
        assert_eq!(config.format_currency(-49), "¥0");
        assert_eq!(config.format_currency(-150), "-¥2");
    }

    #[test]
    fn test_format_currency_rescales_from_cents() {
        let mut config = ClientConfig::default();

        config.display.currency_decimals = 3;
        assert_eq!(config.format_currency(3490), "$34.900");

        config.display.currency_decimals = 4;
        assert_eq!(config.format_currency(5), "$0.0500");

        config.display.currency_decimals = 1;
        assert_eq!(config.format_currency(3444), "$34.4");
        assert_eq!(config.format_currency(3445), "$34.5");

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_toml_partial() {
        let config = ClientConfig::from_toml(
            r#"
            [catalog]
            base_url = "http://localhost:3000/api/v1"

            [[checkout.shipping_methods]]
            id = "pickup"
            name = "Pick up"
            price_cents = 0
            delivery_time = "Ready tomorrow"
            "#,
        )
        .unwrap();

        assert_eq!(config.catalog.base_url, "http://localhost:3000/api/v1");
        assert_eq!(config.catalog.featured_limit, 30);
        assert_eq!(config.shipping_methods().len(), 1);
        assert_eq!(config.display.currency_symbol, "$");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_toml_rejects_garbage() {
        assert!(matches!(
            ClientConfig::from_toml("catalog = ["),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("VELA_API_BASE_URL", "http://127.0.0.1:9000"),
            ("VELA_PAGE_SIZE", "25"),
            ("VELA_FEATURED_LIMIT", "not-a-number"),
            ("VELA_CURRENCY_SYMBOL", "€"),
        ]
        .into_iter()
        .collect();

        let mut config = ClientConfig::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.catalog.base_url, "http://127.0.0.1:9000");
        assert_eq!(config.catalog.page_size, 25);
        assert_eq!(config.catalog.featured_limit, 30);
        assert_eq!(config.format_currency(250), "€2.50");
    }

    #[test]
    fn test_validation_failures() {
        let mut config = ClientConfig::default();
        config.checkout.shipping_methods.clear();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = ClientConfig::default();
        let duplicate = config.checkout.shipping_methods[0].clone();
        config.checkout.shipping_methods.push(duplicate);
        assert!(config.validate().is_err());

        let mut config = ClientConfig::default();
        config.checkout.shipping_methods[1].price_cents = -1;
        assert!(config.validate().is_err());

        let mut config = ClientConfig::default();
        config.catalog.base_url = "nope".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Catalog(_))));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("vela-client-test-missing.toml");
        let config = ClientConfig::load(Some(path)).unwrap();
        assert_eq!(config.checkout.shipping_methods.len(), 3);
    }
}
