//! # Configuration State
//!
//! Storefront configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`ATELIER_*`)
//! 2. Config file (`storefront.toml`)
//! 3. Defaults (this file)
//!
//! ## Config File Format
//! ```toml
//! [store]
//! name = "Atelier"
//! currency_symbol = "$"
//! currency_decimals = 2
//!
//! [checkout]
//! shipping_cents = 999
//! tax_rate_bps = 800
//!
//! [payment]
//! delay_ms = 3000
//! ```
//!
//! ## Thread Safety
//! Configuration is read-only after startup, so no mutex is needed.

use std::path::{Path, PathBuf};
use std::time::Duration;

use atelier_core::checkout::{CheckoutRates, DEFAULT_SHIPPING, DEFAULT_TAX_RATE};
use atelier_core::{Money, TaxRate};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Env var naming an explicit config file path.
pub const CONFIG_PATH_ENV: &str = "ATELIER_CONFIG";

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// Sections
// =============================================================================

/// Shop identity and currency display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSettings {
    #[serde(default = "default_store_name")]
    pub name: String,

    #[serde(default = "default_currency_symbol", alias = "currency_symbol")]
    pub currency_symbol: String,

    /// Number of decimal places for currency
    #[serde(default = "default_currency_decimals", alias = "currency_decimals")]
    pub currency_decimals: u8,
}

fn default_store_name() -> String {
    "Atelier".to_string()
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_currency_decimals() -> u8 {
    2
}

impl Default for StoreSettings {
    fn default() -> Self {
        StoreSettings {
            name: default_store_name(),
            currency_symbol: default_currency_symbol(),
            currency_decimals: default_currency_decimals(),
        }
    }
}

/// Shipping and tax applied to every order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSettings {
    /// Flat shipping in cents
    #[serde(default = "default_shipping_cents", alias = "shipping_cents")]
    pub shipping_cents: i64,

    /// Sales tax in basis points (800 = 8%)
    #[serde(default = "default_tax_rate_bps", alias = "tax_rate_bps")]
    pub tax_rate_bps: u32,
}

fn default_shipping_cents() -> i64 {
    DEFAULT_SHIPPING.cents()
}

fn default_tax_rate_bps() -> u32 {
    DEFAULT_TAX_RATE.bps()
}

impl Default for CheckoutSettings {
    fn default() -> Self {
        CheckoutSettings {
            shipping_cents: default_shipping_cents(),
            tax_rate_bps: default_tax_rate_bps(),
        }
    }
}

/// Simulated payment behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSettings {
    /// How long the simulated processor "thinks" before approving.
    #[serde(default = "default_payment_delay", alias = "delay_ms")]
    pub delay_ms: u64,
}

fn default_payment_delay() -> u64 {
    3000
}

impl Default for PaymentSettings {
    fn default() -> Self {
        PaymentSettings {
            delay_ms: default_payment_delay(),
        }
    }
}

// =============================================================================
// Storefront Config
// =============================================================================

/// Complete storefront configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorefrontConfig {
    #[serde(default)]
    pub store: StoreSettings,

    #[serde(default)]
    pub checkout: CheckoutSettings,

    #[serde(default)]
    pub payment: PaymentSettings,
}

impl StorefrontConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file: `config_path`, else `$ATELIER_CONFIG`, else the
    ///    platform config dir. A missing file is not an error.
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let path = config_path
            .or_else(|| std::env::var(CONFIG_PATH_ENV).ok().map(PathBuf::from))
            .or_else(Self::default_config_path);

        let mut config = match path {
            Some(path) if path.exists() => {
                info!(?path, "Loading storefront config from file");
                Self::from_file(&path)?
            }
            Some(path) => {
                debug!(?path, "Config file not found, using defaults");
                Self::default()
            }
            None => Self::default(),
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Parses a TOML config file. Missing keys fall back to defaults.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&contents)?)
    }

    /// Applies `ATELIER_*` overrides.
    ///
    /// ## Variables
    /// - `ATELIER_STORE_NAME`: store name
    /// - `ATELIER_SHIPPING_CENTS`: flat shipping in cents
    /// - `ATELIER_TAX_RATE`: tax as a percentage (e.g. "8.25")
    /// - `ATELIER_PAYMENT_DELAY_MS`: simulated payment delay
    ///
    /// Unparseable numeric values are logged and ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(name) = lookup("ATELIER_STORE_NAME") {
            self.store.name = name;
        }

        if let Some(raw) = lookup("ATELIER_SHIPPING_CENTS") {
            match raw.trim().parse::<i64>() {
                Ok(cents) => self.checkout.shipping_cents = cents,
                Err(_) => warn!(value = %raw, "Ignoring invalid ATELIER_SHIPPING_CENTS"),
            }
        }

        if let Some(raw) = lookup("ATELIER_TAX_RATE") {
            match raw.trim().parse::<f64>() {
                Ok(pct) if pct.is_finite() && pct >= 0.0 => {
                    self.checkout.tax_rate_bps = TaxRate::from_percentage(pct).bps();
                }
                _ => warn!(value = %raw, "Ignoring invalid ATELIER_TAX_RATE"),
            }
        }

        if let Some(raw) = lookup("ATELIER_PAYMENT_DELAY_MS") {
            match raw.trim().parse::<u64>() {
                Ok(ms) => self.payment.delay_ms = ms,
                Err(_) => warn!(value = %raw, "Ignoring invalid ATELIER_PAYMENT_DELAY_MS"),
            }
        }
    }

    /// Checks value ranges.
    ///
    /// ## Rules
    /// - Shipping is not negative
    /// - Tax rate is at most 100% (10000 bps)
    /// - Currency uses at most 4 decimal places
    pub fn validate(&self) -> ConfigResult<()> {
        if self.checkout.shipping_cents < 0 {
            return Err(ConfigError::Invalid(format!(
                "shipping must not be negative (got {} cents)",
                self.checkout.shipping_cents
            )));
        }

        if self.checkout.tax_rate_bps > 10_000 {
            return Err(ConfigError::Invalid(format!(
                "tax rate must be between 0 and 10000 bps (got {})",
                self.checkout.tax_rate_bps
            )));
        }

        if self.store.currency_decimals > 4 {
            return Err(ConfigError::Invalid(format!(
                "currency decimals must be at most 4 (got {})",
                self.store.currency_decimals
            )));
        }

        Ok(())
    }

    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "atelier", "storefront")
            .map(|dirs| dirs.config_dir().join("storefront.toml"))
    }

    /// Shipping and tax as used by checkout math.
    pub fn rates(&self) -> CheckoutRates {
        CheckoutRates {
            shipping: Money::from_cents(self.checkout.shipping_cents),
            tax_rate: TaxRate::from_bps(self.checkout.tax_rate_bps),
        }
    }

    pub fn payment_delay(&self) -> Duration {
        Duration::from_millis(self.payment.delay_ms)
    }

    /// Formats a cent amount as a currency string.
    ///
    /// ## Example
    /// ```rust
    /// use storefront::state::StorefrontConfig;
    ///
    /// let config = StorefrontConfig::default();
    /// assert_eq!(config.format_currency(33291), "$332.91");
    /// ```
    pub fn format_currency(&self, cents: i64) -> String {
        let decimals = self.store.currency_decimals as u32;
        let divisor = 10_i64.pow(decimals);
        let whole = cents / divisor;
        let frac = (cents % divisor).abs();

        format!(
            "{}{}{}",
            if cents < 0 { "-" } else { "" },
            self.store.currency_symbol,
            if decimals > 0 {
                format!("{}.{:0width$}", whole.abs(), frac, width = decimals as usize)
            } else {
                whole.abs().to_string()
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_match_storefront_rates() {
        let config = StorefrontConfig::default();
        assert_eq!(config.rates(), CheckoutRates::default());
        assert_eq!(config.payment_delay(), Duration::from_secs(3));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_format_currency() {
        let config = StorefrontConfig::default();
        assert_eq!(config.format_currency(1234), "$12.34");
        assert_eq!(config.format_currency(1), "$0.01");
        assert_eq!(config.format_currency(0), "$0.00");
        assert_eq!(config.format_currency(-1234), "-$12.34");
    }

    #[test]
    fn test_format_currency_without_decimals() {
        let mut config = StorefrontConfig::default();
        config.store.currency_symbol = "¥".to_string();
        config.store.currency_decimals = 0;
        assert_eq!(config.format_currency(1500), "¥1500");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: StorefrontConfig = toml::from_str(
            r#"
            [checkout]
            tax_rate_bps = 1000

            [payment]
            delay_ms = 250
            "#,
        )
        .unwrap();

        assert_eq!(config.checkout.tax_rate_bps, 1000);
        assert_eq!(config.checkout.shipping_cents, 999);
        assert_eq!(config.payment.delay_ms, 250);
        assert_eq!(config.store.name, "Atelier");
    }

    #[test]
    fn test_env_overrides() {
        let mut config = StorefrontConfig::default();
        config.apply_overrides(lookup(&[
            ("ATELIER_STORE_NAME", "Maison"),
            ("ATELIER_SHIPPING_CENTS", "0"),
            ("ATELIER_TAX_RATE", "8.25"),
            ("ATELIER_PAYMENT_DELAY_MS", "10"),
        ]));

        assert_eq!(config.store.name, "Maison");
        assert_eq!(config.checkout.shipping_cents, 0);
        assert_eq!(config.checkout.tax_rate_bps, 825);
        assert_eq!(config.payment.delay_ms, 10);
    }

    #[test]
    fn test_invalid_env_overrides_are_ignored() {
        let mut config = StorefrontConfig::default();
        config.apply_overrides(lookup(&[
            ("ATELIER_SHIPPING_CENTS", "free"),
            ("ATELIER_TAX_RATE", "-3"),
            ("ATELIER_PAYMENT_DELAY_MS", "soon"),
        ]));

        assert_eq!(config, StorefrontConfig::default());
    }

    #[test]
    fn test_validation() {
        let mut config = StorefrontConfig::default();
        config.checkout.tax_rate_bps = 10_001;
        assert!(config.validate().is_err());

        let mut config = StorefrontConfig::default();
        config.checkout.shipping_cents = -1;
        assert!(config.validate().is_err());

        let mut config = StorefrontConfig::default();
        config.store.currency_decimals = 5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = StorefrontConfig::from_file(Path::new("/nonexistent/storefront.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
