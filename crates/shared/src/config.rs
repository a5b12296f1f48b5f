//! Application configuration management.
//!
//! Reference tables (packing constants, rates, tile catalog) are static
//! configuration: the engine only reads them. Entries given here are layered
//! on top of the built-in tables in `tilebook-core`.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Reference tables.
    #[serde(default)]
    pub reference: ReferenceConfig,
    /// Ledger configuration.
    #[serde(default)]
    pub ledger: LedgerConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Reference tables supplied as static configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReferenceConfig {
    /// Extra or replacement pieces-per-box entries for inch sizes.
    #[serde(default)]
    pub inch_packing: Vec<PackingEntryConfig>,
    /// Pieces-per-box entries for centimetre sizes.
    #[serde(default)]
    pub metric_packing: Vec<PackingEntryConfig>,
    /// Model or series specific overrides of the inch table.
    #[serde(default)]
    pub inch_overrides: Vec<PackingOverrideConfig>,
    /// Model or series specific overrides of the centimetre table.
    #[serde(default)]
    pub metric_overrides: Vec<PackingOverrideConfig>,
    /// Per-model rates that win over the size default.
    #[serde(default)]
    pub special_rates: BTreeMap<String, Decimal>,
    /// Default rate per size key.
    #[serde(default)]
    pub default_rates: BTreeMap<String, Decimal>,
    /// Tile models offered for line entry.
    #[serde(default)]
    pub catalog: Vec<CatalogModelConfig>,
}

/// One size → pieces-per-box entry.
#[derive(Debug, Clone, Deserialize)]
pub struct PackingEntryConfig {
    /// Size key such as `24X24` or `60x60`.
    pub size: String,
    /// Pieces packed in one box.
    pub pieces_per_box: u32,
}

/// Packing override for a specific model or a model series at one size.
///
/// Exactly one of `model` or `series` must be set.
#[derive(Debug, Clone, Deserialize)]
pub struct PackingOverrideConfig {
    /// Size key the override applies to.
    pub size: String,
    /// Exact model name.
    #[serde(default)]
    pub model: Option<String>,
    /// Model name prefix identifying a series.
    #[serde(default)]
    pub series: Option<String>,
    /// Pieces packed in one box for matching models.
    pub pieces_per_box: u32,
}

/// Catalog entry for a tile model.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogModelConfig {
    /// Model name.
    pub model: String,
    /// Length (centimetres for metric models, inches otherwise).
    pub length: Decimal,
    /// Width.
    pub width: Decimal,
    /// Explicit size key; derived from the dimensions when absent.
    #[serde(default)]
    pub size: Option<String>,
}

/// Ledger configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LedgerConfig {
    /// Maximum number of parties held in the balance cache.
    #[serde(default = "default_balance_cache_capacity")]
    pub balance_cache_capacity: u64,
    /// Time-to-live of a cached party balance in seconds.
    #[serde(default = "default_balance_cache_ttl")]
    pub balance_cache_ttl_secs: u64,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            balance_cache_capacity: default_balance_cache_capacity(),
            balance_cache_ttl_secs: default_balance_cache_ttl(),
        }
    }
}

fn default_balance_cache_capacity() -> u64 {
    1_000
}

fn default_balance_cache_ttl() -> u64 {
    300 // 5 minutes
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Emit JSON lines instead of human readable output.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            json: false,
        }
    }
}

fn default_log_filter() -> String {
    "tilebook=info".to_string()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("TILEBOOK")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
