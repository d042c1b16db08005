//! Reading and writing discounting configuration.
//!
//! Files are TOML or JSON, chosen by extension:
//!
//! ```toml
//! currency = "USD"
//! valuation_date = "2025-01-01"
//!
//! [curve]
//! name = "USD-DSC"
//! day_count = "ACT/365F"
//! compounding_per_year = 2
//!
//! [[curve.nodes]]
//! tenor = 1.0
//! rate = 0.03
//!
//! [[curve.nodes]]
//! tenor = 5.0
//! rate = 0.035
//! ```

use std::path::Path;

use tracing::{debug, info};

use crate::discounting::DiscountingConfig;
use crate::error::{ConfigError, ConfigResult};

/// Supported configuration file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// TOML (`.toml`)
    Toml,
    /// JSON (`.json`)
    Json,
}

impl ConfigFormat {
    /// Picks the format from a file extension, ignoring case.
    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("toml") => Ok(ConfigFormat::Toml),
            Some("json") => Ok(ConfigFormat::Json),
            _ => Err(ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

impl DiscountingConfig {
    /// Parses a configuration from TOML.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Parses a configuration from JSON.
    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Parses a configuration in the given format.
    pub fn from_str_as(content: &str, format: ConfigFormat) -> ConfigResult<Self> {
        match format {
            ConfigFormat::Toml => Self::from_toml_str(content),
            ConfigFormat::Json => Self::from_json_str(content),
        }
    }

    /// Loads a configuration file, choosing the format by extension.
    ///
    /// The file is only parsed; call
    /// [`build_model`](DiscountingConfig::build_model) to validate and build.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        debug!(path = %path.display(), ?format, "loading discounting configuration");

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_str_as(&content, format)?;

        info!(
            path = %path.display(),
            currency = %config.currency,
            curve = %config.curve.name,
            "loaded discounting configuration"
        );
        Ok(config)
    }

    /// Serializes the configuration as TOML.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string(self)?)
    }

    /// Serializes the configuration as pretty-printed JSON.
    pub fn to_json_string(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
