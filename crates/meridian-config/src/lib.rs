//! Meridian Configuration Layer
//!
//! This crate builds discount curve models from configuration files.
//!
//! # Features
//!
//! - **Configuration Types**: [`DiscountingConfig`], [`CurveConfig`] and [`NodeConfig`]
//! - **Formats**: TOML and JSON, picked by file extension in [`DiscountingConfig::load`]
//! - **Validation**: structural checks through the [`Validate`] trait; curve
//!   metadata checks are left to the model and reported as [`ConfigError::Curve`]
//!
//! # Example
//!
//! ```rust
//! use meridian_config::DiscountingConfig;
//! use meridian_core::Date;
//! use meridian_curves::DiscountFactors;
//!
//! let config = DiscountingConfig::from_toml_str(r#"
//!     currency = "USD"
//!     valuation_date = "2025-01-01"
//!
//!     [curve]
//!     name = "USD-DSC"
//!     day_count = "ACT/365F"
//!     compounding_per_year = 2
//!
//!     [[curve.nodes]]
//!     tenor = 1.0
//!     rate = 0.03
//! "#)?;
//!
//! let model = config.build_model()?;
//! let df = model.discount_factor(Date::from_ymd(2026, 1, 1)?);
//! assert!((df - 0.970_662).abs() < 1e-6);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod discounting;
pub mod error;
pub mod loader;

pub use discounting::{CurveConfig, DiscountingConfig, NodeConfig};
pub use error::{ConfigError, ConfigResult, Validate, ValidationError};
pub use loader::ConfigFormat;
