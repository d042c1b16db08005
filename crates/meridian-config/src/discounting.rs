//! Discounting configuration types.
//!
//! A [`DiscountingConfig`] describes one discount curve model: the currency,
//! the valuation date and the zero-rate curve as a list of (tenor, rate)
//! nodes. Curve metadata that the model checks (day count, compounding
//! frequency, axis value types) is carried through unchanged, so a bad
//! configuration fails with the model's own error.

use std::sync::Arc;

use meridian_core::daycounts::DayCountConvention;
use meridian_core::{Currency, Date};
use meridian_curves::{CurveMetadata, DiscountCurveModel, InterpolatedNodalCurve, ValueType};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{ConfigResult, Validate, ValidationError};

fn default_x_value_type() -> ValueType {
    ValueType::YearFraction
}

fn default_y_value_type() -> ValueType {
    ValueType::ZeroRate
}

/// A single curve node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodeConfig {
    /// Time to the node in years.
    pub tenor: f64,
    /// Zero rate at the node.
    pub rate: f64,
}

impl NodeConfig {
    /// Creates a node.
    #[must_use]
    pub fn new(tenor: f64, rate: f64) -> Self {
        Self { tenor, rate }
    }
}

/// Configuration for a zero-rate curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveConfig {
    /// Curve name.
    pub name: String,

    /// Day count placing dates on the curve.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_count: Option<DayCountConvention>,

    /// Compounding periods per year of the rates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compounding_per_year: Option<i32>,

    /// What the node tenors represent.
    #[serde(default = "default_x_value_type")]
    pub x_value_type: ValueType,

    /// What the node rates represent.
    #[serde(default = "default_y_value_type")]
    pub y_value_type: ValueType,

    /// Curve nodes in increasing tenor order.
    #[serde(default)]
    pub nodes: Vec<NodeConfig>,
}

impl CurveConfig {
    /// Creates an empty zero-rate curve configuration.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            day_count: None,
            compounding_per_year: None,
            x_value_type: default_x_value_type(),
            y_value_type: default_y_value_type(),
            nodes: Vec::new(),
        }
    }

    /// Sets the day count.
    #[must_use]
    pub fn with_day_count(mut self, day_count: DayCountConvention) -> Self {
        self.day_count = Some(day_count);
        self
    }

    /// Sets the compounding frequency.
    #[must_use]
    pub fn with_compounding_per_year(mut self, periods: i32) -> Self {
        self.compounding_per_year = Some(periods);
        self
    }

    /// Appends a node.
    #[must_use]
    pub fn with_node(mut self, tenor: f64, rate: f64) -> Self {
        self.nodes.push(NodeConfig::new(tenor, rate));
        self
    }

    /// Returns the curve metadata described by this configuration.
    #[must_use]
    pub fn metadata(&self) -> CurveMetadata {
        let mut metadata =
            CurveMetadata::new(self.name.as_str(), self.x_value_type, self.y_value_type);
        if let Some(day_count) = self.day_count {
            metadata = metadata.with_day_count(day_count);
        }
        if let Some(periods) = self.compounding_per_year {
            metadata = metadata.with_compounding_per_year(periods);
        }
        metadata
    }

    /// Builds the curve.
    ///
    /// # Errors
    ///
    /// Returns a validation error for malformed nodes, or the curve's own
    /// construction error.
    pub fn build_curve(&self) -> ConfigResult<InterpolatedNodalCurve> {
        self.validate_or_error()?;
        let (tenors, rates): (Vec<f64>, Vec<f64>) =
            self.nodes.iter().map(|n| (n.tenor, n.rate)).unzip();
        Ok(InterpolatedNodalCurve::new(self.metadata(), tenors, rates)?)
    }
}

impl Validate for CurveConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(ValidationError::new("name", "curve name must not be empty"));
        }

        if self.nodes.is_empty() {
            errors.push(ValidationError::with_rule(
                "nodes",
                "at least one node is required",
                "non_empty",
            ));
        }

        for (i, node) in self.nodes.iter().enumerate() {
            if !node.tenor.is_finite() {
                errors.push(ValidationError::new(
                    format!("nodes[{i}].tenor"),
                    "tenor must be finite",
                ));
            }
            if !node.rate.is_finite() {
                errors.push(ValidationError::new(
                    format!("nodes[{i}].rate"),
                    "rate must be finite",
                ));
            }
        }

        for (i, pair) in self.nodes.windows(2).enumerate() {
            if pair[1].tenor <= pair[0].tenor {
                errors.push(ValidationError::with_rule(
                    format!("nodes[{}].tenor", i + 1),
                    format!("tenor {} does not follow {}", pair[1].tenor, pair[0].tenor),
                    "strictly_increasing",
                ));
            }
        }

        errors
    }
}

/// Configuration for a discount curve model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscountingConfig {
    /// Currency of the discount factors.
    pub currency: Currency,

    /// Valuation date, `YYYY-MM-DD`.
    pub valuation_date: Date,

    /// The zero-rate curve.
    pub curve: CurveConfig,
}

impl DiscountingConfig {
    /// Creates a configuration.
    #[must_use]
    pub fn new(currency: Currency, valuation_date: Date, curve: CurveConfig) -> Self {
        Self {
            currency,
            valuation_date,
            curve,
        }
    }

    /// Builds the discount curve model.
    ///
    /// # Errors
    ///
    /// Returns a validation error for malformed configuration, or
    /// [`ConfigError::Curve`](crate::ConfigError::Curve) when the curve or
    /// model rejects it.
    pub fn build_model(&self) -> ConfigResult<DiscountCurveModel<InterpolatedNodalCurve>> {
        self.validate_or_error()?;
        let curve = self.curve.build_curve()?;
        let model = DiscountCurveModel::new(self.currency, self.valuation_date, Arc::new(curve))?;

        info!(
            currency = %self.currency,
            valuation_date = %self.valuation_date,
            curve = %self.curve.name,
            nodes = self.curve.nodes.len(),
            "built discount curve model from configuration"
        );
        Ok(model)
    }
}

impl Validate for DiscountingConfig {
    fn validate(&self) -> Vec<ValidationError> {
        self.curve
            .validate()
            .into_iter()
            .map(|err| err.nested_in("curve"))
            .collect()
    }
}
