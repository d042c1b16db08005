//! Interpolated nodal curve.
//!
//! An `InterpolatedNodalCurve` is defined by a set of (x, y) nodes. Values
//! between nodes are linearly interpolated and values outside the node range
//! are held flat at the nearest end node. Each y-value is a curve parameter.

use serde::{Deserialize, Serialize};

use crate::error::{CurveError, CurveResult};
use crate::metadata::CurveMetadata;
use crate::sensitivity::CurveUnitParameterSensitivity;
use crate::traits::Curve;

/// A curve defined by nodes, with linear interpolation and flat extrapolation.
///
/// # Example
///
/// ```rust
/// use meridian_core::daycounts::DayCountConvention;
/// use meridian_curves::prelude::*;
///
/// let metadata = CurveMetadata::zero_rates("USD-DSC", DayCountConvention::Act365Fixed)
///     .with_compounding_per_year(2);
/// let curve = InterpolatedNodalCurve::new(
///     metadata,
///     vec![1.0, 2.0, 5.0],
///     vec![0.030, 0.032, 0.035],
/// )?;
///
/// assert!((curve.y_value(1.5) - 0.031).abs() < 1e-12);
/// assert_eq!(curve.y_value(10.0), 0.035);
/// # Ok::<(), CurveError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "NodalCurveData")]
pub struct InterpolatedNodalCurve {
    metadata: CurveMetadata,
    x_values: Vec<f64>,
    y_values: Vec<f64>,
}

/// Unvalidated serialized form.
#[derive(Deserialize)]
struct NodalCurveData {
    metadata: CurveMetadata,
    x_values: Vec<f64>,
    y_values: Vec<f64>,
}

impl TryFrom<NodalCurveData> for InterpolatedNodalCurve {
    type Error = CurveError;

    fn try_from(data: NodalCurveData) -> Result<Self, Self::Error> {
        Self::new(data.metadata, data.x_values, data.y_values)
    }
}

impl InterpolatedNodalCurve {
    /// Creates a curve from nodes.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No nodes are provided
    /// - `x_values` and `y_values` have different lengths
    /// - Any value is NaN or infinite
    /// - `x_values` are not strictly increasing
    pub fn new(
        metadata: CurveMetadata,
        x_values: Vec<f64>,
        y_values: Vec<f64>,
    ) -> CurveResult<Self> {
        if x_values.is_empty() {
            return Err(CurveError::insufficient_points(1, 0));
        }

        if x_values.len() != y_values.len() {
            return Err(CurveError::length_mismatch(
                "y-values",
                x_values.len(),
                y_values.len(),
            ));
        }

        if let Some(bad) = x_values.iter().chain(&y_values).find(|v| !v.is_finite()) {
            return Err(CurveError::invalid_value(format!(
                "curve '{}' has non-finite node value {bad}",
                metadata.curve_name()
            )));
        }

        for (i, pair) in x_values.windows(2).enumerate() {
            if pair[1] <= pair[0] {
                return Err(CurveError::non_monotonic_nodes(i + 1, pair[0], pair[1]));
            }
        }

        Ok(Self {
            metadata,
            x_values,
            y_values,
        })
    }

    /// Returns the node x-values.
    #[must_use]
    pub fn x_values(&self) -> &[f64] {
        &self.x_values
    }

    /// Returns the node y-values.
    #[must_use]
    pub fn y_values(&self) -> &[f64] {
        &self.y_values
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.x_values.len()
    }

    /// Returns a curve with the same x-values and new y-values.
    pub fn with_y_values(&self, y_values: Vec<f64>) -> CurveResult<Self> {
        Self::new(self.metadata.clone(), self.x_values.clone(), y_values)
    }

    /// Returns a curve with every y-value moved by `amount`.
    pub fn shifted_by(&self, amount: f64) -> CurveResult<Self> {
        self.with_y_values(self.y_values.iter().map(|y| y + amount).collect())
    }

    /// Returns a copy with different metadata.
    #[must_use]
    pub fn with_metadata(&self, metadata: CurveMetadata) -> Self {
        Self {
            metadata,
            ..self.clone()
        }
    }

    /// Finds the two nodes bracketing `x` and the weight of the upper one.
    ///
    /// Outside the node range both indices are the end node and the weight is
    /// zero. `x` must not be NaN.
    fn locate(&self, x: f64) -> (usize, usize, f64) {
        let last = self.x_values.len() - 1;

        if x <= self.x_values[0] {
            return (0, 0, 0.0);
        }
        if x >= self.x_values[last] {
            return (last, last, 0.0);
        }

        let upper = self.x_values.partition_point(|&node| node <= x);
        let lower = upper - 1;
        let weight = (x - self.x_values[lower]) / (self.x_values[upper] - self.x_values[lower]);
        (lower, upper, weight)
    }
}

impl Curve for InterpolatedNodalCurve {
    fn metadata(&self) -> &CurveMetadata {
        &self.metadata
    }

    fn parameter_count(&self) -> usize {
        self.y_values.len()
    }

    fn y_value(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        let (lower, upper, weight) = self.locate(x);
        self.y_values[lower] * (1.0 - weight) + self.y_values[upper] * weight
    }

    fn y_value_parameter_sensitivity(&self, x: f64) -> CurveUnitParameterSensitivity {
        let mut sensitivity = vec![0.0; self.y_values.len()];
        if x.is_nan() {
            sensitivity.fill(f64::NAN);
        } else {
            let (lower, upper, weight) = self.locate(x);
            sensitivity[lower] += 1.0 - weight;
            sensitivity[upper] += weight;
        }
        CurveUnitParameterSensitivity::new(self.metadata.curve_name().clone(), sensitivity)
    }
}
