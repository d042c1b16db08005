//! Core traits for zero-rate curves.
//!
//! This module defines the [`Curve`] capability consumed by the discounting
//! model: evaluate the curve at a year fraction, report how that value moves
//! with each curve parameter, and expose the curve's metadata.

use std::fmt::Debug;

use crate::error::CurveResult;
use crate::metadata::{CurveMetadata, CurveName};
use crate::perturbation::Perturbation;
use crate::sensitivity::CurveUnitParameterSensitivity;

/// A parameterised curve mapping an x-value to a y-value.
///
/// For discounting the x-axis is the year fraction from the valuation date
/// and the y-axis is the zero rate. Implementations must be immutable once
/// built; every "modification" produces a new curve.
///
/// # Required Methods
///
/// - [`metadata`](Curve::metadata): name, axis value types and info entries
/// - [`parameter_count`](Curve::parameter_count): number of curve parameters
/// - [`y_value`](Curve::y_value): the curve value at `x`
/// - [`y_value_parameter_sensitivity`](Curve::y_value_parameter_sensitivity):
///   the derivative of `y_value(x)` with respect to each parameter
///
/// # Example
///
/// ```rust
/// use meridian_core::daycounts::DayCountConvention;
/// use meridian_curves::prelude::*;
///
/// fn rate_at<C: Curve>(curve: &C, t: f64) -> f64 {
///     curve.y_value(t)
/// }
///
/// let metadata = CurveMetadata::zero_rates("FLAT", DayCountConvention::Act365Fixed);
/// let curve = ConstantCurve::new(metadata, 0.04)?;
/// assert_eq!(rate_at(&curve, 7.5), 0.04);
/// # Ok::<(), CurveError>(())
/// ```
pub trait Curve: Send + Sync + Debug {
    /// Returns the curve metadata.
    fn metadata(&self) -> &CurveMetadata;

    /// Returns the curve name.
    fn name(&self) -> &CurveName {
        self.metadata().curve_name()
    }

    /// Returns the number of parameters defining the curve.
    fn parameter_count(&self) -> usize;

    /// Returns the y-value at `x`.
    fn y_value(&self, x: f64) -> f64;

    /// Returns the sensitivity of `y_value(x)` to each curve parameter.
    ///
    /// The result has `parameter_count()` entries, in parameter order.
    fn y_value_parameter_sensitivity(&self, x: f64) -> CurveUnitParameterSensitivity;

    /// Applies a perturbation, producing a new curve.
    fn apply_perturbation<P>(&self, perturbation: &P) -> CurveResult<Self>
    where
        Self: Sized,
        P: Perturbation<Self> + ?Sized,
    {
        perturbation.apply_to(self)
    }
}

impl<C: Curve + ?Sized> Curve for &C {
    fn metadata(&self) -> &CurveMetadata {
        (**self).metadata()
    }

    fn parameter_count(&self) -> usize {
        (**self).parameter_count()
    }

    fn y_value(&self, x: f64) -> f64 {
        (**self).y_value(x)
    }

    fn y_value_parameter_sensitivity(&self, x: f64) -> CurveUnitParameterSensitivity {
        (**self).y_value_parameter_sensitivity(x)
    }
}

impl<C: Curve + ?Sized> Curve for Box<C> {
    fn metadata(&self) -> &CurveMetadata {
        (**self).metadata()
    }

    fn parameter_count(&self) -> usize {
        (**self).parameter_count()
    }

    fn y_value(&self, x: f64) -> f64 {
        (**self).y_value(x)
    }

    fn y_value_parameter_sensitivity(&self, x: f64) -> CurveUnitParameterSensitivity {
        (**self).y_value_parameter_sensitivity(x)
    }
}
