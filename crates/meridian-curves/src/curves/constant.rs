//! Constant curve.

use serde::{Deserialize, Serialize};

use crate::error::{CurveError, CurveResult};
use crate::metadata::CurveMetadata;
use crate::sensitivity::CurveUnitParameterSensitivity;
use crate::traits::Curve;

/// A curve with the same y-value everywhere.
///
/// The value is the curve's only parameter, so its sensitivity is always `[1.0]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ConstantCurveData")]
pub struct ConstantCurve {
    metadata: CurveMetadata,
    value: f64,
}

#[derive(Deserialize)]
struct ConstantCurveData {
    metadata: CurveMetadata,
    value: f64,
}

impl TryFrom<ConstantCurveData> for ConstantCurve {
    type Error = CurveError;

    fn try_from(data: ConstantCurveData) -> Result<Self, Self::Error> {
        Self::new(data.metadata, data.value)
    }
}

impl ConstantCurve {
    /// Creates a constant curve.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidValue`] if `value` is NaN or infinite.
    pub fn new(metadata: CurveMetadata, value: f64) -> CurveResult<Self> {
        if !value.is_finite() {
            return Err(CurveError::invalid_value(format!(
                "curve '{}' has non-finite value {value}",
                metadata.curve_name()
            )));
        }
        Ok(Self { metadata, value })
    }

    /// Returns the constant value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns a copy with a different value.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidValue`] if `value` is NaN or infinite.
    pub fn with_value(&self, value: f64) -> CurveResult<Self> {
        Self::new(self.metadata.clone(), value)
    }
}

impl Curve for ConstantCurve {
    fn metadata(&self) -> &CurveMetadata {
        &self.metadata
    }

    fn parameter_count(&self) -> usize {
        1
    }

    fn y_value(&self, _x: f64) -> f64 {
        self.value
    }

    fn y_value_parameter_sensitivity(&self, _x: f64) -> CurveUnitParameterSensitivity {
        CurveUnitParameterSensitivity::new(self.metadata.curve_name().clone(), vec![1.0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meridian_core::daycounts::DayCountConvention;

    #[test]
    fn test_constant_curve() {
        let curve = ConstantCurve::new(
            CurveMetadata::zero_rates("FLAT", DayCountConvention::Act360)
                .with_compounding_per_year(1),
            0.025,
        )
        .unwrap();

        assert_eq!(curve.y_value(-3.0), 0.025);
        assert_eq!(curve.y_value(40.0), 0.025);
        assert_eq!(curve.parameter_count(), 1);
        assert_eq!(curve.name().as_str(), "FLAT");

        let sens = curve.y_value_parameter_sensitivity(12.0);
        assert_eq!(sens.sensitivity(), &[1.0]);
        assert_eq!(sens.curve_name(), curve.name());
    }

    #[test]
    fn test_with_value_keeps_metadata() {
        let metadata = CurveMetadata::zero_rates("FLAT", DayCountConvention::Act360);
        let curve = ConstantCurve::new(metadata, 0.01).unwrap();
        let moved = curve.with_value(0.02).unwrap();
        assert_eq!(moved.value(), 0.02);
        assert_eq!(moved.metadata(), curve.metadata());
        assert!(curve.with_value(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_non_finite_value_rejected() {
        let metadata = CurveMetadata::zero_rates("BAD", DayCountConvention::Act360);
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                ConstantCurve::new(metadata.clone(), value),
                Err(CurveError::InvalidValue { .. })
            ));
        }
    }

    #[test]
    fn test_deserialize_validates() {
        let metadata = CurveMetadata::zero_rates("FLAT", DayCountConvention::Act360);
        let curve = ConstantCurve::new(metadata, 0.02).unwrap();
        let json = serde_json::to_string(&curve).unwrap();
        assert_eq!(serde_json::from_str::<ConstantCurve>(&json).unwrap(), curve);

        // a value outside the f64 range is rejected
        let bad = json.replace("0.02", "1e400");
        assert!(serde_json::from_str::<ConstantCurve>(&bad).is_err());
    }
}
