//! Error types for curve and discounting operations.
//!
//! Construction-time validation failures and call-time argument errors each
//! have their own variant so callers can match on exactly what went wrong.

use thiserror::Error;

use crate::metadata::CurveName;
use crate::value_type::ValueType;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Error types for curve operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// A required builder input was not supplied.
    #[error("Missing required field: {field}")]
    MissingField {
        /// Name of the missing field.
        field: &'static str,
    },

    /// The curve's y-axis does not hold the expected kind of value.
    #[error("Incorrect y-value type for curve '{curve}': expected {expected}, got {got}")]
    IncorrectYValueType {
        /// Name of the offending curve.
        curve: CurveName,
        /// Expected value type.
        expected: ValueType,
        /// Actual value type.
        got: ValueType,
    },

    /// The curve's x-axis does not hold the expected kind of value.
    #[error("Incorrect x-value type for curve '{curve}': expected {expected}, got {got}")]
    IncorrectXValueType {
        /// Name of the offending curve.
        curve: CurveName,
        /// Expected value type.
        expected: ValueType,
        /// Actual value type.
        got: ValueType,
    },

    /// Curve metadata does not declare a day count.
    #[error("Incorrect curve metadata for '{curve}': missing day count")]
    MissingDayCount {
        /// Name of the offending curve.
        curve: CurveName,
    },

    /// Curve metadata does not declare a compounding frequency.
    #[error("Compounding per year must be present for periodically compounded curve '{curve}'")]
    MissingCompoundingPerYear {
        /// Name of the offending curve.
        curve: CurveName,
    },

    /// Curve metadata declares a compounding frequency that is zero or negative.
    #[error("Compounding per year must be positive for curve '{curve}', got {value}")]
    NonPositiveCompoundingPerYear {
        /// Name of the offending curve.
        curve: CurveName,
        /// The declared value.
        value: i32,
    },

    /// A periods-per-year argument is zero or negative.
    #[error("Periods per year must be positive, got {value}")]
    NonPositivePeriodsPerYear {
        /// The supplied value.
        value: i32,
    },

    /// A metadata entry requested with `CurveMetadata::info` is absent.
    #[error("Curve '{curve}' has no '{key}' metadata")]
    MissingInfo {
        /// Name of the curve.
        curve: CurveName,
        /// Name of the metadata key.
        key: &'static str,
    },

    /// Not enough nodes to define the curve.
    #[error("Insufficient points: need at least {required}, got {got}")]
    InsufficientPoints {
        /// Minimum required points.
        required: usize,
        /// Actual number of points provided.
        got: usize,
    },

    /// Two sequences that must line up have different lengths.
    #[error("Length mismatch for {what}: expected {expected}, got {got}")]
    LengthMismatch {
        /// What was being compared.
        what: &'static str,
        /// Expected length.
        expected: usize,
        /// Actual length.
        got: usize,
    },

    /// Node x-values are not strictly increasing.
    #[error("Non-monotonic nodes at index {index}: {prev:.6} >= {current:.6}")]
    NonMonotonicNodes {
        /// Index where monotonicity violation occurred.
        index: usize,
        /// Previous x-value.
        prev: f64,
        /// Current x-value.
        current: f64,
    },

    /// Invalid value (NaN, Inf, or domain error).
    #[error("Invalid value: {reason}")]
    InvalidValue {
        /// Description of why value is invalid.
        reason: String,
    },
}

impl CurveError {
    /// Creates a missing field error.
    #[must_use]
    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    /// Creates an insufficient points error.
    #[must_use]
    pub fn insufficient_points(required: usize, got: usize) -> Self {
        Self::InsufficientPoints { required, got }
    }

    /// Creates a length mismatch error.
    #[must_use]
    pub fn length_mismatch(what: &'static str, expected: usize, got: usize) -> Self {
        Self::LengthMismatch {
            what,
            expected,
            got,
        }
    }

    /// Creates a non-monotonic nodes error.
    #[must_use]
    pub fn non_monotonic_nodes(index: usize, prev: f64, current: f64) -> Self {
        Self::NonMonotonicNodes {
            index,
            prev,
            current,
        }
    }

    /// Creates an invalid value error.
    #[must_use]
    pub fn invalid_value(reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            reason: reason.into(),
        }
    }

    /// Returns true if this error comes from validating a curve's metadata.
    #[must_use]
    pub fn is_metadata_error(&self) -> bool {
        matches!(
            self,
            Self::IncorrectYValueType { .. }
                | Self::IncorrectXValueType { .. }
                | Self::MissingDayCount { .. }
                | Self::MissingCompoundingPerYear { .. }
                | Self::NonPositiveCompoundingPerYear { .. }
                | Self::MissingInfo { .. }
        )
    }
}
