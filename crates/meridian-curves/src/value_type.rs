//! Value type definitions for curve axes.
//!
//! A curve's metadata states what its x-values and y-values represent. The
//! discounting model only accepts curves mapping year fractions to zero rates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Describes what the values on one axis of a curve represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ValueType {
    /// Time measured in years from the valuation date.
    YearFraction,
    /// Zero-coupon rate.
    ZeroRate,
    /// Discount factor: P(t) with P(0) = 1.
    DiscountFactor,
    /// Forward rate.
    ForwardRate,
    /// Unspecified.
    #[default]
    Unknown,
}

impl ValueType {
    /// Returns a short name for display purposes.
    #[must_use]
    pub fn short_name(&self) -> &'static str {
        match self {
            ValueType::YearFraction => "YF",
            ValueType::ZeroRate => "Zero",
            ValueType::DiscountFactor => "DF",
            ValueType::ForwardRate => "Fwd",
            ValueType::Unknown => "?",
        }
    }

    /// Returns true if this is a rate-based value type.
    #[must_use]
    pub fn is_rate_type(&self) -> bool {
        matches!(self, ValueType::ZeroRate | ValueType::ForwardRate)
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueType::YearFraction => "Year Fraction",
            ValueType::ZeroRate => "Zero Rate",
            ValueType::DiscountFactor => "Discount Factor",
            ValueType::ForwardRate => "Forward Rate",
            ValueType::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_type_display() {
        assert_eq!(ValueType::YearFraction.to_string(), "Year Fraction");
        assert_eq!(ValueType::ZeroRate.to_string(), "Zero Rate");
        assert_eq!(ValueType::default(), ValueType::Unknown);
    }

    #[test]
    fn test_predicates() {
        assert!(ValueType::ZeroRate.is_rate_type());
        assert!(!ValueType::DiscountFactor.is_rate_type());
        assert_eq!(ValueType::DiscountFactor.short_name(), "DF");
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&ValueType::ZeroRate).unwrap();
        let parsed: ValueType = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, ValueType::ZeroRate);
    }
}
