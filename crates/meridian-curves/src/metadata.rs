//! Curve identity and metadata.
//!
//! [`CurveMetadata`] carries the curve name, the value types of both axes and
//! a list of optional [`CurveInfo`] entries. Entries are looked up through
//! typed keys so the caller gets back a value of the right type:
//!
//! ```rust
//! use meridian_core::daycounts::DayCountConvention;
//! use meridian_curves::metadata::{CurveInfoType, CurveMetadata};
//!
//! let metadata = CurveMetadata::zero_rates("EUR-ESTR", DayCountConvention::Act360)
//!     .with_compounding_per_year(1);
//!
//! let dc: Option<DayCountConvention> = metadata.find_info(CurveInfoType::DAY_COUNT);
//! let n: Option<i32> = metadata.find_info(CurveInfoType::COMPOUNDING_PER_YEAR);
//! assert_eq!(dc, Some(DayCountConvention::Act360));
//! assert_eq!(n, Some(1));
//! ```

use std::fmt;

use meridian_core::daycounts::DayCountConvention;
use serde::{Deserialize, Serialize};

use crate::error::{CurveError, CurveResult};
use crate::value_type::ValueType;

/// Name identifying a curve.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurveName(String);

impl CurveName {
    /// Creates a curve name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurveName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CurveName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for CurveName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// An optional piece of curve metadata.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CurveInfo {
    /// Day count used to convert dates into the curve's year fractions.
    DayCount(DayCountConvention),
    /// Number of compounding periods per year of the curve's rates.
    CompoundingPerYear(i32),
}

impl CurveInfo {
    fn same_kind(&self, other: &CurveInfo) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

/// Typed key for looking up a [`CurveInfo`] entry.
pub struct CurveInfoType<T> {
    name: &'static str,
    extract: fn(&CurveInfo) -> Option<T>,
}

// Copy for every `T`: both fields are plain pointers.
impl<T> Clone for CurveInfoType<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for CurveInfoType<T> {}

impl<T> CurveInfoType<T> {
    /// Returns the key name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<T> fmt::Debug for CurveInfoType<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CurveInfoType").field(&self.name).finish()
    }
}

fn extract_day_count(info: &CurveInfo) -> Option<DayCountConvention> {
    match info {
        CurveInfo::DayCount(dc) => Some(*dc),
        CurveInfo::CompoundingPerYear(_) => None,
    }
}

fn extract_compounding_per_year(info: &CurveInfo) -> Option<i32> {
    match info {
        CurveInfo::CompoundingPerYear(n) => Some(*n),
        CurveInfo::DayCount(_) => None,
    }
}

impl CurveInfoType<DayCountConvention> {
    /// Key for the curve's day count convention.
    pub const DAY_COUNT: Self = Self {
        name: "DayCount",
        extract: extract_day_count,
    };
}

impl CurveInfoType<i32> {
    /// Key for the number of compounding periods per year.
    pub const COMPOUNDING_PER_YEAR: Self = Self {
        name: "CompoundingPerYear",
        extract: extract_compounding_per_year,
    };
}

/// Metadata describing a curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveMetadata {
    curve_name: CurveName,
    x_value_type: ValueType,
    y_value_type: ValueType,
    #[serde(default)]
    info: Vec<CurveInfo>,
}

impl CurveMetadata {
    /// Creates metadata with the given axis value types and no info entries.
    #[must_use]
    pub fn new(
        name: impl Into<CurveName>,
        x_value_type: ValueType,
        y_value_type: ValueType,
    ) -> Self {
        Self {
            curve_name: name.into(),
            x_value_type,
            y_value_type,
            info: Vec::new(),
        }
    }

    /// Creates metadata for a year-fraction to zero-rate curve with a day count.
    #[must_use]
    pub fn zero_rates(name: impl Into<CurveName>, day_count: DayCountConvention) -> Self {
        Self::new(name, ValueType::YearFraction, ValueType::ZeroRate).with_day_count(day_count)
    }

    /// Returns the curve name.
    #[must_use]
    pub fn curve_name(&self) -> &CurveName {
        &self.curve_name
    }

    /// Returns the x-axis value type.
    #[must_use]
    pub fn x_value_type(&self) -> ValueType {
        self.x_value_type
    }

    /// Returns the y-axis value type.
    #[must_use]
    pub fn y_value_type(&self) -> ValueType {
        self.y_value_type
    }

    /// Returns all info entries.
    #[must_use]
    pub fn info_entries(&self) -> &[CurveInfo] {
        &self.info
    }

    /// Adds an info entry, replacing any existing entry of the same kind.
    #[must_use]
    pub fn with_info(mut self, info: CurveInfo) -> Self {
        self.info.retain(|existing| !existing.same_kind(&info));
        self.info.push(info);
        self
    }

    /// Sets the day count entry.
    #[must_use]
    pub fn with_day_count(self, day_count: DayCountConvention) -> Self {
        self.with_info(CurveInfo::DayCount(day_count))
    }

    /// Sets the compounding-per-year entry.
    #[must_use]
    pub fn with_compounding_per_year(self, periods: i32) -> Self {
        self.with_info(CurveInfo::CompoundingPerYear(periods))
    }

    /// Returns a copy under a different name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<CurveName>) -> Self {
        self.curve_name = name.into();
        self
    }

    /// Looks up an info entry by typed key.
    #[must_use]
    pub fn find_info<T>(&self, key: CurveInfoType<T>) -> Option<T> {
        self.info.iter().find_map(key.extract)
    }

    /// Looks up an info entry by typed key, failing if it is absent.
    pub fn info<T>(&self, key: CurveInfoType<T>) -> CurveResult<T> {
        self.find_info(key).ok_or_else(|| CurveError::MissingInfo {
            curve: self.curve_name.clone(),
            key: key.name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_info() {
        let metadata = CurveMetadata::zero_rates("USD-DSC", DayCountConvention::Act365Fixed)
            .with_compounding_per_year(4);

        assert_eq!(
            metadata.find_info(CurveInfoType::DAY_COUNT),
            Some(DayCountConvention::Act365Fixed)
        );
        assert_eq!(metadata.find_info(CurveInfoType::COMPOUNDING_PER_YEAR), Some(4));
    }

    #[test]
    fn test_missing_info() {
        let metadata = CurveMetadata::new("BARE", ValueType::YearFraction, ValueType::ZeroRate);
        assert_eq!(metadata.find_info(CurveInfoType::DAY_COUNT), None);

        let err = metadata.info(CurveInfoType::COMPOUNDING_PER_YEAR).unwrap_err();
        assert_eq!(
            err,
            CurveError::MissingInfo {
                curve: CurveName::new("BARE"),
                key: "CompoundingPerYear",
            }
        );
    }

    #[test]
    fn test_key_is_copy_for_any_value_type() {
        fn day_count_label(info: &CurveInfo) -> Option<String> {
            match info {
                CurveInfo::DayCount(dc) => Some(dc.to_string()),
                CurveInfo::CompoundingPerYear(_) => None,
            }
        }
        let label = CurveInfoType::<String> {
            name: "DayCountLabel",
            extract: day_count_label,
        };

        let metadata = CurveMetadata::zero_rates("C", DayCountConvention::Act360);
        let copy = label;
        assert_eq!(metadata.info(label).unwrap(), "ACT/360");
        assert_eq!(metadata.find_info(copy), Some("ACT/360".to_string()));

        let bare = CurveMetadata::new("BARE", ValueType::YearFraction, ValueType::ZeroRate);
        assert!(matches!(
            bare.info(label),
            Err(CurveError::MissingInfo { key: "DayCountLabel", .. })
        ));
    }

    #[test]
    fn test_with_info_replaces_same_kind() {
        let metadata = CurveMetadata::zero_rates("C", DayCountConvention::Act360)
            .with_compounding_per_year(1)
            .with_compounding_per_year(12)
            .with_day_count(DayCountConvention::Thirty360US);

        assert_eq!(metadata.info_entries().len(), 2);
        assert_eq!(metadata.find_info(CurveInfoType::COMPOUNDING_PER_YEAR), Some(12));
        assert_eq!(
            metadata.find_info(CurveInfoType::DAY_COUNT),
            Some(DayCountConvention::Thirty360US)
        );
    }

    #[test]
    fn test_key_names() {
        assert_eq!(CurveInfoType::DAY_COUNT.name(), "DayCount");
        assert_eq!(
            format!("{:?}", CurveInfoType::COMPOUNDING_PER_YEAR),
            "CurveInfoType(\"CompoundingPerYear\")"
        );
    }

    #[test]
    fn test_serde_roundtrip() {
        let metadata = CurveMetadata::zero_rates("GBP-SONIA", DayCountConvention::Act365Fixed)
            .with_compounding_per_year(2);
        let json = serde_json::to_string(&metadata).unwrap();
        let parsed: CurveMetadata = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, metadata);
    }
}
