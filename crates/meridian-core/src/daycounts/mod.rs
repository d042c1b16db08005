//! Day count conventions.
//!
//! A day count convention turns a pair of dates into a year fraction. Curves
//! are parameterised by year fraction measured from a valuation date, so the
//! convention declared in a curve's metadata decides how every date is placed
//! on the curve's time axis.
//!
//! # Supported Conventions
//!
//! - [`Act360`]: Actual/360 - money market convention
//! - [`Act365Fixed`]: Actual/365 Fixed
//! - [`ActActIsda`]: Actual/Actual ISDA - year-based split
//! - [`Thirty360US`]: 30/360 US (Bond Basis)
//! - [`Thirty360E`]: 30E/360 (Eurobond Basis)
//!
//! # Usage
//!
//! ```rust
//! use meridian_core::daycounts::{DayCount, Act360};
//! use meridian_core::types::Date;
//!
//! let start = Date::from_ymd(2025, 1, 1).unwrap();
//! let end = Date::from_ymd(2025, 4, 1).unwrap();
//!
//! assert_eq!(Act360.day_count(start, end), 90);
//! assert!((Act360.year_fraction(start, end) - 0.25).abs() < 1e-15);
//! ```

mod act360;
mod act365;
mod actact;
mod thirty360;

pub use act360::Act360;
pub use act365::Act365Fixed;
pub use actact::ActActIsda;
pub use thirty360::{Thirty360E, Thirty360US};

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::Date;

/// Trait for day count conventions.
///
/// Implementations must be thread-safe (`Send + Sync`) and deterministic.
pub trait DayCount: Send + Sync {
    /// Returns the market name of the convention (e.g. "ACT/360", "30/360 US").
    fn name(&self) -> &'static str;

    /// Returns the number of days between two dates according to the convention.
    fn day_count(&self, start: Date, end: Date) -> i64;

    /// Returns the fraction of a year between `start` and `end`.
    fn year_fraction(&self, start: Date, end: Date) -> f64;

    /// Returns the signed year fraction from `from` to `to`.
    ///
    /// When `to` is before `from` the result is the negated year fraction
    /// from `to` to `from`, so the sign always follows the order of the dates.
    fn relative_year_fraction(&self, from: Date, to: Date) -> f64 {
        if to < from {
            -self.year_fraction(to, from)
        } else {
            self.year_fraction(from, to)
        }
    }
}

/// Enumeration of the supported day count conventions.
///
/// This is the form stored in curve metadata and configuration files. It
/// serializes as the market name and parses common aliases.
///
/// ```rust
/// use meridian_core::daycounts::{DayCount, DayCountConvention};
///
/// let dc: DayCountConvention = "30/360".parse().unwrap();
/// assert_eq!(dc, DayCountConvention::Thirty360US);
/// assert_eq!(dc.name(), "30/360 US");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum DayCountConvention {
    /// Actual/360
    Act360,
    /// Actual/365 Fixed
    Act365Fixed,
    /// Actual/Actual ISDA
    ActActIsda,
    /// 30/360 US (Bond Basis)
    Thirty360US,
    /// 30E/360 (Eurobond Basis)
    Thirty360E,
}

impl DayCountConvention {
    /// Returns all available day count conventions.
    #[must_use]
    pub fn all() -> &'static [DayCountConvention] {
        &[
            DayCountConvention::Act360,
            DayCountConvention::Act365Fixed,
            DayCountConvention::ActActIsda,
            DayCountConvention::Thirty360US,
            DayCountConvention::Thirty360E,
        ]
    }

    fn as_day_count(self) -> &'static dyn DayCount {
        match self {
            DayCountConvention::Act360 => &Act360,
            DayCountConvention::Act365Fixed => &Act365Fixed,
            DayCountConvention::ActActIsda => &ActActIsda,
            DayCountConvention::Thirty360US => &Thirty360US,
            DayCountConvention::Thirty360E => &Thirty360E,
        }
    }
}

impl DayCount for DayCountConvention {
    fn name(&self) -> &'static str {
        self.as_day_count().name()
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        self.as_day_count().day_count(start, end)
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        self.as_day_count().year_fraction(start, end)
    }
}

impl std::fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for DayCountConvention {
    type Err = CoreError;

    /// Parses a convention from its market name, enum name or a common alias.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();

        match normalized.as_str() {
            "ACT/360" | "ACTUAL/360" | "ACT360" => Ok(DayCountConvention::Act360),

            "ACT/365" | "ACT/365F" | "ACT/365 FIXED" | "ACTUAL/365" | "ACTUAL/365 FIXED"
            | "ACT365FIXED" | "ACT365" => Ok(DayCountConvention::Act365Fixed),

            "ACT/ACT" | "ACT/ACT ISDA" | "ACTUAL/ACTUAL" | "ACTUAL/ACTUAL ISDA" | "ACTACTISDA"
            | "ACTACT" => Ok(DayCountConvention::ActActIsda),

            "30/360" | "30/360 US" | "30U/360" | "BOND" | "THIRTY360US" => {
                Ok(DayCountConvention::Thirty360US)
            }

            "30E/360" | "30/360 ICMA" | "EUROBOND" | "THIRTY360E" => {
                Ok(DayCountConvention::Thirty360E)
            }

            _ => Err(CoreError::unknown_day_count(s)),
        }
    }
}

impl TryFrom<String> for DayCountConvention {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DayCountConvention> for &'static str {
    fn from(value: DayCountConvention) -> Self {
        value.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_relative_year_fraction_sign() {
        let valuation = date(2025, 1, 1);
        let later = date(2026, 1, 1);

        for convention in DayCountConvention::all() {
            let forward = convention.relative_year_fraction(valuation, later);
            let backward = convention.relative_year_fraction(later, valuation);
            assert!(forward > 0.0, "{convention}");
            assert_relative_eq!(backward, -forward, epsilon = 1e-15);
            assert_eq!(convention.relative_year_fraction(valuation, valuation), 0.0);
        }
    }

    #[test]
    fn test_one_year_act365f() {
        let t = DayCountConvention::Act365Fixed
            .relative_year_fraction(date(2025, 1, 1), date(2026, 1, 1));
        assert_eq!(t, 1.0);
    }

    #[test]
    fn test_convention_names() {
        assert_eq!(DayCountConvention::Act360.name(), "ACT/360");
        assert_eq!(DayCountConvention::Act365Fixed.name(), "ACT/365F");
        assert_eq!(DayCountConvention::ActActIsda.name(), "ACT/ACT ISDA");
        assert_eq!(DayCountConvention::Thirty360US.name(), "30/360 US");
        assert_eq!(DayCountConvention::Thirty360E.name(), "30E/360");
        assert_eq!(format!("{}", DayCountConvention::Thirty360US), "30/360 US");
    }

    #[test]
    fn test_from_str_aliases() {
        assert_eq!(
            "actual/360".parse::<DayCountConvention>().unwrap(),
            DayCountConvention::Act360
        );
        assert_eq!(
            "ACT/365".parse::<DayCountConvention>().unwrap(),
            DayCountConvention::Act365Fixed
        );
        assert_eq!(
            "BOND".parse::<DayCountConvention>().unwrap(),
            DayCountConvention::Thirty360US
        );
        assert_eq!(
            "Eurobond".parse::<DayCountConvention>().unwrap(),
            DayCountConvention::Thirty360E
        );
    }

    #[test]
    fn test_from_str_invalid() {
        let result = "INVALID".parse::<DayCountConvention>();
        assert!(matches!(result, Err(CoreError::UnknownDayCount { .. })));
    }

    #[test]
    fn test_from_str_roundtrip() {
        for convention in DayCountConvention::all() {
            let parsed: DayCountConvention = convention.name().parse().unwrap();
            assert_eq!(*convention, parsed);
        }
    }

    #[test]
    fn test_serde_uses_market_name() {
        let json = serde_json::to_string(&DayCountConvention::Act365Fixed).unwrap();
        assert_eq!(json, "\"ACT/365F\"");
        let parsed: DayCountConvention = serde_json::from_str("\"act/act\"").unwrap();
        assert_eq!(parsed, DayCountConvention::ActActIsda);
        assert!(serde_json::from_str::<DayCountConvention>("\"ACT/999\"").is_err());
    }

    proptest! {
        #[test]
        fn prop_relative_year_fraction_antisymmetric(a in 0i64..20_000, b in 0i64..20_000) {
            let base = date(2000, 1, 1);
            let d1 = base.add_days(a);
            let d2 = base.add_days(b);
            for convention in DayCountConvention::all() {
                let forward = convention.relative_year_fraction(d1, d2);
                let backward = convention.relative_year_fraction(d2, d1);
                prop_assert!((forward + backward).abs() < 1e-12);
            }
        }
    }
}
