//! Compounding of rates and spreads.
//!
//! Curve rates are periodically compounded at the frequency declared in the
//! curve metadata. A z-spread on top of the curve may be compounded either
//! periodically or continuously, chosen with [`CompoundedRateType`].
//!
//! # Example
//!
//! ```rust
//! use meridian_curves::compounding::{periodic_discount_factor, CompoundedRateType};
//!
//! let df = periodic_discount_factor(0.03, 1.0, 2);
//! assert!((df - 1.015_f64.powi(-2)).abs() < 1e-15);
//!
//! let with_spread = CompoundedRateType::Continuous.apply_spread(df, 1.0, 0.01, 0)?;
//! assert!((with_spread - df * (-0.01_f64).exp()).abs() < 1e-15);
//! # Ok::<(), meridian_curves::CurveError>(())
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CurveError, CurveResult};

/// How a spread over the curve is compounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompoundedRateType {
    /// Compounded a fixed number of times per year.
    Periodic,
    /// Continuously compounded.
    Continuous,
}

impl CompoundedRateType {
    /// Adjusts a curve discount factor `df` at time `t` for a spread.
    ///
    /// - `Periodic`: `x = df^(-1/(n·t)) + spread/n`, result `x^(-n·t)` with
    ///   `n = periods_per_year`, which must be positive.
    /// - `Continuous`: `df·exp(-spread·t)`; `periods_per_year` is ignored.
    ///
    /// `t` must be non-zero for periodic compounding.
    pub fn apply_spread(
        self,
        df: f64,
        t: f64,
        spread: f64,
        periods_per_year: i32,
    ) -> CurveResult<f64> {
        match self {
            CompoundedRateType::Periodic => {
                if periods_per_year <= 0 {
                    return Err(CurveError::NonPositivePeriodsPerYear {
                        value: periods_per_year,
                    });
                }
                let n = f64::from(periods_per_year);
                let nt = n * t;
                let x = df.powf(-1.0 / nt) + spread / n;
                Ok(x.powf(-nt))
            }
            CompoundedRateType::Continuous => Ok(df * (-spread * t).exp()),
        }
    }
}

impl fmt::Display for CompoundedRateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompoundedRateType::Periodic => write!(f, "Periodic"),
            CompoundedRateType::Continuous => write!(f, "Continuous"),
        }
    }
}

/// Discount factor for a rate compounded `periods_per_year` times a year.
///
/// Returns `(1 + rate/m)^(-t·m)`. Valid for negative `t`, which gives a
/// factor above one for positive rates.
#[must_use]
pub fn periodic_discount_factor(rate: f64, t: f64, periods_per_year: i32) -> f64 {
    let m = f64::from(periods_per_year);
    (1.0 + rate / m).powf(-t * m)
}
