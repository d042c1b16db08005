//! Discount factors from a periodically-compounded zero-rate curve.
//!
//! [`DiscountCurveModel`] wraps a curve of zero rates keyed by year fraction
//! and turns it into discount factors for a currency as of a valuation date:
//!
//! ```text
//! t  = day_count.relative_year_fraction(valuation_date, date)
//! r  = curve.y_value(t)
//! df = (1 + r/m)^(-t·m)
//! ```
//!
//! where `m` is the compounding frequency declared in the curve metadata. The
//! model also maps zero-rate point sensitivities onto the curve parameters
//! using the curve's own Jacobian, so no bumping is involved.
//!
//! The curve is held in an [`Arc`] and never copied; replacing it produces a
//! new model and re-runs the metadata checks.

use std::fmt::Debug;
use std::sync::Arc;

use meridian_core::daycounts::{DayCount, DayCountConvention};
use meridian_core::{Currency, Date};
use tracing::{debug, warn};

use crate::compounding::{periodic_discount_factor, CompoundedRateType};
use crate::error::{CurveError, CurveResult};
use crate::metadata::{CurveInfoType, CurveName};
use crate::perturbation::Perturbation;
use crate::sensitivity::{
    CurveCurrencyParameterSensitivities, CurveUnitParameterSensitivity, ZeroRateSensitivity,
};
use crate::traits::Curve;
use crate::value_type::ValueType;

/// Year fractions smaller than this in magnitude are treated as zero time.
pub const EFFECTIVE_ZERO: f64 = 1e-10;

/// Discount factors and their sensitivities for a single currency.
///
/// Implementors provide the date-to-time mapping, the plain discount factor
/// and the curve Jacobian. Spread-adjusted factors and point sensitivities
/// are derived from those.
pub trait DiscountFactors: Send + Sync + Debug {
    /// The curve type the discount factors are built on.
    type Underlying: Curve;

    /// Returns the currency the discount factors apply to.
    fn currency(&self) -> Currency;

    /// Returns the valuation date.
    fn valuation_date(&self) -> Date;

    /// Returns the underlying curve name.
    fn curve_name(&self) -> &CurveName;

    /// Returns the number of parameters of the underlying curve.
    fn parameter_count(&self) -> usize;

    /// Returns the signed year fraction from the valuation date to `date`.
    fn relative_year_fraction(&self, date: Date) -> f64;

    /// Returns the discount factor at `date`.
    ///
    /// Dates before the valuation date are valid and give negative time.
    fn discount_factor(&self, date: Date) -> f64;

    /// Returns the discount factor at `date` with a z-spread applied.
    ///
    /// At the valuation date the result is exactly `1.0`, whatever the other
    /// arguments. Otherwise see [`CompoundedRateType::apply_spread`].
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::NonPositivePeriodsPerYear`] for periodic
    /// compounding with `periods_per_year <= 0`.
    fn discount_factor_with_spread(
        &self,
        date: Date,
        z_spread: f64,
        compounded_rate_type: CompoundedRateType,
        periods_per_year: i32,
    ) -> CurveResult<f64> {
        let t = self.relative_year_fraction(date);
        if t.abs() < EFFECTIVE_ZERO {
            return Ok(1.0);
        }
        let df = self.discount_factor(date);
        compounded_rate_type.apply_spread(df, t, z_spread, periods_per_year)
    }

    /// Returns the sensitivity of the discount factor at `date` to the zero rate.
    ///
    /// The amount is `-df·t`, expressed in `sensitivity_currency`.
    fn zero_rate_point_sensitivity(
        &self,
        date: Date,
        sensitivity_currency: Currency,
    ) -> ZeroRateSensitivity {
        let t = self.relative_year_fraction(date);
        let df = self.discount_factor(date);
        ZeroRateSensitivity::new(self.currency(), date, sensitivity_currency, -df * t)
    }

    /// Returns the zero-rate point sensitivity of the spread-adjusted discount factor.
    ///
    /// The amount is `-df·t` where `df` comes from
    /// [`discount_factor_with_spread`](DiscountFactors::discount_factor_with_spread).
    fn zero_rate_point_sensitivity_with_spread(
        &self,
        date: Date,
        sensitivity_currency: Currency,
        z_spread: f64,
        compounded_rate_type: CompoundedRateType,
        periods_per_year: i32,
    ) -> CurveResult<ZeroRateSensitivity> {
        let t = self.relative_year_fraction(date);
        let df = self.discount_factor_with_spread(
            date,
            z_spread,
            compounded_rate_type,
            periods_per_year,
        )?;
        Ok(ZeroRateSensitivity::new(
            self.currency(),
            date,
            sensitivity_currency,
            -df * t,
        ))
    }

    /// Returns the unscaled sensitivity of the zero rate at `date` to each curve parameter.
    fn unit_parameter_sensitivity(&self, date: Date) -> CurveUnitParameterSensitivity;

    /// Maps a point sensitivity onto the curve parameters.
    ///
    /// The unit sensitivity at `point.date()` is scaled by `point.sensitivity()`
    /// and expressed in `point.currency()`.
    fn curve_parameter_sensitivity(
        &self,
        point: &ZeroRateSensitivity,
    ) -> CurveCurrencyParameterSensitivities {
        self.unit_parameter_sensitivity(point.date())
            .multiplied_by(point.currency(), point.sensitivity())
            .into()
    }

    /// Returns a model on a different curve, with the same currency and valuation date.
    ///
    /// # Errors
    ///
    /// Returns the same errors as construction if the new curve's metadata is invalid.
    fn with_curve(&self, curve: Arc<Self::Underlying>) -> CurveResult<Self>
    where
        Self: Sized;

    /// Returns a model on the perturbed curve.
    fn apply_perturbation<P>(&self, perturbation: &P) -> CurveResult<Self>
    where
        Self: Sized,
        P: Perturbation<Self::Underlying> + ?Sized;
}

/// Discount factors from a zero-rate curve with periodic compounding.
///
/// The curve's metadata must declare year fractions on the x-axis, zero
/// rates on the y-axis, a day count, and a positive number of compounding
/// periods per year.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use meridian_core::{Currency, Date};
/// use meridian_core::daycounts::DayCountConvention;
/// use meridian_curves::prelude::*;
///
/// let metadata = CurveMetadata::zero_rates("GBP-SONIA", DayCountConvention::Act365Fixed)
///     .with_compounding_per_year(1);
/// let curve = Arc::new(ConstantCurve::new(metadata, 0.04)?);
///
/// let model = DiscountCurveModel::builder()
///     .currency(Currency::GBP)
///     .valuation_date(Date::from_ymd(2025, 3, 31)?)
///     .curve(curve)
///     .build()?;
///
/// assert_eq!(model.frequency(), 1);
/// assert_eq!(model.discount_factor(model.valuation_date()), 1.0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct DiscountCurveModel<C> {
    currency: Currency,
    valuation_date: Date,
    curve: Arc<C>,
    frequency: i32,
    day_count: DayCountConvention,
}

impl<C: Curve> DiscountCurveModel<C> {
    /// Creates a model, validating the curve metadata.
    ///
    /// # Errors
    ///
    /// Checks run in this order, each with its own error:
    /// - y-axis is not [`ValueType::ZeroRate`]
    /// - x-axis is not [`ValueType::YearFraction`]
    /// - no day count in the metadata
    /// - no compounding-per-year in the metadata
    /// - compounding-per-year is zero or negative
    pub fn new(currency: Currency, valuation_date: Date, curve: Arc<C>) -> CurveResult<Self> {
        let (frequency, day_count) = match Self::validate(curve.as_ref()) {
            Ok(derived) => derived,
            Err(err) => {
                warn!(curve = %curve.name(), error = %err, "rejected discount curve");
                return Err(err);
            }
        };

        debug!(
            currency = %currency,
            valuation_date = %valuation_date,
            curve = %curve.name(),
            frequency,
            day_count = %day_count,
            "created discount curve model"
        );

        Ok(Self {
            currency,
            valuation_date,
            curve,
            frequency,
            day_count,
        })
    }

    /// Returns a builder.
    #[must_use]
    pub fn builder() -> DiscountCurveModelBuilder<C> {
        DiscountCurveModelBuilder::default()
    }

    fn validate(curve: &C) -> CurveResult<(i32, DayCountConvention)> {
        let metadata = curve.metadata();
        let name = metadata.curve_name();

        if metadata.y_value_type() != ValueType::ZeroRate {
            return Err(CurveError::IncorrectYValueType {
                curve: name.clone(),
                expected: ValueType::ZeroRate,
                got: metadata.y_value_type(),
            });
        }
        if metadata.x_value_type() != ValueType::YearFraction {
            return Err(CurveError::IncorrectXValueType {
                curve: name.clone(),
                expected: ValueType::YearFraction,
                got: metadata.x_value_type(),
            });
        }

        let day_count = metadata
            .find_info(CurveInfoType::DAY_COUNT)
            .ok_or_else(|| CurveError::MissingDayCount { curve: name.clone() })?;

        let frequency = metadata
            .find_info(CurveInfoType::COMPOUNDING_PER_YEAR)
            .ok_or_else(|| CurveError::MissingCompoundingPerYear { curve: name.clone() })?;
        if frequency <= 0 {
            return Err(CurveError::NonPositiveCompoundingPerYear {
                curve: name.clone(),
                value: frequency,
            });
        }

        Ok((frequency, day_count))
    }

    /// Returns the underlying curve.
    #[must_use]
    pub fn curve(&self) -> &Arc<C> {
        &self.curve
    }

    /// Returns the compounding periods per year of the curve rates.
    #[must_use]
    pub fn frequency(&self) -> i32 {
        self.frequency
    }

    /// Returns the day count used to place dates on the curve.
    #[must_use]
    pub fn day_count(&self) -> DayCountConvention {
        self.day_count
    }

    /// Returns the zero rate at `date`.
    #[must_use]
    pub fn zero_rate(&self, date: Date) -> f64 {
        self.curve.y_value(self.relative_year_fraction(date))
    }
}

impl<C: Curve> DiscountFactors for DiscountCurveModel<C> {
    type Underlying = C;

    fn currency(&self) -> Currency {
        self.currency
    }

    fn valuation_date(&self) -> Date {
        self.valuation_date
    }

    fn curve_name(&self) -> &CurveName {
        self.curve.name()
    }

    fn parameter_count(&self) -> usize {
        self.curve.parameter_count()
    }

    fn relative_year_fraction(&self, date: Date) -> f64 {
        self.day_count.relative_year_fraction(self.valuation_date, date)
    }

    fn discount_factor(&self, date: Date) -> f64 {
        let t = self.relative_year_fraction(date);
        let rate = self.curve.y_value(t);
        periodic_discount_factor(rate, t, self.frequency)
    }

    fn unit_parameter_sensitivity(&self, date: Date) -> CurveUnitParameterSensitivity {
        let t = self.relative_year_fraction(date);
        self.curve.y_value_parameter_sensitivity(t)
    }

    fn with_curve(&self, curve: Arc<C>) -> CurveResult<Self>
    where
        Self: Sized,
    {
        debug!(
            currency = %self.currency,
            from = %self.curve.name(),
            to = %curve.name(),
            "replacing discount curve"
        );
        Self::new(self.currency, self.valuation_date, curve)
    }

    fn apply_perturbation<P>(&self, perturbation: &P) -> CurveResult<Self>
    where
        Self: Sized,
        P: Perturbation<C> + ?Sized,
    {
        let perturbed = self.curve.as_ref().apply_perturbation(perturbation)?;
        self.with_curve(Arc::new(perturbed))
    }
}

impl<C> Clone for DiscountCurveModel<C> {
    fn clone(&self) -> Self {
        Self {
            currency: self.currency,
            valuation_date: self.valuation_date,
            curve: Arc::clone(&self.curve),
            frequency: self.frequency,
            day_count: self.day_count,
        }
    }
}

/// Frequency and day count are derived from the curve, so equality covers
/// currency, valuation date and curve value.
impl<C: PartialEq> PartialEq for DiscountCurveModel<C> {
    fn eq(&self, other: &Self) -> bool {
        self.currency == other.currency
            && self.valuation_date == other.valuation_date
            && self.curve == other.curve
    }
}

/// Builder for [`DiscountCurveModel`].
///
/// Every field is required; [`build`](DiscountCurveModelBuilder::build)
/// reports the first missing one, checking currency, then valuation date,
/// then curve.
#[derive(Debug)]
pub struct DiscountCurveModelBuilder<C> {
    currency: Option<Currency>,
    valuation_date: Option<Date>,
    curve: Option<Arc<C>>,
}

impl<C> Default for DiscountCurveModelBuilder<C> {
    fn default() -> Self {
        Self {
            currency: None,
            valuation_date: None,
            curve: None,
        }
    }
}

impl<C: Curve> DiscountCurveModelBuilder<C> {
    /// Sets the currency.
    #[must_use]
    pub fn currency(mut self, currency: Currency) -> Self {
        self.currency = Some(currency);
        self
    }

    /// Sets the valuation date.
    #[must_use]
    pub fn valuation_date(mut self, valuation_date: Date) -> Self {
        self.valuation_date = Some(valuation_date);
        self
    }

    /// Sets the curve.
    #[must_use]
    pub fn curve(mut self, curve: Arc<C>) -> Self {
        self.curve = Some(curve);
        self
    }

    /// Builds the model.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::MissingField`] for an unset field, otherwise the
    /// errors of [`DiscountCurveModel::new`].
    pub fn build(self) -> CurveResult<DiscountCurveModel<C>> {
        let currency = self.currency.ok_or(CurveError::missing_field("currency"))?;
        let valuation_date = self
            .valuation_date
            .ok_or(CurveError::missing_field("valuation_date"))?;
        let curve = self.curve.ok_or(CurveError::missing_field("curve"))?;
        DiscountCurveModel::new(currency, valuation_date, curve)
    }
}
