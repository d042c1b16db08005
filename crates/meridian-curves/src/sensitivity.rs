//! Point and parameter sensitivities.
//!
//! A [`ZeroRateSensitivity`] is the sensitivity of a value to the zero rate
//! at a single date. Mapping it through a curve's parameter Jacobian gives a
//! [`CurveCurrencyParameterSensitivity`]: one amount per curve parameter.

use approx::abs_diff_eq;
use meridian_core::{Currency, Date};
use serde::{Deserialize, Serialize};

use crate::error::{CurveError, CurveResult};
use crate::metadata::CurveName;

/// Sensitivity to the zero rate of a curve at one date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZeroRateSensitivity {
    curve_currency: Currency,
    date: Date,
    currency: Currency,
    sensitivity: f64,
}

impl ZeroRateSensitivity {
    /// Creates a point sensitivity.
    ///
    /// `curve_currency` is the currency of the discounting curve and
    /// `currency` is the currency the amount is expressed in.
    #[must_use]
    pub fn new(curve_currency: Currency, date: Date, currency: Currency, sensitivity: f64) -> Self {
        Self {
            curve_currency,
            date,
            currency,
            sensitivity,
        }
    }

    /// Creates a point sensitivity expressed in the curve currency.
    #[must_use]
    pub fn of(curve_currency: Currency, date: Date, sensitivity: f64) -> Self {
        Self::new(curve_currency, date, curve_currency, sensitivity)
    }

    /// Returns the currency of the curve.
    #[must_use]
    pub fn curve_currency(&self) -> Currency {
        self.curve_currency
    }

    /// Returns the date the sensitivity refers to.
    #[must_use]
    pub fn date(&self) -> Date {
        self.date
    }

    /// Returns the currency of the sensitivity amount.
    #[must_use]
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the sensitivity amount.
    #[must_use]
    pub fn sensitivity(&self) -> f64 {
        self.sensitivity
    }

    /// Returns a copy expressed in another currency, with the same amount.
    #[must_use]
    pub fn with_currency(self, currency: Currency) -> Self {
        Self { currency, ..self }
    }

    /// Returns a copy with the amount scaled by `factor`.
    #[must_use]
    pub fn multiplied_by(self, factor: f64) -> Self {
        self.map_sensitivity(|s| s * factor)
    }

    /// Returns a copy with `f` applied to the amount.
    #[must_use]
    pub fn map_sensitivity(self, f: impl FnOnce(f64) -> f64) -> Self {
        Self {
            sensitivity: f(self.sensitivity),
            ..self
        }
    }
}

/// Unscaled sensitivity of a curve value to each curve parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveUnitParameterSensitivity {
    curve_name: CurveName,
    sensitivity: Vec<f64>,
}

impl CurveUnitParameterSensitivity {
    /// Creates a unit sensitivity for the named curve.
    #[must_use]
    pub fn new(curve_name: CurveName, sensitivity: Vec<f64>) -> Self {
        Self {
            curve_name,
            sensitivity,
        }
    }

    /// Returns the curve name.
    #[must_use]
    pub fn curve_name(&self) -> &CurveName {
        &self.curve_name
    }

    /// Returns the per-parameter values.
    #[must_use]
    pub fn sensitivity(&self) -> &[f64] {
        &self.sensitivity
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn parameter_count(&self) -> usize {
        self.sensitivity.len()
    }

    /// Scales every entry by `amount`, expressing the result in `currency`.
    #[must_use]
    pub fn multiplied_by(
        &self,
        currency: Currency,
        amount: f64,
    ) -> CurveCurrencyParameterSensitivity {
        CurveCurrencyParameterSensitivity::new(
            self.curve_name.clone(),
            currency,
            self.sensitivity.iter().map(|s| s * amount).collect(),
        )
    }
}

/// Per-parameter sensitivity of a curve, expressed in a currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveCurrencyParameterSensitivity {
    curve_name: CurveName,
    currency: Currency,
    sensitivity: Vec<f64>,
}

impl CurveCurrencyParameterSensitivity {
    /// Creates a currency sensitivity for the named curve.
    #[must_use]
    pub fn new(curve_name: CurveName, currency: Currency, sensitivity: Vec<f64>) -> Self {
        Self {
            curve_name,
            currency,
            sensitivity,
        }
    }

    /// Returns the curve name.
    #[must_use]
    pub fn curve_name(&self) -> &CurveName {
        &self.curve_name
    }

    /// Returns the currency of the amounts.
    #[must_use]
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the per-parameter amounts.
    #[must_use]
    pub fn sensitivity(&self) -> &[f64] {
        &self.sensitivity
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn parameter_count(&self) -> usize {
        self.sensitivity.len()
    }

    /// Returns the sum of all per-parameter amounts.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.sensitivity.iter().sum()
    }

    /// Returns a copy with every amount scaled by `factor`.
    #[must_use]
    pub fn multiplied_by(&self, factor: f64) -> Self {
        Self {
            curve_name: self.curve_name.clone(),
            currency: self.currency,
            sensitivity: self.sensitivity.iter().map(|s| s * factor).collect(),
        }
    }

    /// Adds another sensitivity for the same curve and currency element-wise.
    pub fn plus(&self, other: &Self) -> CurveResult<Self> {
        if self.curve_name != other.curve_name || self.currency != other.currency {
            return Err(CurveError::invalid_value(format!(
                "cannot add sensitivity for {}/{} to {}/{}",
                other.curve_name, other.currency, self.curve_name, self.currency
            )));
        }
        if self.sensitivity.len() != other.sensitivity.len() {
            return Err(CurveError::length_mismatch(
                "parameter sensitivity",
                self.sensitivity.len(),
                other.sensitivity.len(),
            ));
        }

        Ok(Self {
            curve_name: self.curve_name.clone(),
            currency: self.currency,
            sensitivity: self
                .sensitivity
                .iter()
                .zip(&other.sensitivity)
                .map(|(a, b)| a + b)
                .collect(),
        })
    }

    /// Compares two sensitivities, allowing an absolute difference of `tolerance` per entry.
    #[must_use]
    pub fn equal_with_tolerance(&self, other: &Self, tolerance: f64) -> bool {
        self.curve_name == other.curve_name
            && self.currency == other.currency
            && self.sensitivity.len() == other.sensitivity.len()
            && self
                .sensitivity
                .iter()
                .zip(&other.sensitivity)
                .all(|(a, b)| abs_diff_eq!(*a, *b, epsilon = tolerance))
    }
}

/// A collection of currency parameter sensitivities, at most one per curve and currency.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurveCurrencyParameterSensitivities {
    sensitivities: Vec<CurveCurrencyParameterSensitivity>,
}

impl CurveCurrencyParameterSensitivities {
    /// Creates an empty collection.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a collection holding a single sensitivity.
    #[must_use]
    pub fn of(sensitivity: CurveCurrencyParameterSensitivity) -> Self {
        Self {
            sensitivities: vec![sensitivity],
        }
    }

    /// Returns the sensitivities in insertion order.
    #[must_use]
    pub fn sensitivities(&self) -> &[CurveCurrencyParameterSensitivity] {
        &self.sensitivities
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sensitivities.len()
    }

    /// Returns true if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sensitivities.is_empty()
    }

    /// Finds the entry for a curve and currency.
    #[must_use]
    pub fn find(
        &self,
        curve_name: &CurveName,
        currency: Currency,
    ) -> Option<&CurveCurrencyParameterSensitivity> {
        self.sensitivities
            .iter()
            .find(|s| s.curve_name() == curve_name && s.currency() == currency)
    }

    /// Adds a sensitivity, summing it into an existing entry with the same curve and currency.
    pub fn combined_with(
        mut self,
        sensitivity: CurveCurrencyParameterSensitivity,
    ) -> CurveResult<Self> {
        let existing = self
            .sensitivities
            .iter_mut()
            .find(|s| s.curve_name == sensitivity.curve_name && s.currency == sensitivity.currency);

        match existing {
            Some(entry) => *entry = entry.plus(&sensitivity)?,
            None => self.sensitivities.push(sensitivity),
        }
        Ok(self)
    }

    /// Merges every entry of `other` into this collection.
    pub fn combined_with_all(self, other: Self) -> CurveResult<Self> {
        other
            .sensitivities
            .into_iter()
            .try_fold(self, Self::combined_with)
    }

    /// Returns a copy with every amount scaled by `factor`.
    #[must_use]
    pub fn multiplied_by(&self, factor: f64) -> Self {
        Self {
            sensitivities: self.sensitivities.iter().map(|s| s.multiplied_by(factor)).collect(),
        }
    }

    /// Returns the sum of all amounts in `currency`.
    #[must_use]
    pub fn total(&self, currency: Currency) -> f64 {
        self.sensitivities
            .iter()
            .filter(|s| s.currency() == currency)
            .map(CurveCurrencyParameterSensitivity::total)
            .sum()
    }

    /// Compares two collections entry by entry, ignoring order.
    #[must_use]
    pub fn equal_with_tolerance(&self, other: &Self, tolerance: f64) -> bool {
        self.len() == other.len()
            && self.sensitivities.iter().all(|s| {
                other
                    .find(s.curve_name(), s.currency())
                    .is_some_and(|o| s.equal_with_tolerance(o, tolerance))
            })
    }
}

impl From<CurveCurrencyParameterSensitivity> for CurveCurrencyParameterSensitivities {
    fn from(sensitivity: CurveCurrencyParameterSensitivity) -> Self {
        Self::of(sensitivity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn date() -> Date {
        Date::from_ymd(2026, 6, 30).unwrap()
    }

    fn sens(name: &str, currency: Currency, values: Vec<f64>) -> CurveCurrencyParameterSensitivity {
        CurveCurrencyParameterSensitivity::new(CurveName::new(name), currency, values)
    }

    #[test]
    fn test_zero_rate_sensitivity_transforms() {
        let point = ZeroRateSensitivity::of(Currency::USD, date(), -0.97);
        assert_eq!(point.currency(), Currency::USD);
        assert_eq!(point.curve_currency(), Currency::USD);

        let scaled = point.multiplied_by(2.0);
        assert_relative_eq!(scaled.sensitivity(), -1.94);
        assert_eq!(scaled.date(), point.date());

        let converted = point.with_currency(Currency::EUR);
        assert_eq!(converted.currency(), Currency::EUR);
        assert_eq!(converted.curve_currency(), Currency::USD);
        assert_eq!(converted.sensitivity(), point.sensitivity());

        let mapped = point.map_sensitivity(f64::abs);
        assert_eq!(mapped.sensitivity(), 0.97);
    }

    #[test]
    fn test_unit_multiplied_by() {
        let unit = CurveUnitParameterSensitivity::new(CurveName::new("USD-DSC"), vec![0.25, 0.75]);
        let scaled = unit.multiplied_by(Currency::GBP, -2.0);

        assert_eq!(scaled.curve_name().as_str(), "USD-DSC");
        assert_eq!(scaled.currency(), Currency::GBP);
        assert_eq!(scaled.sensitivity(), &[-0.5, -1.5]);
        assert_relative_eq!(scaled.total(), -2.0);
    }

    #[test]
    fn test_combined_with_merges_same_key() {
        let base = sens("A", Currency::USD, vec![1.0, 2.0]);
        let combined = CurveCurrencyParameterSensitivities::of(base)
            .combined_with(sens("A", Currency::USD, vec![0.5, 0.5]))
            .unwrap()
            .combined_with(sens("A", Currency::EUR, vec![3.0, 3.0]))
            .unwrap();

        assert_eq!(combined.len(), 2);
        let usd = combined.find(&CurveName::new("A"), Currency::USD).unwrap();
        assert_eq!(usd.sensitivity(), &[1.5, 2.5]);
        assert_relative_eq!(combined.total(Currency::USD), 4.0);
        assert_relative_eq!(combined.total(Currency::EUR), 6.0);
    }

    #[test]
    fn test_combined_with_length_mismatch() {
        let result = CurveCurrencyParameterSensitivities::of(sens("A", Currency::USD, vec![1.0]))
            .combined_with(sens("A", Currency::USD, vec![1.0, 2.0]));
        assert!(matches!(result, Err(CurveError::LengthMismatch { .. })));
    }

    #[test]
    fn test_combined_with_all() {
        let left = CurveCurrencyParameterSensitivities::of(sens("A", Currency::USD, vec![1.0]));
        let right = CurveCurrencyParameterSensitivities::of(sens("A", Currency::USD, vec![2.0]))
            .combined_with(sens("B", Currency::USD, vec![4.0]))
            .unwrap();

        let merged = left.combined_with_all(right).unwrap();
        assert_eq!(merged.len(), 2);
        assert_relative_eq!(merged.total(Currency::USD), 7.0);
    }

    #[test]
    fn test_equal_with_tolerance() {
        let usd = |values| {
            CurveCurrencyParameterSensitivities::from(sens("A", Currency::USD, values))
        };
        let a = usd(vec![1.0, 2.0]);
        let b = usd(vec![1.0 + 1e-10, 2.0]);
        let c = usd(vec![1.1, 2.0]);

        assert!(a.equal_with_tolerance(&b, 1e-8));
        assert!(!a.equal_with_tolerance(&c, 1e-8));
        assert!(!a.equal_with_tolerance(&CurveCurrencyParameterSensitivities::empty(), 1e-8));
    }

    #[test]
    fn test_multiplied_by_collection() {
        let a = CurveCurrencyParameterSensitivities::of(sens("A", Currency::USD, vec![1.0, -2.0]));
        let scaled = a.multiplied_by(3.0);
        assert_eq!(scaled.sensitivities()[0].sensitivity(), &[3.0, -6.0]);
    }
}
