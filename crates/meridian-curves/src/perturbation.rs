//! Curve perturbations.
//!
//! A perturbation turns a curve into a modified curve of the same type. It is
//! used for scenario analysis and for rebuilding a discounting model on a
//! shocked curve:
//!
//! ```rust
//! use meridian_core::daycounts::DayCountConvention;
//! use meridian_curves::prelude::*;
//!
//! let metadata = CurveMetadata::zero_rates("USD-DSC", DayCountConvention::Act365Fixed);
//! let curve = InterpolatedNodalCurve::new(metadata, vec![1.0, 5.0], vec![0.03, 0.035])?;
//!
//! let bumped = curve.apply_perturbation(&ParallelShift::from_bps(10.0))?;
//! assert!((bumped.y_value(1.0) - 0.031).abs() < 1e-12);
//! # Ok::<(), CurveError>(())
//! ```
//!
//! Any `Fn(&C) -> CurveResult<C>` closure is also a perturbation.

use crate::curves::{ConstantCurve, InterpolatedNodalCurve};
use crate::error::{CurveError, CurveResult};

/// A transform producing a new curve from an existing one.
pub trait Perturbation<C> {
    /// Applies the perturbation to `curve`.
    fn apply_to(&self, curve: &C) -> CurveResult<C>;
}

impl<C, F> Perturbation<C> for F
where
    F: Fn(&C) -> CurveResult<C>,
{
    fn apply_to(&self, curve: &C) -> CurveResult<C> {
        self(curve)
    }
}

/// Adds the same amount to every rate on a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallelShift {
    /// Shift amount in rate units (0.0001 = 1bp).
    amount: f64,
}

impl ParallelShift {
    /// Creates a shift of `amount` in rate units.
    #[must_use]
    pub fn new(amount: f64) -> Self {
        Self { amount }
    }

    /// Creates a shift given in basis points.
    #[must_use]
    pub fn from_bps(bps: f64) -> Self {
        Self::new(bps / 10_000.0)
    }

    /// Returns the shift in rate units.
    #[must_use]
    pub fn amount(&self) -> f64 {
        self.amount
    }
}

impl Perturbation<InterpolatedNodalCurve> for ParallelShift {
    fn apply_to(&self, curve: &InterpolatedNodalCurve) -> CurveResult<InterpolatedNodalCurve> {
        curve.shifted_by(self.amount)
    }
}

impl Perturbation<ConstantCurve> for ParallelShift {
    fn apply_to(&self, curve: &ConstantCurve) -> CurveResult<ConstantCurve> {
        curve.with_value(curve.value() + self.amount)
    }
}

/// Adds a separate amount to each node of a nodal curve.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeShifts {
    shifts: Vec<f64>,
}

impl NodeShifts {
    /// Creates node shifts, one amount per node in node order.
    #[must_use]
    pub fn new(shifts: Vec<f64>) -> Self {
        Self { shifts }
    }

    /// Creates a shift of `amount` on a single node and zero elsewhere.
    #[must_use]
    pub fn single(node_count: usize, index: usize, amount: f64) -> Self {
        let mut shifts = vec![0.0; node_count];
        if let Some(shift) = shifts.get_mut(index) {
            *shift = amount;
        }
        Self { shifts }
    }

    /// Returns the per-node amounts.
    #[must_use]
    pub fn shifts(&self) -> &[f64] {
        &self.shifts
    }
}

impl Perturbation<InterpolatedNodalCurve> for NodeShifts {
    fn apply_to(&self, curve: &InterpolatedNodalCurve) -> CurveResult<InterpolatedNodalCurve> {
        if self.shifts.len() != curve.node_count() {
            return Err(CurveError::length_mismatch(
                "node shifts",
                curve.node_count(),
                self.shifts.len(),
            ));
        }

        let y_values = curve
            .y_values()
            .iter()
            .zip(&self.shifts)
            .map(|(y, shift)| y + shift)
            .collect();
        curve.with_y_values(y_values)
    }
}
