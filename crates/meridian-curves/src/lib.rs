//! # Meridian Curves
//!
//! Discount factors and closed-form sensitivities from zero-rate curves.
//!
//! This crate provides:
//!
//! - **Curve Trait**: the [`Curve`] capability (value, parameter Jacobian, metadata)
//! - **Curve Types**: [`InterpolatedNodalCurve`] and [`ConstantCurve`]
//! - **Metadata**: axis [`ValueType`]s and typed info keys ([`CurveInfoType`])
//! - **Perturbations**: curve-to-curve transforms for scenario analysis
//! - **Sensitivities**: zero-rate point sensitivities and per-parameter sensitivities
//! - **Discounting**: [`DiscountCurveModel`], discount factors from a
//!   periodically-compounded zero-rate curve
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use meridian_core::{Currency, Date};
//! use meridian_core::daycounts::DayCountConvention;
//! use meridian_curves::prelude::*;
//!
//! let metadata = CurveMetadata::zero_rates("USD-DSC", DayCountConvention::Act365Fixed)
//!     .with_compounding_per_year(2);
//! let curve = InterpolatedNodalCurve::new(metadata, vec![1.0, 5.0], vec![0.03, 0.035]).unwrap();
//!
//! let valuation = Date::from_ymd(2025, 1, 1).unwrap();
//! let model = DiscountCurveModel::new(Currency::USD, valuation, Arc::new(curve)).unwrap();
//!
//! let df = model.discount_factor(Date::from_ymd(2026, 1, 1).unwrap());
//! assert!((df - 1.015_f64.powi(-2)).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]

pub mod compounding;
pub mod curves;
pub mod discount;
pub mod error;
pub mod metadata;
pub mod perturbation;
pub mod sensitivity;
pub mod traits;
pub mod value_type;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::compounding::CompoundedRateType;
    pub use crate::curves::{ConstantCurve, InterpolatedNodalCurve};
    pub use crate::discount::{DiscountCurveModel, DiscountCurveModelBuilder, DiscountFactors};
    pub use crate::error::{CurveError, CurveResult};
    pub use crate::metadata::{CurveInfo, CurveInfoType, CurveMetadata, CurveName};
    pub use crate::perturbation::{NodeShifts, ParallelShift, Perturbation};
    pub use crate::sensitivity::{
        CurveCurrencyParameterSensitivities, CurveCurrencyParameterSensitivity,
        CurveUnitParameterSensitivity, ZeroRateSensitivity,
    };
    pub use crate::traits::Curve;
    pub use crate::value_type::ValueType;
}

pub use compounding::CompoundedRateType;
pub use curves::{ConstantCurve, InterpolatedNodalCurve};
pub use discount::{DiscountCurveModel, DiscountCurveModelBuilder, DiscountFactors};
pub use error::{CurveError, CurveResult};
pub use metadata::{CurveInfo, CurveInfoType, CurveMetadata, CurveName};
pub use perturbation::Perturbation;
pub use traits::Curve;
pub use value_type::ValueType;
