//! Curve implementations.
//!
//! This module provides concrete curve types:
//!
//! - [`InterpolatedNodalCurve`]: nodes with linear interpolation and flat extrapolation
//! - [`ConstantCurve`]: a single value at every x

mod constant;
mod nodal;

pub use constant::ConstantCurve;
pub use nodal::InterpolatedNodalCurve;
