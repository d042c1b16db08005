//! # Meridian Core
//!
//! Foundational types shared by the Meridian discounting crates.
//!
//! - **Types**: [`Date`] and [`Currency`]
//! - **Day Count Conventions**: year fraction calculation between dates,
//!   including the signed [`relative_year_fraction`](daycounts::DayCount::relative_year_fraction)
//!   used when measuring time from a valuation date
//!
//! ## Example
//!
//! ```rust
//! use meridian_core::prelude::*;
//!
//! let valuation = Date::from_ymd(2025, 1, 1).unwrap();
//! let maturity = Date::from_ymd(2026, 1, 1).unwrap();
//!
//! let t = DayCountConvention::Act365Fixed.relative_year_fraction(valuation, maturity);
//! assert!((t - 1.0).abs() < 1e-12);
//!
//! // Dates before the valuation date give negative time
//! let back = DayCountConvention::Act365Fixed.relative_year_fraction(maturity, valuation);
//! assert!((back + 1.0).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_lossless)]

pub mod daycounts;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::daycounts::{DayCount, DayCountConvention};
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{Currency, Date};
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use types::{Currency, Date};
