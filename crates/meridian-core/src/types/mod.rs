//! Domain types.
//!
//! - [`Date`]: Calendar date for financial calculations
//! - [`Currency`]: ISO currency codes

mod currency;
mod date;

pub use currency::Currency;
pub use date::Date;
