//! Actual/Actual ISDA day count convention.

use super::DayCount;
use crate::types::Date;

/// Actual/Actual ISDA day count convention.
///
/// The period is split by calendar year; days falling in a leap year count
/// against 366, the rest against 365.
///
/// $$\text{Year Fraction} = \frac{\text{Days in non-leap years}}{365} + \frac{\text{Days in leap years}}{366}$$
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActActIsda;

impl ActActIsda {
    fn forward_fraction(start: Date, end: Date) -> f64 {
        let mut total = 0.0;
        let mut current = start;

        while current.year() < end.year() {
            let next_year = current.year() + 1;
            let Ok(year_start) = Date::from_ymd(next_year, 1, 1) else {
                break;
            };
            total += current.days_between(&year_start) as f64 / f64::from(current.days_in_year());
            current = year_start;
        }

        total + current.days_between(&end) as f64 / f64::from(current.days_in_year())
    }
}

impl DayCount for ActActIsda {
    fn name(&self) -> &'static str {
        "ACT/ACT ISDA"
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        if end < start {
            -Self::forward_fraction(end, start)
        } else {
            Self::forward_fraction(start, end)
        }
    }
}
