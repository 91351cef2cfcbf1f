//! Occurrence expansion for training cycles.
//!
//! The pipeline runs in four pure stages: [`compute_days`] walks the cycle,
//! [`to_occurrences`] materializes the dates, [`apply_exceptions`] overlays
//! corrections and [`trim`] clips the result for display.

mod exceptions;
mod materialize;
mod month;
mod trim;
mod walker;

use chrono::NaiveDate;

pub use exceptions::apply_exceptions;
pub use materialize::to_occurrences;
pub use month::{day_of_month_for, days_in_month};
pub use trim::trim;
pub use walker::{align_to_first_match, compute_days, next_match};

use crate::model::{Cycle, Exception, Occurrence};

/// ## Summary
/// Computes all occurrences of `cycle` within the window, corrected by
/// `exceptions`, sorted by date and start time.
///
/// Cycle dates are taken from `[start, end)`; exceptions and the final trim use
/// `[start, end]`, so an exception dated `end` is still shown.
///
/// ## Side Effects
///
/// None - this is a pure function that performs expansion in memory.
#[must_use]
pub fn occurrences_in_window(
    cycle: &Cycle,
    exceptions: &[Exception],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<Occurrence> {
    let dates = compute_days(cycle, start, end);
    let base = to_occurrences(cycle, dates);
    let corrected = apply_exceptions(base, exceptions, start, end);
    trim(corrected, start, end)
}
