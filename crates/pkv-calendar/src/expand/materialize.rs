use chrono::NaiveDate;

use crate::model::{Cycle, Occurrence};

/// ## Summary
/// Turns cycle dates into occurrences carrying the cycle's start offset, duration
/// and location. One occurrence per date, in input order.
#[must_use]
pub fn to_occurrences(
    cycle: &Cycle,
    dates: impl IntoIterator<Item = NaiveDate>,
) -> Vec<Occurrence> {
    dates
        .into_iter()
        .map(|date| Occurrence {
            date,
            begin: cycle.begin,
            duration: cycle.duration,
            location_id: cycle.location_id.clone(),
        })
        .collect()
}
