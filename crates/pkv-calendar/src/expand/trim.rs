use chrono::NaiveDate;

use crate::model::Occurrence;

/// ## Summary
/// Keeps the occurrences dated within `[start, end]`, both bounds inclusive.
///
/// Unlike cycle expansion, which treats its end as exclusive, this operates on
/// corrected occurrences for display.
#[must_use]
pub fn trim(mut occurrences: Vec<Occurrence>, start: NaiveDate, end: NaiveDate) -> Vec<Occurrence> {
    let before = occurrences.len();
    occurrences.retain(|occurrence| (start..=end).contains(&occurrence.date));

    tracing::trace!(
        %start,
        %end,
        removed = before - occurrences.len(),
        "Trimmed occurrences"
    );
    occurrences
}
