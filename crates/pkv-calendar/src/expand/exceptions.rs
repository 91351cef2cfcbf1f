use std::collections::HashSet;

use chrono::NaiveDate;

use crate::model::{Exception, Occurrence};

/// ## Summary
/// Overlays point exceptions onto generated occurrences.
///
/// Only exceptions dated within `[start, end]` (inclusive) take part. Every
/// occurrence on a date named by such an exception is removed; exceptions with a
/// non-zero duration then add an occurrence of their own, so several exceptions on
/// one date reschedule it into several events and an exception on an empty date
/// is a pure addition. The result is sorted by date, then by start time.
#[must_use]
pub fn apply_exceptions(
    occurrences: Vec<Occurrence>,
    exceptions: &[Exception],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<Occurrence> {
    let in_window: Vec<&Exception> = exceptions
        .iter()
        .filter(|exception| (start..=end).contains(&exception.date))
        .collect();
    let touched: HashSet<NaiveDate> = in_window.iter().map(|exception| exception.date).collect();

    let mut merged: Vec<Occurrence> = occurrences
        .into_iter()
        .filter(|occurrence| !touched.contains(&occurrence.date))
        .collect();
    let retained = merged.len();

    merged.extend(
        in_window
            .iter()
            .filter(|exception| !exception.is_cancellation())
            .map(|exception| Occurrence::from(*exception)),
    );
    merged.sort_by_key(|occurrence| (occurrence.date, occurrence.begin));

    tracing::trace!(
        exceptions = in_window.len(),
        ignored = exceptions.len() - in_window.len(),
        retained,
        added = merged.len() - retained,
        "Applied exceptions"
    );
    merged
}
