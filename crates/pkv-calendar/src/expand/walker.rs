//! Stepping through the dates a cycle selects.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};

use super::month::day_of_month_for;
use crate::model::{Cycle, CycleMode};

/// ## Summary
/// Months searched for a qualifying month before giving up.
///
/// One Gregorian cycle: a month position that does not occur within it never occurs.
const MONTH_SEARCH_LIMIT: u32 = 4800;

/// ## Summary
/// Moves `anchor` forward to the first date matching the cycle's weekday and
/// month position, ignoring `interval`.
///
/// Returns `None` if no such date is representable.
#[must_use]
pub fn align_to_first_match(cycle: &Cycle, anchor: NaiveDate) -> Option<NaiveDate> {
    match cycle.mode() {
        CycleMode::Daily => Some(anchor),
        CycleMode::Weekly(target) => {
            let ahead = (7 + target.num_days_from_monday()
                - anchor.weekday().num_days_from_monday())
                % 7;
            anchor.checked_add_days(Days::new(u64::from(ahead)))
        }
        CycleMode::Monthly { monthday, weekday } => {
            let this_month = day_of_month_for(anchor.year(), anchor.month(), monthday, weekday);
            match this_month {
                Some(day) if day >= anchor.day() => anchor.with_day(day),
                _ => search_months(anchor.with_day(1)?, 1, monthday, weekday),
            }
        }
    }
}

/// ## Summary
/// Advances `current` to the next date the cycle selects.
///
/// Daily cycles step `interval` days, weekly cycles `interval` weeks. Monthly
/// cycles jump `interval` months and resolve the month position there; months
/// without that position are skipped.
#[must_use]
pub fn next_match(cycle: &Cycle, current: NaiveDate) -> Option<NaiveDate> {
    match cycle.mode() {
        CycleMode::Daily | CycleMode::Weekly(_) => {
            current.checked_add_days(Days::new(fixed_step_days(cycle)?))
        }
        CycleMode::Monthly { monthday, weekday } => search_months(
            current.with_day(1)?,
            cycle.effective_interval(),
            monthday,
            weekday,
        ),
    }
}

/// ## Summary
/// Computes the dates a cycle selects within `[start, end)`.
///
/// Dates before `start` are skipped, never emitted. Both `end` and the cycle's own
/// `end_date` are exclusive bounds, so a window wider than the cycle yields exactly
/// the cycle's dates.
#[must_use]
pub fn compute_days(cycle: &Cycle, start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut days = Vec::new();

    let Some(mut current) = align_to_first_match(cycle, cycle.start_date)
        .and_then(|first| fast_forward(cycle, first, start))
    else {
        tracing::trace!(%start, %end, "Cycle has no date on or after window start");
        return days;
    };

    while current < end && current < cycle.end_date {
        days.push(current);
        match next_match(cycle, current) {
            Some(next) => current = next,
            None => break,
        }
    }

    tracing::trace!(
        %start,
        %end,
        count = days.len(),
        "Computed cycle days"
    );
    days
}

/// Skips matches before `start`. Fixed-step cycles jump there directly.
fn fast_forward(cycle: &Cycle, mut current: NaiveDate, start: NaiveDate) -> Option<NaiveDate> {
    if current >= start {
        return Some(current);
    }

    if let Some(step) = fixed_step_days(cycle) {
        let behind = u64::try_from(start.signed_duration_since(current).num_days()).ok()?;
        return current.checked_add_days(Days::new(behind.div_ceil(step) * step));
    }

    while current < start {
        current = next_match(cycle, current)?;
    }
    Some(current)
}

/// Step length in days for daily and weekly cycles, `None` for monthly ones.
fn fixed_step_days(cycle: &Cycle) -> Option<u64> {
    let interval = u64::from(cycle.effective_interval());
    match cycle.mode() {
        CycleMode::Daily => Some(interval),
        CycleMode::Weekly(_) => Some(7 * interval),
        CycleMode::Monthly { .. } => None,
    }
}

/// Probes the months `step`, `2 * step`, ... after `month_start` for the first
/// that contains the month position.
fn search_months(
    month_start: NaiveDate,
    step: u32,
    monthday: i8,
    weekday: Option<Weekday>,
) -> Option<NaiveDate> {
    let mut month = month_start;
    for _ in 0..MONTH_SEARCH_LIMIT.div_ceil(step) {
        month = month.checked_add_months(Months::new(step))?;
        if let Some(day) = day_of_month_for(month.year(), month.month(), monthday, weekday) {
            return month.with_day(day);
        }
    }

    tracing::trace!(
        monthday,
        ?weekday,
        step,
        "Month position never occurs, stopping"
    );
    None
}
