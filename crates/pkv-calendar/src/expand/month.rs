//! Day-of-month arithmetic for ordinal weekday constraints.

use chrono::{Datelike, Months, NaiveDate, Weekday};

/// Returns the number of days in a month, `None` for an invalid year/month.
#[must_use]
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    NaiveDate::from_ymd_opt(year, month, 1)?
        .checked_add_months(Months::new(1))?
        .pred_opt()
        .map(|last| last.day())
}

/// ## Summary
/// Resolves a month position to a concrete day of the month.
///
/// - `monthday > 0` without weekday: the literal day `monthday`
/// - `monthday > 0` with weekday: the `monthday`-th such weekday, counted from the 1st
/// - `monthday < 0` without weekday: counted back from the last day (`-1` is the last)
/// - `monthday < 0` with weekday: the `-monthday`-th such weekday, counted from the end
///
/// Returns `None` when the month has no such day (a fifth Monday in a month with
/// four, day 31 in April). `monthday == 0` selects no position and is a caller
/// error.
#[must_use]
pub fn day_of_month_for(
    year: i32,
    month: u32,
    monthday: i8,
    weekday: Option<Weekday>,
) -> Option<u32> {
    debug_assert!(monthday != 0, "monthday 0 has no day of month");

    let last = days_in_month(year, month)?;
    let position = u32::from(monthday.unsigned_abs());

    let day = match (monthday.signum(), weekday) {
        (1, None) => position,
        (-1, None) => (last + 1).checked_sub(position)?,
        (1, Some(target)) => nth_weekday(year, month, 1..=last, target, position)?,
        (-1, Some(target)) => nth_weekday(year, month, (1..=last).rev(), target, position)?,
        _ => return None,
    };

    (1..=last).contains(&day).then_some(day)
}

/// Walks `days` in order and returns the `position`-th day falling on `target`.
fn nth_weekday(
    year: i32,
    month: u32,
    days: impl Iterator<Item = u32>,
    target: Weekday,
    position: u32,
) -> Option<u32> {
    let skip = usize::try_from(position.checked_sub(1)?).ok()?;
    days.filter(|&day| {
        NaiveDate::from_ymd_opt(year, month, day).is_some_and(|date| date.weekday() == target)
    })
    .nth(skip)
}
