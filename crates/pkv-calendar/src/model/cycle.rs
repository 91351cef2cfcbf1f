use std::fmt;

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::{SECONDS_PER_DAY, deserialize_date, is_zero};
use crate::error::{CalendarError, CalendarResult};

/// ## Summary
/// A recurring event pattern.
///
/// `weekday` is `0` for "any day", `1..=6` for Monday to Saturday and `7` for
/// Sunday. `monthday` is `0` for plain daily/weekly cycles; otherwise it selects a
/// position in the month, counted from the start when positive and from the end
/// when negative (`-1` is the last). Combined with a weekday it counts that
/// weekday only ("2nd Sunday"), without one it is a literal day number.
///
/// `interval` scales the step (days, weeks or months depending on the mode);
/// `0` behaves like `1`. `end_date` is exclusive.
///
/// Examples:
/// - every day: `weekday = 0, monthday = 0`
/// - every Friday: `weekday = 5, monthday = 0`
/// - every other Sunday: `weekday = 7, monthday = 0, interval = 2`
/// - first Thursday of the month: `weekday = 4, monthday = 1`
/// - second-to-last Wednesday every two months: `weekday = 3, monthday = -2, interval = 2`
/// - 3rd of every month: `weekday = 0, monthday = 3`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cycle {
    #[serde(default, skip_serializing_if = "is_zero")]
    pub weekday: u8,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub monthday: i8,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub interval: u32,
    /// Seconds after midnight.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub begin: u32,
    /// Seconds.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub duration: u32,
    /// First possible day of the cycle.
    #[serde(rename = "startdate", deserialize_with = "deserialize_date")]
    pub start_date: NaiveDate,
    /// First day the cycle no longer continues.
    #[serde(rename = "enddate", deserialize_with = "deserialize_date")]
    pub end_date: NaiveDate,
    #[serde(
        rename = "locationId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub location_id: Option<String>,
}

/// How a cycle advances, derived from which of `weekday`/`monthday` are set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleMode {
    /// Every `interval` days.
    Daily,
    /// Every `interval` weeks on the given weekday.
    Weekly(Weekday),
    /// Once every `interval` months at the given position.
    Monthly {
        monthday: i8,
        weekday: Option<Weekday>,
    },
}

impl Cycle {
    /// Creates a daily cycle over `[start_date, end_date)`; adjust the public
    /// fields for other patterns.
    #[must_use]
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            weekday: 0,
            monthday: 0,
            interval: 0,
            begin: 0,
            duration: 0,
            start_date,
            end_date,
            location_id: None,
        }
    }

    /// Sets the weekday and month position.
    #[must_use]
    pub fn on(mut self, weekday: u8, monthday: i8) -> Self {
        self.weekday = weekday;
        self.monthday = monthday;
        self
    }

    #[must_use]
    pub fn every(mut self, interval: u32) -> Self {
        self.interval = interval;
        self
    }

    /// Sets start offset and length, both in seconds.
    #[must_use]
    pub fn at(mut self, begin: u32, duration: u32) -> Self {
        self.begin = begin;
        self.duration = duration;
        self
    }

    #[must_use]
    pub fn with_location(mut self, location_id: impl Into<String>) -> Self {
        self.location_id = Some(location_id.into());
        self
    }

    /// Step multiplier with `0` read as `1`.
    #[must_use]
    pub fn effective_interval(&self) -> u32 {
        self.interval.max(1)
    }

    /// The constrained weekday, `None` when any day qualifies.
    ///
    /// Values outside `0..=7` are not valid cycles; they read as unconstrained.
    #[must_use]
    pub fn target_weekday(&self) -> Option<Weekday> {
        match self.weekday {
            1..=7 => Weekday::try_from(self.weekday - 1).ok(),
            _ => None,
        }
    }

    #[must_use]
    pub fn mode(&self) -> CycleMode {
        if self.monthday != 0 {
            return CycleMode::Monthly {
                monthday: self.monthday,
                weekday: self.target_weekday(),
            };
        }
        match self.target_weekday() {
            Some(weekday) => CycleMode::Weekly(weekday),
            None => CycleMode::Daily,
        }
    }

    /// ## Summary
    /// Weekday query filter: trainings that "also happen on Friday" are those with
    /// a Friday cycle or an unconstrained one.
    #[must_use]
    pub fn matches_weekday(&self, weekday: u8) -> bool {
        self.weekday == 0 || self.weekday == weekday
    }

    /// ## Summary
    /// Checks the rule for shapes the engine accepts but that make no sense to
    /// store. The engine itself never calls this.
    ///
    /// ## Errors
    /// Returns `CalendarError::InvalidCycle` if:
    /// - `weekday` is above 7
    /// - `monthday` is outside `-31..=31`, or outside `-5..=5` with a weekday set
    /// - `begin` is not within one day
    /// - `end_date` is not after `start_date`
    /// - a daily cycle has an interval divisible by 7 (use a weekday instead)
    pub fn validate(&self) -> CalendarResult<()> {
        if self.weekday > 7 {
            return Err(invalid(format!(
                "weekday must be within 0..=7, got {}",
                self.weekday
            )));
        }

        let position = self.monthday.unsigned_abs();
        if position > 31 {
            return Err(invalid(format!(
                "monthday must be within -31..=31, got {}",
                self.monthday
            )));
        }
        if self.weekday != 0 && position > 5 {
            return Err(invalid(format!(
                "a month has at most five of each weekday, got monthday {}",
                self.monthday
            )));
        }

        if self.begin >= SECONDS_PER_DAY {
            return Err(invalid(format!(
                "begin must be below {SECONDS_PER_DAY} seconds, got {}",
                self.begin
            )));
        }

        if self.end_date <= self.start_date {
            return Err(invalid(format!(
                "enddate {} must be after startdate {}",
                self.end_date, self.start_date
            )));
        }

        if self.weekday == 0
            && self.monthday == 0
            && self.interval != 0
            && self.interval % 7 == 0
        {
            return Err(invalid(format!(
                "every {} days is a weekly cycle; set a weekday instead",
                self.interval
            )));
        }

        Ok(())
    }
}

fn invalid(reason: String) -> CalendarError {
    CalendarError::InvalidCycle(reason)
}

impl fmt::Display for Cycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let interval = self.effective_interval();
        match self.mode() {
            CycleMode::Daily if interval == 1 => f.write_str("every day"),
            CycleMode::Daily => write!(f, "every {interval} days"),
            CycleMode::Weekly(weekday) if interval == 1 => {
                write!(f, "every {}", weekday_name(weekday))
            }
            CycleMode::Weekly(weekday) => write!(
                f,
                "every {} week on {}",
                Ordinal(interval),
                weekday_name(weekday)
            ),
            CycleMode::Monthly { monthday, weekday } => {
                let position = u32::from(monthday.unsigned_abs());
                let subject = weekday.map_or("day", weekday_name);
                match (monthday > 0, weekday) {
                    (true, None) => write!(f, "on day {position}")?,
                    (true, Some(_)) => write!(f, "on the {} {subject}", Ordinal(position))?,
                    (false, _) if position == 1 => write!(f, "on the last {subject}")?,
                    (false, _) => write!(f, "on the {}-to-last {subject}", Ordinal(position))?,
                }
                if interval == 1 {
                    f.write_str(" of every month")
                } else {
                    write!(f, " of every {} month", Ordinal(interval))
                }
            }
        }
    }
}

const fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// English ordinal: 1st, 2nd, 3rd, 4th, 11th, 22nd ...
struct Ordinal(u32);

impl fmt::Display for Ordinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffix = if (11..=13).contains(&(self.0 % 100)) {
            "th"
        } else {
            match self.0 % 10 {
                1 => "st",
                2 => "nd",
                3 => "rd",
                _ => "th",
            }
        };
        write!(f, "{}{suffix}", self.0)
    }
}
