//! Occurrence requests as read from the command line.

use std::io::Read;

use chrono::{Days, NaiveDate};
use pkv_calendar::{Occurrence, TrainingSchedule};
use pkv_core::config::CalendarConfig;
use pkv_core::error::CoreError;
use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// A schedule plus the window to expand it in.
///
/// ```json
/// {
///   "cycles": [{ "weekday": 5, "begin": 64800, "duration": 5400,
///                "startdate": "2023-01-01", "enddate": "2023-12-31" }],
///   "exceptions": [{ "date": "2023-03-10" }],
///   "start": "2023-03-01",
///   "end": "2023-04-01"
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct OccurrenceRequest {
    #[serde(flatten)]
    pub schedule: TrainingSchedule,
    pub start: NaiveDate,
    /// Defaults to `start + calendar.default_window_days`.
    #[serde(default)]
    pub end: Option<NaiveDate>,
}

impl OccurrenceRequest {
    /// ## Summary
    /// Parses a request from JSON.
    ///
    /// ## Errors
    /// Returns an error if the reader fails or the JSON does not describe a request.
    pub fn from_reader(reader: impl Read) -> AppResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// ## Summary
    /// Resolves the requested window against the configured limits.
    ///
    /// ## Errors
    /// Returns an error if the window is empty, cannot be represented, or is longer
    /// than `calendar.max_window_days`.
    pub fn window(&self, calendar: &CalendarConfig) -> AppResult<(NaiveDate, NaiveDate)> {
        let end = match self.end {
            Some(end) => end,
            None => self
                .start
                .checked_add_days(Days::new(u64::from(calendar.default_window_days)))
                .ok_or_else(|| {
                    CoreError::InvalidInput(format!("no default window after {}", self.start))
                })?,
        };

        if end <= self.start {
            return Err(AppError::EmptyWindow {
                start: self.start,
                end,
            });
        }

        let days = end.signed_duration_since(self.start).num_days();
        if days > i64::from(calendar.max_window_days) {
            return Err(AppError::WindowTooLarge {
                days,
                max: calendar.max_window_days,
            });
        }

        Ok((self.start, end))
    }
}

/// ## Summary
/// Validates the request and computes its occurrences.
///
/// ## Errors
/// Returns an error if any cycle is invalid or the window is rejected.
pub fn handle(
    request: &OccurrenceRequest,
    calendar: &CalendarConfig,
) -> AppResult<Vec<Occurrence>> {
    request.schedule.validate()?;
    let (start, end) = request.window(calendar)?;

    tracing::debug!(
        %start,
        %end,
        cycles = request.schedule.cycles.len(),
        exceptions = request.schedule.exceptions.len(),
        "Computing occurrences"
    );

    let occurrences = request.schedule.occurrences_in_window(start, end);

    tracing::info!(count = occurrences.len(), "Occurrences computed");
    Ok(occurrences)
}
