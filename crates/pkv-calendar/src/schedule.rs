//! All cycles of one training, corrected by one set of exceptions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, CalendarResult};
use crate::expand::{apply_exceptions, compute_days, to_occurrences, trim};
use crate::model::{Cycle, Exception, Occurrence};

/// ## Summary
/// The recurrence part of a training: several cycles (say every Tuesday plus the
/// first Saturday of the month) sharing one list of exceptions.
///
/// An exception replaces every occurrence on its date, whichever cycle produced it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingSchedule {
    #[serde(default)]
    pub cycles: Vec<Cycle>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exceptions: Vec<Exception>,
}

impl TrainingSchedule {
    #[must_use]
    pub fn new(cycles: Vec<Cycle>, exceptions: Vec<Exception>) -> Self {
        Self { cycles, exceptions }
    }

    /// ## Summary
    /// Computes the occurrences of every cycle within the window, corrected by the
    /// schedule's exceptions, sorted by date and start time.
    ///
    /// Window semantics match [`crate::occurrences_in_window`].
    #[must_use]
    pub fn occurrences_in_window(&self, start: NaiveDate, end: NaiveDate) -> Vec<Occurrence> {
        let base: Vec<Occurrence> = self
            .cycles
            .iter()
            .flat_map(|cycle| to_occurrences(cycle, compute_days(cycle, start, end)))
            .collect();

        tracing::trace!(
            cycles = self.cycles.len(),
            occurrences = base.len(),
            "Expanded training schedule"
        );

        trim(apply_exceptions(base, &self.exceptions, start, end), start, end)
    }

    /// Whether any cycle passes the weekday query filter.
    #[must_use]
    pub fn matches_weekday(&self, weekday: u8) -> bool {
        self.cycles.iter().any(|cycle| cycle.matches_weekday(weekday))
    }

    /// ## Summary
    /// Validates every cycle.
    ///
    /// ## Errors
    /// Returns the first `CalendarError::InvalidCycle`, prefixed with the index of
    /// the offending cycle.
    pub fn validate(&self) -> CalendarResult<()> {
        for (index, cycle) in self.cycles.iter().enumerate() {
            cycle.validate().map_err(|err| {
                let CalendarError::InvalidCycle(reason) = err;
                CalendarError::InvalidCycle(format!("cycle {index}: {reason}"))
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, month, day).expect("valid test date")
    }

    fn year_2023() -> Cycle {
        Cycle::new(date(1, 1), date(12, 31))
    }

    fn schedule(exceptions: Vec<Exception>) -> TrainingSchedule {
        TrainingSchedule::new(
            vec![
                // every Tuesday 18:00-19:30
                year_2023().on(2, 0).at(64_800, 5400),
                // first Saturday of the month 10:00-12:00 in the park
                year_2023()
                    .on(6, 1)
                    .at(36_000, 7200)
                    .with_location("location/park"),
            ],
            exceptions,
        )
    }

    #[test_log::test]
    fn test_cycles_are_merged_in_date_order() {
        let got = schedule(Vec::new()).occurrences_in_window(date(3, 1), date(3, 15));

        // March 2023: Tuesdays 7 and 14, first Saturday the 4th
        assert_eq!(
            got.iter().map(|o| o.date).collect::<Vec<_>>(),
            vec![date(3, 4), date(3, 7), date(3, 14)]
        );
        assert_eq!(got[0].location_id.as_deref(), Some("location/park"));
        assert_eq!(got[1].begin, 64_800);
    }

    #[test]
    fn test_exceptions_apply_across_cycles() {
        let got = schedule(vec![
            Exception::cancel(date(3, 4)),
            Exception::reschedule(date(3, 7), 61_200, 3600),
        ])
        .occurrences_in_window(date(3, 1), date(3, 15));

        assert_eq!(got.len(), 2);
        assert_eq!((got[0].date, got[0].begin), (date(3, 7), 61_200));
        assert_eq!((got[1].date, got[1].begin), (date(3, 14), 64_800));
    }

    #[test]
    fn test_same_day_cycles_sorted_by_begin() {
        let schedule = TrainingSchedule::new(
            vec![year_2023().on(6, 0).at(50_000, 60), year_2023().on(6, 0).at(40_000, 60)],
            Vec::new(),
        );

        let got = schedule.occurrences_in_window(date(3, 4), date(3, 5));

        assert_eq!(
            got.iter().map(|o| o.begin).collect::<Vec<_>>(),
            vec![40_000, 50_000]
        );
    }

    #[test]
    fn test_matches_weekday() {
        let schedule = schedule(Vec::new());
        assert!(schedule.matches_weekday(2));
        assert!(schedule.matches_weekday(6));
        assert!(!schedule.matches_weekday(5));
        assert!(!TrainingSchedule::default().matches_weekday(5));
    }

    #[test]
    fn test_validate_reports_cycle_index() {
        let mut schedule = schedule(Vec::new());
        schedule.cycles.push(year_2023().on(9, 0));

        let err = schedule.validate().unwrap_err();
        assert!(err.to_string().contains("cycle 2: weekday"), "{err}");
    }

    #[test]
    fn test_deserializes_without_exceptions() {
        let schedule: TrainingSchedule = serde_json::from_str(
            r#"{ "cycles": [{ "weekday": 5, "startdate": "2023-01-01", "enddate": "2023-12-31" }] }"#,
        )
        .expect("schedule should deserialize");

        assert_eq!(schedule.cycles.len(), 1);
        assert!(schedule.exceptions.is_empty());
    }
}
