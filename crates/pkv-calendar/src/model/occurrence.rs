use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use serde::{Deserialize, Serialize};

use super::{Exception, deserialize_date, is_zero};

/// A single materialized instance of a training.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    #[serde(deserialize_with = "deserialize_date")]
    pub date: NaiveDate,
    /// Seconds after midnight.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub begin: u32,
    /// Seconds.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub duration: u32,
    #[serde(
        rename = "locationId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub location_id: Option<String>,
}

impl Occurrence {
    /// Wall-clock start, `None` if it falls outside chrono's range.
    #[must_use]
    pub fn starts_at(&self) -> Option<NaiveDateTime> {
        self.date
            .and_time(NaiveTime::MIN)
            .checked_add_signed(TimeDelta::seconds(i64::from(self.begin)))
    }

    /// Wall-clock end (`starts_at + duration`).
    #[must_use]
    pub fn ends_at(&self) -> Option<NaiveDateTime> {
        self.starts_at()?
            .checked_add_signed(TimeDelta::seconds(i64::from(self.duration)))
    }
}

impl From<&Exception> for Occurrence {
    fn from(exception: &Exception) -> Self {
        Self {
            date: exception.date,
            begin: exception.begin,
            duration: exception.duration,
            location_id: exception.location_id.clone(),
        }
    }
}
