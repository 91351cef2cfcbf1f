use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{deserialize_date, is_zero};

/// A point correction to a cycle's generated dates.
///
/// A `duration` of zero cancels whatever happens on `date`; any other duration
/// replaces it (or adds an event where the cycle produced none).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exception {
    #[serde(deserialize_with = "deserialize_date")]
    pub date: NaiveDate,
    /// Seconds after midnight.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub begin: u32,
    /// Seconds, `0` to cancel.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub duration: u32,
    #[serde(
        rename = "locationId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub location_id: Option<String>,
}

impl Exception {
    /// Cancels the occurrence on `date` without a replacement.
    #[must_use]
    pub fn cancel(date: NaiveDate) -> Self {
        Self {
            date,
            begin: 0,
            duration: 0,
            location_id: None,
        }
    }

    /// Replaces (or adds) the occurrence on `date`.
    #[must_use]
    pub fn reschedule(date: NaiveDate, begin: u32, duration: u32) -> Self {
        Self {
            date,
            begin,
            duration,
            location_id: None,
        }
    }

    /// Sets the location of the replacement occurrence.
    #[must_use]
    pub fn with_location(mut self, location_id: impl Into<String>) -> Self {
        self.location_id = Some(location_id.into());
        self
    }

    #[must_use]
    pub const fn is_cancellation(&self) -> bool {
        self.duration == 0
    }
}
