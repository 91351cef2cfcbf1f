//! Value types exchanged with the recurrence engine.
//!
//! Field names on the wire follow the platform API (`startdate`, `locationId`, ...);
//! zero integers and missing location ids are omitted when serializing. Dates are
//! written as `YYYY-MM-DD` and read from either that or an RFC 3339 timestamp, the
//! form the platform stores.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, de};

mod cycle;
mod exception;
mod occurrence;

pub use cycle::{Cycle, CycleMode};
pub use exception::Exception;
pub use occurrence::Occurrence;

/// Seconds in one wall-clock day; `begin` offsets must stay below this.
pub const SECONDS_PER_DAY: u32 = 86_400;

pub(crate) fn is_zero<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}

/// Reads a plain date, or the calendar date of an RFC 3339 timestamp in its own
/// offset (`2023-03-02T00:00:00+01:00` is March 2nd).
pub(crate) fn deserialize_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;

    raw.parse::<NaiveDate>()
        .or_else(|_| DateTime::parse_from_rfc3339(&raw).map(|dt| dt.date_naive()))
        .map_err(|e| de::Error::custom(format!("invalid date {raw:?}: {e}")))
}
