//! Recurrence engine for training schedules.
//!
//! Turns a [`Cycle`] (a structured recurrence rule) into concrete dates within a
//! window, materializes them as [`Occurrence`] records, overlays point
//! [`Exception`]s and clips the result for display.
//!
//! Every function here is pure: value types in, value types out.

pub mod error;
pub mod expand;
pub mod model;
pub mod schedule;

pub use expand::occurrences_in_window;
pub use model::{Cycle, CycleMode, Exception, Occurrence};
pub use schedule::TrainingSchedule;
