//! Command-line collaborator for the recurrence engine: reads a training schedule
//! and a window as JSON, prints the resulting occurrences.

pub mod error;
pub mod request;
