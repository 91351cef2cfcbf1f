use thiserror::Error;

/// Recurrence rule errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("Invalid cycle: {0}")]
    InvalidCycle(String),
}

pub type CalendarResult<T> = std::result::Result<T, CalendarError>;
