use thiserror::Error;

/// Application-level errors (request handling)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    CalendarError(#[from] pkv_calendar::error::CalendarError),

    #[error(transparent)]
    CoreError(#[from] pkv_core::error::CoreError),

    #[error("Failed to read request: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Malformed request: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Window end {end} must be after start {start}")]
    EmptyWindow {
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
    },

    #[error("Window of {days} days exceeds the limit of {max} days")]
    WindowTooLarge { days: i64, max: u32 },
}

pub type AppResult<T> = std::result::Result<T, AppError>;
