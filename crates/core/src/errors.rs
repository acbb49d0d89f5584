use chrono::NaiveDate;
use thiserror::Error;

/// Failures raised while expanding a weekly template into dated slots.
///
/// Every variant aborts the whole expansion; no slots are returned alongside
/// an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpansionError {
    #[error("Invalid weekday: {0}")]
    InvalidWeekday(String),

    #[error("Invalid time format: {0}")]
    InvalidTimeFormat(String),

    #[error("Date out of range: {0} + {1} days")]
    DateOutOfRange(NaiveDate, u64),
}

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Expansion(#[from] ExpansionError),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Authorization error: {0}")]
    Authorization(String),

    #[error("Database error: {0}")]
    Database(#[from] eyre::Report),
}

pub type BookingResult<T> = Result<T, BookingError>;
