use chrono::NaiveDate;
use roombook_core::errors::{BookingError, BookingResult, ExpansionError};

#[test]
fn test_booking_error_display() {
    let not_found = BookingError::NotFound("Room not found".to_string());
    let validation = BookingError::Validation("Capacity must be at least 1".to_string());
    let authentication = BookingError::Authentication("Unauthorized".to_string());
    let authorization = BookingError::Authorization("Forbidden".to_string());
    let database = BookingError::Database(eyre::eyre!("Database connection failed"));

    assert_eq!(not_found.to_string(), "Resource not found: Room not found");
    assert_eq!(
        validation.to_string(),
        "Validation error: Capacity must be at least 1"
    );
    assert_eq!(authentication.to_string(), "Authentication error: Unauthorized");
    assert_eq!(authorization.to_string(), "Authorization error: Forbidden");
    assert!(database.to_string().contains("Database error:"));
}

#[test]
fn test_expansion_error_display() {
    assert_eq!(
        ExpansionError::InvalidTimeFormat("25:00".to_string()).to_string(),
        "Invalid time format: 25:00"
    );
    assert_eq!(
        ExpansionError::InvalidWeekday("Funday".to_string()).to_string(),
        "Invalid weekday: Funday"
    );

    let date = NaiveDate::from_ymd_opt(2025, 3, 18).unwrap();
    assert!(
        ExpansionError::DateOutOfRange(date, 7)
            .to_string()
            .contains("2025-03-18")
    );
}

#[test]
fn test_expansion_error_is_transparent() {
    let error: BookingError = ExpansionError::InvalidTimeFormat("ab:cd".to_string()).into();

    assert!(matches!(
        error,
        BookingError::Expansion(ExpansionError::InvalidTimeFormat(_))
    ));
    assert_eq!(error.to_string(), "Invalid time format: ab:cd");
}

#[test]
fn test_error_conversion() {
    let booking_error: BookingError = eyre::eyre!("connection reset").into();

    assert!(matches!(booking_error, BookingError::Database(_)));
    assert!(booking_error.to_string().contains("connection reset"));
}

#[test]
fn test_booking_result() {
    let result: BookingResult<i32> = Ok(42);
    assert_eq!(result.unwrap(), 42);

    let result: BookingResult<i32> = Err(BookingError::NotFound("Not found".to_string()));
    assert!(result.is_err());
}
