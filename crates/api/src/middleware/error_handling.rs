//! # Error Handling Middleware
//!
//! This module maps Roombook's domain errors to HTTP status codes and JSON
//! error bodies, so every handler reports failures the same way.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use roombook_core::errors::{BookingError, ExpansionError};
use serde_json::json;

/// Application error wrapper that provides HTTP status code mapping
///
/// `AppError` wraps `BookingError` and implements `IntoResponse`. Template
/// expansion failures are input errors and map to `400 Bad Request`.
///
/// # Example
///
/// ```
/// use axum::Json;
/// use roombook_api::middleware::error_handling::AppError;
/// use roombook_core::errors::BookingError;
///
/// async fn handler(capacity: i32) -> Result<Json<i32>, AppError> {
///     if capacity < 1 {
///         return Err(AppError(BookingError::Validation(
///             "Capacity must be at least 1".to_string(),
///         )));
///     }
///     Ok(Json(capacity))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub BookingError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            BookingError::NotFound(_) => StatusCode::NOT_FOUND,
            BookingError::Validation(_) => StatusCode::BAD_REQUEST,
            BookingError::Expansion(_) => StatusCode::BAD_REQUEST,
            BookingError::Authentication(_) => StatusCode::UNAUTHORIZED,
            BookingError::Authorization(_) => StatusCode::FORBIDDEN,
            BookingError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Converts application errors to HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(error = %self.0, "Request failed");
        }

        // Get the error message and format as JSON
        let message = self.0.to_string();
        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}

/// Allows `?` on `BookingResult` inside handlers
impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        AppError(err)
    }
}

impl From<ExpansionError> for AppError {
    fn from(err: ExpansionError) -> Self {
        AppError(BookingError::Expansion(err))
    }
}

/// Wraps infrastructure failures from the store layer as database errors
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(BookingError::Database(err))
    }
}

/// Maps a BookingError to an HTTP response
pub fn map_error(err: BookingError) -> Response {
    AppError(err).into_response()
}
