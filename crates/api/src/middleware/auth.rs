//! # Authentication Module
//!
//! Request authentication for the Roombook API. Callers identify themselves
//! with two headers:
//!
//! - `x-user-id`: the external identity id of the user
//! - `Authorization: Bearer <token>`: an API token issued to that user
//!
//! Tokens are stored as Argon2 hashes and never persisted in plain text.
//! Creating rooms additionally requires the `ADMIN` role.

use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};
use axum::http::{HeaderMap, header::AUTHORIZATION};
use eyre::Result;
use roombook_core::errors::BookingError;
use roombook_db::{models::DbUser, store::UserStore};
use tracing::debug;

use super::error_handling::AppError;

/// Header carrying the caller's external identity id
pub const USER_ID_HEADER: &str = "x-user-id";

/// Hashes an API token using the Argon2 algorithm
///
/// A fresh random salt is generated per call and the result is returned in
/// PHC string format (algorithm, parameters, salt and hash in one string).
///
/// # Example
///
/// ```rust
/// use roombook_api::middleware::auth::{hash_token, verify_token};
///
/// let hashed = hash_token("s3cret").unwrap();
/// assert!(verify_token("s3cret", &hashed));
/// ```
pub fn hash_token(token: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);

    let token_hash = Argon2::default()
        .hash_password(token.as_bytes(), &salt)
        .map_err(|e| eyre::eyre!("Error hashing token: {}", e))?
        .to_string();

    Ok(token_hash)
}

/// Checks `token` against a stored PHC hash. A malformed hash never verifies.
pub fn verify_token(token: &str, token_hash: &str) -> bool {
    match PasswordHash::new(token_hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(token.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

fn unauthorized() -> AppError {
    AppError(BookingError::Authentication("Unauthorized".to_string()))
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Resolves the calling user from the request headers
///
/// # Errors
///
/// * `BookingError::Authentication` - headers missing, user unknown, or token rejected
/// * `BookingError::Database` - the user lookup failed
pub async fn authenticate(users: &dyn UserStore, headers: &HeaderMap) -> Result<DbUser, AppError> {
    let external_id = headers
        .get(USER_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or_else(unauthorized)?;
    let token = bearer_token(headers).ok_or_else(unauthorized)?;

    let user = users
        .get_user_by_external_id(external_id)
        .await?
        .ok_or_else(|| {
            debug!("Unknown user: external_id={}", external_id);
            unauthorized()
        })?;

    let token_hash = user.token_hash.as_deref().ok_or_else(unauthorized)?;
    if !verify_token(token, token_hash) {
        debug!("Token rejected: external_id={}", external_id);
        return Err(unauthorized());
    }

    Ok(user)
}

/// Like [`authenticate`], but additionally requires the `ADMIN` role
///
/// # Errors
///
/// * `BookingError::Authorization` - the user is authenticated but not an admin
pub async fn require_admin(users: &dyn UserStore, headers: &HeaderMap) -> Result<DbUser, AppError> {
    let user = authenticate(users, headers).await?;

    if !user.is_admin() {
        return Err(AppError(BookingError::Authorization("Forbidden".to_string())));
    }

    Ok(user)
}
