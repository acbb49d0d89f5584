//! # API Configuration Module
//!
//! This module handles loading and managing configuration for the Roombook API server.
//! It retrieves configuration values from environment variables and provides defaults
//! where appropriate.
//!
//! ## Environment Variables
//!
//! The following environment variables are used:
//!
//! - `API_HOST`: The host address to bind the server to (default: "0.0.0.0")
//! - `API_PORT`: The port to listen on (default: 3000)
//! - `DATABASE_URL`: PostgreSQL connection string (required)
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `API_CORS_ORIGINS`: Comma-separated list of allowed CORS origins
//! - `API_REQUEST_TIMEOUT_SECONDS`: Request timeout (default: 30)
//! - `SLOT_HORIZON_WEEKS`: Weeks of slots generated per room (default: 12)
//! - `SLOT_DURATION_MINUTES`: Length of each generated slot (default: 60)

use eyre::{Result, WrapErr, eyre};
use roombook_core::expander::{
    DEFAULT_HORIZON_WEEKS, DEFAULT_SLOT_DURATION_MINUTES, ExpansionConfig, MAX_HORIZON_WEEKS,
};
use std::env;
use tracing::Level;

/// Configuration for the Roombook API server
///
/// # Example
///
/// ```no_run
/// use eyre::Result;
/// use roombook_api::config::ApiConfig;
///
/// fn example() -> Result<()> {
///     let config = ApiConfig::from_env()?;
///     println!("Starting server on {}:{}", config.host, config.port);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host address for the API server (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port for the API server to listen on
    pub port: u16,

    /// PostgreSQL database connection string
    pub database_url: String,

    /// Log level for the application
    pub log_level: Level,

    /// CORS allowed origins (optional)
    pub cors_origins: Option<Vec<String>>,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Horizon and slot length used when expanding availability templates
    pub expansion: ExpansionConfig,
}

impl ApiConfig {
    /// Creates a new ApiConfig from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The DATABASE_URL environment variable is not set
    /// - The API_PORT value cannot be parsed as a u16
    /// - SLOT_HORIZON_WEEKS or SLOT_DURATION_MINUTES is not a positive integer
    /// - SLOT_HORIZON_WEEKS exceeds `MAX_HORIZON_WEEKS`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup
    ///
    /// `from_env` delegates here; tests pass a map-backed closure instead of
    /// touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Network settings
        let host = lookup("API_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = lookup("API_PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .wrap_err("Invalid API_PORT value")?;

        // Database settings
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| eyre!("DATABASE_URL environment variable must be set"))?;

        // Logging settings
        let log_level = match lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()).as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        // CORS settings
        let cors_origins = lookup("API_CORS_ORIGINS").map(|origins| {
            origins.split(',').map(|s| s.trim().to_string()).collect()
        });

        // Performance settings
        let request_timeout = lookup("API_REQUEST_TIMEOUT_SECONDS")
            .and_then(|value| value.parse().ok())
            .unwrap_or(30);

        // Slot generation settings
        let expansion = ExpansionConfig {
            horizon_weeks: positive(
                &lookup,
                "SLOT_HORIZON_WEEKS",
                DEFAULT_HORIZON_WEEKS,
                MAX_HORIZON_WEEKS,
            )?,
            slot_duration_minutes: positive(
                &lookup,
                "SLOT_DURATION_MINUTES",
                DEFAULT_SLOT_DURATION_MINUTES,
                u32::MAX,
            )?,
        };

        Ok(Self {
            host,
            port,
            database_url,
            log_level,
            cors_origins,
            request_timeout,
            expansion,
        })
    }

    /// Returns the server address as a string (e.g., "127.0.0.1:8080")
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn positive<F>(lookup: &F, key: &str, default: u32, max: u32) -> Result<u32>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };

    match raw.trim().parse::<u32>() {
        Ok(value) if value > max => Err(eyre!("{} must be at most {}, got {}", key, max, value)),
        Ok(value) if value >= 1 => Ok(value),
        _ => Err(eyre!("{} must be a positive integer, got {:?}", key, raw)),
    }
}
