//! # Roombook API
//!
//! The API crate provides the web server for the Roombook room reservation
//! service. It exposes endpoints for creating rooms from a weekly availability
//! template and for reading back the dated slots generated for a room.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Implement request processing logic
//! - **Middleware**: Provide cross-cutting concerns like authentication and error handling
//! - **Config**: Handle environment and application configuration
//!
//! Slot generation itself lives in `roombook-core`; persistence goes through
//! the store traits of `roombook-db`.

/// Configuration module for API settings
pub mod config;
/// Request handlers that implement business logic
pub mod handlers;
/// Middleware for authentication and error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{sync::Arc, time::Duration};

use axum::Router;
use eyre::Result;
use roombook_core::expander::ExpansionConfig;
use roombook_db::store::{PgStore, RoomStore, UserStore};
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
///
/// Stores are held behind trait objects so tests can substitute the mocks
/// from `roombook_db::mock`.
///
/// # Example
///
/// ```rust,ignore
/// let store = Arc::new(PgStore::new(db_pool));
/// let state = Arc::new(ApiState {
///     rooms: store.clone(),
///     users: store,
///     expansion: ExpansionConfig::default(),
/// });
/// let app = build_router(state, &config);
/// ```
pub struct ApiState {
    /// Room and slot persistence
    pub rooms: Arc<dyn RoomStore>,
    /// User lookup for authentication
    pub users: Arc<dyn UserStore>,
    /// Horizon and slot length applied when expanding templates
    pub expansion: ExpansionConfig,
}

/// Builds the application router with all routes and layers attached
///
/// # Arguments
///
/// * `state` - Shared application state
/// * `config` - API configuration (CORS origins and request timeout are read here)
///
/// # Returns
///
/// * `Result<Router>` - The router, or an error if a CORS origin is not a valid header value
pub fn build_router(state: Arc<ApiState>, config: &config::ApiConfig) -> Result<Router> {
    let app = Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Room management endpoints
        .merge(routes::room::routes())
        // Attach shared state to all routes
        .with_state(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let origins = origins
            .iter()
            .map(|origin| origin.parse())
            .collect::<std::result::Result<Vec<axum::http::HeaderValue>, _>>()
            .map_err(|e| eyre::eyre!("Invalid CORS origin: {}", e))?;

        let cors = tower_http::cors::CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::AUTHORIZATION,
                axum::http::header::ACCEPT,
                axum::http::HeaderName::from_static(middleware::auth::USER_ID_HEADER),
            ])
            .allow_origin(origins)
            .allow_credentials(true);

        app.layer(cors)
    } else {
        app
    };

    // Add request tracing and timeout middleware
    let app = app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout))),
    );

    Ok(app)
}

/// Starts the API server with the provided configuration and database connection
///
/// This function initializes logging, wires the PostgreSQL store into the
/// application state, builds the router, and serves HTTP until shutdown.
///
/// # Arguments
///
/// * `config` - API configuration including host, port, and slot expansion settings
/// * `db_pool` - PostgreSQL connection pool for database operations
///
/// # Returns
///
/// * `Result<()>` - Success or error result
pub async fn start_server(config: config::ApiConfig, db_pool: PgPool) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Create shared state with dependencies
    let store = Arc::new(PgStore::new(db_pool));
    let state = Arc::new(ApiState {
        rooms: store.clone(),
        users: store,
        expansion: config.expansion,
    });

    let app = build_router(state, &config)?;

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!(
        horizon_weeks = config.expansion.horizon_weeks,
        slot_duration_minutes = config.expansion.slot_duration_minutes,
        "Server listening on http://{}",
        addr
    );
    axum::serve(listener, app).await?;

    Ok(())
}
