use std::collections::HashMap;

use pretty_assertions::assert_eq;
use roombook_api::config::ApiConfig;
use roombook_core::expander::ExpansionConfig;
use tracing::Level;

fn load(vars: &[(&str, &str)]) -> eyre::Result<ApiConfig> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();
    ApiConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn test_defaults() {
    let config = load(&[("DATABASE_URL", "postgres://localhost/roombook")]).unwrap();

    assert_eq!(config.server_addr(), "0.0.0.0:3000");
    assert_eq!(config.log_level, Level::INFO);
    assert_eq!(config.cors_origins, None);
    assert_eq!(config.request_timeout, 30);
    assert_eq!(config.expansion, ExpansionConfig::default());
}

#[test]
fn test_overrides() {
    let config = load(&[
        ("DATABASE_URL", "postgres://localhost/roombook"),
        ("API_HOST", "127.0.0.1"),
        ("API_PORT", "8080"),
        ("LOG_LEVEL", "debug"),
        ("API_CORS_ORIGINS", "http://localhost:3000, https://rooms.example.com"),
        ("SLOT_HORIZON_WEEKS", "4"),
        ("SLOT_DURATION_MINUTES", "30"),
    ])
    .unwrap();

    assert_eq!(config.server_addr(), "127.0.0.1:8080");
    assert_eq!(config.log_level, Level::DEBUG);
    assert_eq!(
        config.cors_origins,
        Some(vec![
            "http://localhost:3000".to_string(),
            "https://rooms.example.com".to_string()
        ])
    );
    assert_eq!(config.expansion.horizon_weeks, 4);
    assert_eq!(config.expansion.slot_duration_minutes, 30);
}

#[test]
fn test_database_url_is_required() {
    assert!(load(&[]).is_err());
}

#[test]
fn test_rejects_invalid_port() {
    assert!(load(&[("DATABASE_URL", "postgres://localhost/roombook"), ("API_PORT", "http")]).is_err());
}

#[test]
fn test_rejects_zero_horizon_and_duration() {
    let db = ("DATABASE_URL", "postgres://localhost/roombook");

    assert!(load(&[db, ("SLOT_HORIZON_WEEKS", "0")]).is_err());
    assert!(load(&[db, ("SLOT_DURATION_MINUTES", "0")]).is_err());
    assert!(load(&[db, ("SLOT_DURATION_MINUTES", "an hour")]).is_err());
}

#[test]
fn test_horizon_is_capped() {
    let db = ("DATABASE_URL", "postgres://localhost/roombook");

    let config = load(&[db, ("SLOT_HORIZON_WEEKS", "520")]).unwrap();
    assert_eq!(config.expansion.horizon_weeks, 520);

    assert!(load(&[db, ("SLOT_HORIZON_WEEKS", "521")]).is_err());
    assert!(load(&[db, ("SLOT_HORIZON_WEEKS", "4294967295")]).is_err());
}
