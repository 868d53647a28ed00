//! Config loading: TOML parsing, defaults, validation, env overrides.

use triage_dash_core::config::{defaults, DashboardConfig, ADMIN_SECRET_ENV};
use triage_dash_core::errors::ConfigError;
use triage_dash_core::models::BucketAnchor;

// ═══════════════════════════════════════════════════════════════════════════
// Defaults
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn default_config_matches_reference_behaviour() {
    let config = DashboardConfig::default();
    assert_eq!(config.poll_interval_ms, 5_000);
    assert!(!config.pause_when_hidden);
    assert_eq!(config.endpoints.graphql_path, "/hasura/v1/graphql");
    assert_eq!(config.endpoints.workflow_status_path, "/api/workflows/status");
    assert_eq!(config.endpoints.failed_workflows_path, "/api/workflows/failed");
    assert_eq!(config.stats.detectors, vec!["noseyparker", "yara_scanner"]);
    assert_eq!(config.time_series.anchor, BucketAnchor::CompletedDays);
    assert!(config.validate().is_ok());
}

#[test]
fn empty_toml_is_all_defaults() {
    let config = DashboardConfig::from_toml("").unwrap();
    assert_eq!(
        serde_json::to_string(&config).unwrap(),
        serde_json::to_string(&DashboardConfig::default()).unwrap(),
        "empty TOML should produce identical config to Default::default()"
    );
}

#[test]
fn partial_sections_keep_other_defaults() {
    let toml = r#"
        poll_interval_ms = 2500

        [time_series]
        anchor = "through_today"

        [endpoints]
        base_url = "https://nemesis.example.com"
    "#;
    let config = DashboardConfig::from_toml(toml).unwrap();

    assert_eq!(config.poll_interval_ms, 2_500);
    assert_eq!(config.time_series.anchor, BucketAnchor::ThroughToday);
    assert_eq!(config.time_series.day_count, 5, "missing day_count should default");
    assert_eq!(config.endpoints.graphql_path, "/hasura/v1/graphql");
    assert_eq!(
        config.endpoints.url(&config.endpoints.graphql_path),
        "https://nemesis.example.com/hasura/v1/graphql"
    );
}

#[test]
fn custom_detectors_are_kept_in_order() {
    let toml = r#"
        [stats]
        detectors = ["yara_scanner", "noseyparker", "trufflehog"]
    "#;
    let config = DashboardConfig::from_toml(toml).unwrap();
    assert_eq!(config.stats.detectors, vec!["yara_scanner", "noseyparker", "trufflehog"]);
}

// ═══════════════════════════════════════════════════════════════════════════
// Validation
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn zero_poll_interval_rejected() {
    let err = DashboardConfig::from_toml("poll_interval_ms = 0").unwrap_err();
    assert!(matches!(err, ConfigError::ZeroPollInterval));
}

#[test]
fn zero_day_count_rejected() {
    let err = DashboardConfig::from_toml("[time_series]\nday_count = 0").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidDayCount(0)));
}

#[test]
fn oversized_day_count_rejected_at_load() {
    let max = defaults::MAX_DAY_COUNT;
    let ok = DashboardConfig::from_toml(&format!("[time_series]\nday_count = {max}")).unwrap();
    assert_eq!(ok.time_series.day_count, max);

    let err = DashboardConfig::from_toml(&format!("[time_series]\nday_count = {}", max + 1)).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidDayCount(n) if n == max + 1));

    let err = DashboardConfig::from_toml("[time_series]\nday_count = 4294967295").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidDayCount(u32::MAX)));
    assert_eq!(
        err.to_string(),
        "time series day count must be between 1 and 366, got 4294967295"
    );
}

#[test]
fn relative_path_rejected() {
    let err = DashboardConfig::from_toml("[endpoints]\ngraphql_path = \"graphql\"").unwrap_err();
    match err {
        ConfigError::InvalidEndpoint { field, .. } => assert_eq!(field, "graphql_path"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn non_http_base_url_rejected() {
    let err = DashboardConfig::from_toml("[endpoints]\nbase_url = \"ftp://host\"").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEndpoint { field: "base_url", .. }));
}

#[test]
fn malformed_toml_is_parse_error() {
    let err = DashboardConfig::from_toml("poll_interval_ms = \"soon\"").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn trailing_slash_on_base_url_is_not_doubled() {
    let mut config = DashboardConfig::default();
    config.endpoints.base_url = "http://localhost:8080/".to_string();
    assert_eq!(
        config.endpoints.url("/api/workflows/failed"),
        "http://localhost:8080/api/workflows/failed"
    );
}

// ═══════════════════════════════════════════════════════════════════════════
// Files and env
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn from_file_missing_path_is_io_error() {
    let err = DashboardConfig::from_file("/definitely/not/here/triage-dash.toml").unwrap_err();
    assert!(matches!(err, triage_dash_core::DashError::Io(_)));
}

#[test]
fn env_override_sets_admin_secret() {
    std::env::set_var(ADMIN_SECRET_ENV, "s3cret");
    let mut config = DashboardConfig::default();
    config.apply_env_overrides();
    std::env::remove_var(ADMIN_SECRET_ENV);
    assert_eq!(config.endpoints.admin_secret.as_deref(), Some("s3cret"));
}
