//! Tests for session configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        acceptance_policy = "strict"

        [grid]
        rows = 6
        cols = 8

        [service]
        base_url = "http://127.0.0.1:9000/"
        generate_path = "api/generate"
        timeout_seconds = 15

        [export]
        file_name = "room-204.pdf"
    "#;

    let config = SessionConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.grid_size(), GridSize::new(6, 8));
    assert_eq!(config.acceptance_policy, AcceptancePolicy::Strict);
    assert_eq!(
        config.service.generate_url(),
        "http://127.0.0.1:9000/api/generate"
    );
    assert_eq!(
        config.service.export_url(),
        "http://127.0.0.1:9000/export_pdf"
    );
    assert_eq!(config.service.timeout(), Some(Duration::from_secs(15)));
    assert_eq!(config.export.file_name, "room-204.pdf");
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        acceptance_policy: lenient
        grid:
          rows: 4
        service:
          base_url: http://seating:5000
    "#;

    let config = SessionConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.grid.rows, 4);
    assert_eq!(config.grid.cols, 10);
    assert_eq!(config.acceptance_policy, AcceptancePolicy::Lenient);
    assert_eq!(config.service.generate_url(), "http://seating:5000/generate");
}

#[test]
fn test_empty_toml_is_default() {
    let config = SessionConfig::from_toml_str("").unwrap();
    assert_eq!(config, SessionConfig::default());
    assert_eq!(config.grid_size(), GridSize::new(10, 10));
    assert_eq!(config.service.generate_url(), "http://localhost:5000/generate");
    assert_eq!(config.service.timeout(), None);
}

#[test]
fn test_zero_sized_grid_is_invalid() {
    let err = SessionConfig::from_toml_str("[grid]\nrows = 0\n").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_unknown_policy_is_parse_error() {
    let err = SessionConfig::from_toml_str(r#"acceptance_policy = "maybe""#).unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = SessionConfig::load("/nonexistent/seating.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_builder() {
    let config = SessionConfig::new()
        .with_grid(3, 5)
        .with_acceptance_policy(AcceptancePolicy::Strict)
        .with_base_url("http://example.test")
        .with_timeout_seconds(5);

    assert_eq!(config.grid_size(), GridSize::new(3, 5));
    assert_eq!(config.acceptance_policy, AcceptancePolicy::Strict);
    assert_eq!(config.service.export_url(), "http://example.test/export_pdf");
    assert!(config.validate().is_ok());
}
