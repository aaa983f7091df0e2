//! Tests for config functionality.

use crate::config::{CONFIG_FILE_NAME, Config, LogFormat, OutputFormat};
use crate::error::PasscheckError;
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.output_format, OutputFormat::Text);
    assert_eq!(config.log_format, LogFormat::Text);
    assert_eq!(config.log_filter, "warn");
    assert!(config.validate().is_ok());
}

#[test]
fn test_parse_minimal_yaml() {
    let config = Config::from_yaml("").unwrap();

    // Should use all defaults
    assert_eq!(config.output_format, OutputFormat::Text);
    assert_eq!(config.log_filter, "warn");
}

#[test]
fn test_parse_partial_yaml() {
    let yaml = r#"
output_format: json
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.output_format, OutputFormat::Json);
    // Unspecified values should use defaults
    assert_eq!(config.log_format, LogFormat::Text);
    assert_eq!(config.log_filter, "warn");
}

#[test]
fn test_parse_full_yaml() {
    let yaml = r#"
output_format: json
log_format: json
log_filter: "passcheck=debug"
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.output_format, OutputFormat::Json);
    assert_eq!(config.log_format, LogFormat::Json);
    assert_eq!(config.log_filter, "passcheck=debug");
}

#[test]
fn test_unknown_fields_are_ignored() {
    let yaml = r#"
output_format: text
min_length: 12
future_option: true
"#;
    let config = Config::from_yaml(yaml).unwrap();
    assert_eq!(config.output_format, OutputFormat::Text);
}

#[test]
fn test_invalid_output_format_is_rejected() {
    let result = Config::from_yaml("output_format: xml");
    assert!(matches!(result, Err(PasscheckError::UserError(_))));
}

#[test]
fn test_empty_log_filter_is_rejected() {
    let err = Config::from_yaml("log_filter: \"  \"").unwrap_err();
    assert!(err.to_string().contains("log_filter must not be empty"));
}

#[test]
fn test_malformed_log_filter_is_rejected() {
    let err = Config::from_yaml("log_filter: \"passcheck=loudest\"").unwrap_err();
    assert!(matches!(err, PasscheckError::UserError(_)));
    assert!(err.to_string().contains("invalid log_filter"));
}

#[test]
fn test_yaml_roundtrip_preserves_values() {
    let config = Config {
        output_format: OutputFormat::Json,
        log_format: LogFormat::Json,
        log_filter: "info".to_string(),
    };

    let yaml = config.to_yaml().unwrap();
    let parsed = Config::from_yaml(&yaml).unwrap();

    assert_eq!(parsed.output_format, OutputFormat::Json);
    assert_eq!(parsed.log_format, LogFormat::Json);
    assert_eq!(parsed.log_filter, "info");
}

#[test]
fn test_format_names_are_lowercase_only() {
    assert!(Config::from_yaml("output_format: JSON").is_err());
    assert!(Config::from_yaml("log_format: yaml").is_err());
    assert_eq!(
        Config::from_yaml("log_format: json").unwrap().log_format,
        LogFormat::Json
    );
}

#[test]
fn test_load_missing_file_is_user_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = Config::load(temp_dir.path().join("missing.yaml")).unwrap_err();
    assert!(matches!(err, PasscheckError::UserError(_)));
    assert!(err.to_string().contains("failed to read config file"));
}

#[test]
fn test_discover_without_file_uses_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::discover(None, temp_dir.path()).unwrap();
    assert_eq!(config.output_format, OutputFormat::Text);
}

#[test]
fn test_discover_picks_up_file_in_dir() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join(CONFIG_FILE_NAME),
        "output_format: json\n",
    )
    .unwrap();

    let config = Config::discover(None, temp_dir.path()).unwrap();
    assert_eq!(config.output_format, OutputFormat::Json);
}

#[test]
fn test_discover_prefers_explicit_path() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join(CONFIG_FILE_NAME),
        "output_format: json\n",
    )
    .unwrap();
    let explicit = temp_dir.path().join("other.yaml");
    std::fs::write(&explicit, "log_format: json\n").unwrap();

    let config = Config::discover(Some(&explicit), temp_dir.path()).unwrap();
    assert_eq!(config.output_format, OutputFormat::Text);
    assert_eq!(config.log_format, LogFormat::Json);
}

#[test]
fn test_discover_explicit_missing_path_fails() {
    let temp_dir = TempDir::new().unwrap();
    let explicit = temp_dir.path().join("nope.yaml");

    let result = Config::discover(Some(&explicit), temp_dir.path());
    assert!(result.is_err());
}
