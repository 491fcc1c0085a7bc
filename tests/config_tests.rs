//! Loading ConsoleConfig from YAML files on disk.

use std::io::Write;

use backoffice::config::ConsoleConfig;
use backoffice::core::ConsoleError;
use backoffice::storage::RemoteCouponStore;
use tempfile::NamedTempFile;

fn write_config(yaml: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_full_file() {
    let file = write_config(
        r#"
api:
  base_url: http://coupons.internal:8080/api
  request_timeout_secs: 5
coupons:
  validity_days: 14
  code_length: 10
  max_batch: 25
"#,
    );

    let config = ConsoleConfig::from_yaml_file(file.path().to_str().unwrap()).unwrap();

    assert_eq!(config.api.base_url, "http://coupons.internal:8080/api");
    assert_eq!(config.coupons.validity_days, 14);
    assert_eq!(config.coupons.code_length, 10);
    assert_eq!(config.coupons.max_batch, 25);

    let store = RemoteCouponStore::from_config(&config.api).unwrap();
    assert_eq!(store.base_url(), "http://coupons.internal:8080/api");
}

#[test]
fn test_empty_file_uses_defaults() {
    let file = write_config("{}\n");

    let config = ConsoleConfig::from_yaml_file(file.path().to_str().unwrap()).unwrap();

    assert_eq!(config, ConsoleConfig::default());
}

#[test]
fn test_missing_file_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.yaml");

    let err = ConsoleConfig::from_yaml_file(path.to_str().unwrap()).unwrap_err();

    assert!(matches!(err, ConsoleError::Config(_)));
    assert_eq!(err.error_code(), "CONFIG_ERROR");
}

#[test]
fn test_invalid_values_are_rejected() {
    let file = write_config("coupons:\n  code_length: 2\n");

    let err = ConsoleConfig::from_yaml_file(file.path().to_str().unwrap()).unwrap_err();

    assert!(err.to_string().contains("code_length"));
}

#[test]
fn test_malformed_yaml_is_config_error() {
    let file = write_config("api: [unterminated\n");

    let err = ConsoleConfig::from_yaml_file(file.path().to_str().unwrap()).unwrap_err();

    assert!(matches!(err, ConsoleError::Config(_)));
}
