use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

use termfolio::util::config::AppConfig;

#[test]
fn test_load_full_config() {
    let toml = r#"
[github]
username = "octocat"
api_url = "https://github.example.com/api/v3"
per_page = 30
timeout_secs = 3

[activity]
refresh_interval_secs = 120

[store]
path = "/tmp/termfolio-store.json"
"#;
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(toml.as_bytes()).unwrap();

    let config = AppConfig::load(Some(f.path())).unwrap();
    assert_eq!(config.github.username, "octocat");
    assert_eq!(config.github.api_url, "https://github.example.com/api/v3");
    assert_eq!(config.github.per_page, 30);
    assert_eq!(config.github.timeout_secs, 3);
    assert_eq!(config.activity.refresh_interval_secs, 120);
    assert_eq!(
        config.store_path(),
        PathBuf::from("/tmp/termfolio-store.json")
    );
}

#[test]
fn test_load_partial_config_uses_defaults() {
    let toml = r#"
[github]
username = "someone"
"#;
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(toml.as_bytes()).unwrap();

    let config = AppConfig::load(Some(f.path())).unwrap();
    assert_eq!(config.github.username, "someone");
    assert_eq!(config.github.api_url, "https://api.github.com");
    assert_eq!(config.github.per_page, 10);
    assert_eq!(config.activity.refresh_interval_secs, 300);
    assert!(config.store.path.is_none());
}

#[test]
fn test_load_empty_config_uses_all_defaults() {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(b"").unwrap();

    let config = AppConfig::load(Some(f.path())).unwrap();
    assert_eq!(config.github.username, "iamnotsomting");
    assert_eq!(config.github.per_page, 10);
    assert_eq!(config.activity.refresh_interval_secs, 300);
}

#[test]
fn test_load_nonexistent_file_fails() {
    let result = AppConfig::load(Some(std::path::Path::new("/nonexistent/path/config.toml")));
    assert!(result.is_err());
}

#[test]
fn test_load_invalid_toml_fails() {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(b"this is not [valid toml {{").unwrap();

    let result = AppConfig::load(Some(f.path()));
    assert!(result.is_err());
}

#[test]
fn test_default_config() {
    let config = AppConfig::default();
    assert_eq!(config.github.username, "iamnotsomting");
    assert_eq!(config.github.api_url, "https://api.github.com");
    assert_eq!(config.github.per_page, 10);
    assert_eq!(config.github.timeout_secs, 10);
    assert_eq!(config.activity.refresh_interval_secs, 300);
    assert!(config.store.path.is_none());
    assert!(config.store_path().ends_with("store.json"));
}
