//! Integration tests for configuration loading and logger setup.

use orderqueue_rs::prelude::*;
use std::io::Write;

#[test]
fn load_from_file_and_install_logger() {
    let dir = tempfile::tempdir().expect("temp dir");
    let log_path = dir.path().join("exchange.log");
    let config_path = dir.path().join("config.json");

    let mut file = std::fs::File::create(&config_path).expect("create config");
    write!(
        file,
        r#"{{"EventId": "e1", "LogFileName": {:?}, "LogMaxSize": 1, "LogLevel": "Debug"}}"#,
        log_path.display().to_string()
    )
    .expect("write config");

    let config = Config::load(&config_path).expect("valid config");
    assert_eq!(config.event_id, "e1");
    assert_eq!(config.log_level(), "debug");
    assert_eq!(config.log_max_bytes(), 1024 * 1024);

    setup_logger(&config).expect("first install");
    assert!(log_path.exists());
    assert!(matches!(setup_logger(&config), Err(LoggingError::Init(_))));
}

#[test]
fn unreadable_log_path_is_reported() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = Config {
        log_file_name: dir.path().join("missing/dir/x.log").display().to_string(),
        ..Config::default()
    };
    assert!(matches!(
        setup_logger(&config),
        Err(LoggingError::LogFile { .. })
    ));
}

#[test]
fn invalid_level_fails_load() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config_path = dir.path().join("config.json");
    std::fs::write(&config_path, r#"{"LogLevel": "chatty"}"#).expect("write config");
    assert!(matches!(
        Config::load(&config_path),
        Err(ConfigError::InvalidLogLevel(_))
    ));
}
