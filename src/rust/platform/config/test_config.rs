use super::*;
use tempfile::tempdir;

#[test]
fn test_default_level_is_info() {
    assert_eq!(LoggerConfig::default().level, LogLevel::Info);
}

#[test]
fn test_toml_top_level_and_section() {
    let top = LoggerConfig::from_toml_str("level = \"warn\"").unwrap();
    assert_eq!(top.level, LogLevel::Warn);

    let section = LoggerConfig::from_toml_str("level = \"warn\"\n[logger]\nlevel = \"debug\"\n")
        .unwrap();
    assert_eq!(section.level, LogLevel::Debug);

    let empty = LoggerConfig::from_toml_str("").unwrap();
    assert_eq!(empty.level, LogLevel::Info);
}

#[test]
fn test_json_config() {
    let config = LoggerConfig::from_json_str(r#"{"logger": {"level": "error"}}"#).unwrap();
    assert_eq!(config.level, LogLevel::Error);
}

#[test]
fn test_invalid_level_rejected() {
    assert!(LoggerConfig::from_toml_str("level = \"loud\"").is_err());
}

#[test]
fn test_load_and_discover() {
    let dir = tempdir().expect("create tempdir");
    assert_eq!(LoggerConfig::discover(dir.path()).unwrap(), LoggerConfig::default());

    let json_path = dir.path().join("egonlog.json");
    fs::write(&json_path, r#"{"level": "warn"}"#).unwrap();
    assert_eq!(LoggerConfig::discover(dir.path()).unwrap().level, LogLevel::Warn);

    // toml takes priority over json
    fs::write(dir.path().join("egonlog.toml"), "level = \"debug\"").unwrap();
    assert_eq!(LoggerConfig::discover(dir.path()).unwrap().level, LogLevel::Debug);

    let sniffed = dir.path().join("logger.conf");
    fs::write(&sniffed, r#"{"level": "error"}"#).unwrap();
    assert_eq!(LoggerConfig::load(&sniffed).unwrap().level, LogLevel::Error);
}

#[test]
fn test_load_missing_file_names_path() {
    let err = LoggerConfig::load("/nonexistent/egonlog.toml").unwrap_err();
    assert!(format!("{err:#}").contains("/nonexistent/egonlog.toml"));
}
