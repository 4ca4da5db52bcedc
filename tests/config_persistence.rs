#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use compare_products::{AppConfig, AppError};

#[test]
fn save_and_reload_round_trips() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("nested").join("config.toml");

    let mut config = AppConfig::default();
    config.search.base_url = "https://shop.example".into();
    config.search.timeout_seconds = 4;
    config.search.user_agent = Some("price-bot/1.0".into());
    config.search.allow_partial_results = true;

    config.save_to_file(&path).expect("save config");
    let loaded = AppConfig::from_file(&path).expect("reload config");
    assert_eq!(loaded, config);
}

#[test]
fn saved_file_has_search_table() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("config.toml");
    AppConfig::default().save_to_file(&path).expect("save config");

    let text = std::fs::read_to_string(&path).expect("read back");
    assert!(text.contains("[search]"));
    assert!(text.contains("base_url = \"http://localhost:5000\""));
    assert!(!text.contains("user_agent"));
}

#[test]
fn invalid_toml_is_a_config_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("bad.toml");
    std::fs::write(&path, "this is not valid toml {{{").expect("write");

    let err = AppConfig::from_file(&path).unwrap_err();
    assert!(matches!(err, AppError::Config(_)), "got {err}");
}

#[test]
fn wrongly_typed_value_is_a_config_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[search]\ntimeout_seconds = \"soon\"\n").expect("write");

    assert!(matches!(
        AppConfig::from_file(&path),
        Err(AppError::Config(_))
    ));
}

#[test]
fn explicit_path_takes_precedence() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[search]\ncurrency_symbol = \"$\"\n").expect("write");

    let config = AppConfig::load(Some(path.as_path())).expect("load");
    assert_eq!(config.search.currency_symbol, "$");
}
