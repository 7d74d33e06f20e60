use share_selection::config::Config;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn parse_complete_config_file() {
    let config_content = r#"
[selection]
follow_symlinks = true

[tui]
confirm_delete = false
tick_rate_ms = 100
"#;

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(config_content.as_bytes()).unwrap();

    let config = Config::load(Some(file.path())).unwrap();

    assert!(config.selection.follow_symlinks);
    assert!(!config.tui.confirm_delete);
    assert_eq!(config.tui.tick_rate_ms, 100);
}

#[test]
fn parse_partial_config_uses_defaults() {
    let config_content = r#"
[tui]
confirm_delete = false
"#;

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(config_content.as_bytes()).unwrap();

    let config = Config::load(Some(file.path())).unwrap();

    // Explicit value
    assert!(!config.tui.confirm_delete);
    // Default values
    assert_eq!(config.tui.tick_rate_ms, 250);
    assert!(!config.selection.follow_symlinks);
}

#[test]
fn parse_invalid_toml_returns_error() {
    let config_content = "this is not valid toml [[[";

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(config_content.as_bytes()).unwrap();

    let result = Config::load(Some(file.path()));
    assert!(result.is_err());
}

#[test]
fn parse_invalid_tick_rate_returns_error() {
    let config_content = r#"
[tui]
tick_rate_ms = 0
"#;

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(config_content.as_bytes()).unwrap();

    let result = Config::load(Some(file.path()));
    assert!(result.is_err());
}

#[test]
fn missing_explicit_config_returns_error() {
    let result = Config::load(Some(std::path::Path::new("/nonexistent/config.toml")));
    assert!(result.is_err());
}
