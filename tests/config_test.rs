use retab::config::get_config;
use retab::error::Error;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_missing_config_yields_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = get_config(temp_dir.path()).unwrap();

    assert_eq!(config.templates_dir, "templates");
    assert_eq!(config.variant_dir, "pro");
    assert!(config.ignore.is_empty());
}

#[test]
fn test_json_config() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("retab.json"),
        r#"{"variant_dir": "paid", "ignore": ["legacy/**"]}"#,
    )
    .unwrap();

    let config = get_config(temp_dir.path()).unwrap();
    assert_eq!(config.templates_dir, "templates");
    assert_eq!(config.variant_dir, "paid");
    assert_eq!(config.ignore, vec!["legacy/**".to_string()]);
}

#[test]
fn test_yaml_config() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("retab.yml"),
        "templates_dir: layouts\nignore:\n  - \"*.bak.hbs\"\n",
    )
    .unwrap();

    let config = get_config(temp_dir.path()).unwrap();
    assert_eq!(config.templates_dir, "layouts");
    assert_eq!(config.variant_dir, "pro");
    assert_eq!(config.ignore, vec!["*.bak.hbs".to_string()]);
}

#[test]
fn test_json_config_takes_precedence() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("retab.json"), r#"{"variant_dir": "a"}"#).unwrap();
    fs::write(temp_dir.path().join("retab.yml"), "variant_dir: b\n").unwrap();

    let config = get_config(temp_dir.path()).unwrap();
    assert_eq!(config.variant_dir, "a");
}

#[test]
fn test_invalid_config_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("retab.yml"), "ignore: [unclosed\n").unwrap();

    let result = get_config(temp_dir.path());
    assert!(matches!(result, Err(Error::ConfigError(_))));
}
