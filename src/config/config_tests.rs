use std::fs;
use std::io::Write;

use tempfile::TempDir;

use super::*;

#[test]
fn test_config_path_returns_config_dir() {
    let path = config_path();
    assert!(path.is_some());
    let path = path.unwrap();
    assert!(path.to_string_lossy().contains(".config/hinter"));
    assert!(path.to_string_lossy().ends_with("config.toml"));
}

#[test]
fn test_missing_file_uses_defaults_without_warning() {
    let dir = TempDir::new().unwrap();
    let result = load_config_from_path(&dir.path().join("absent.toml"));

    assert_eq!(result.config, Config::default());
    assert!(result.warning.is_none());
}

#[test]
fn test_valid_file_is_loaded() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    let mut file = fs::File::create(&path).unwrap();
    writeln!(file, "[suggest]\nparam = \"author\"\nmin_chars = 4").unwrap();

    let result = load_config_from_path(&path);

    assert!(result.warning.is_none());
    assert_eq!(result.config.suggest.param, "author");
    assert_eq!(result.config.suggest.min_chars, 4);
    assert_eq!(result.config.suggest.link_prefix, "books/");
}

#[test]
fn test_invalid_toml_falls_back_with_warning() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[suggest\nparam = ").unwrap();

    let result = load_config_from_path(&path);

    assert_eq!(result.config, Config::default());
    let warning = result.warning.unwrap();
    assert!(warning.starts_with("Invalid config"));
}

#[test]
fn test_directory_instead_of_file_warns() {
    let dir = TempDir::new().unwrap();

    let result = load_config_from_path(dir.path());

    assert_eq!(result.config, Config::default());
    assert!(result.warning.is_some());
}

#[test]
fn test_parse_config_empty_string() {
    let result = parse_config("");
    assert_eq!(result.config, Config::default());
    assert!(result.warning.is_none());
}
