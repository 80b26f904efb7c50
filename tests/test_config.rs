use std::path::{Path, PathBuf};

use serde_json::json;
use stylelint_junit::config::FormatterConfig;
use stylelint_junit::Error;

#[test]
fn load_explicit_file() {
    let config = FormatterConfig::load(Some(Path::new("tests/fixtures/hide.toml"))).unwrap();
    assert!(config.hide_passed);
    assert!(config.hide_path);
    assert!(config.output.is_none());
}

#[test]
fn load_ignores_mistyped_values() {
    let config = FormatterConfig::load(Some(Path::new("tests/fixtures/mistyped.toml"))).unwrap();
    assert_eq!(config, FormatterConfig::default());
}

#[test]
fn load_missing_explicit_file_is_an_error() {
    let err = FormatterConfig::load(Some(Path::new("tests/fixtures/nope.toml"))).unwrap_err();
    assert!(matches!(err, Error::InvalidConfig { .. }));
}

#[test]
fn load_invalid_toml_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    std::fs::write(&path, "hidePassed = [").unwrap();

    let err = FormatterConfig::load(Some(path.as_path())).unwrap_err();
    assert!(matches!(err, Error::InvalidConfig { .. }));
}

#[test]
fn load_output_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("with-output.toml");
    std::fs::write(&path, "output = \"reports/junit.xml\"\n").unwrap();

    let config = FormatterConfig::load(Some(path.as_path())).unwrap();
    assert_eq!(config.output, Some(PathBuf::from("reports/junit.xml")));
}

#[test]
fn partial_json_options_keep_other_defaults() {
    let config = FormatterConfig::from_json(&json!({ "hidePath": true, "unrelated": 42 }));
    assert!(!config.hide_passed);
    assert!(config.hide_path);
    assert!(config.output.is_none());
}

#[test]
fn null_options_are_unset() {
    let config = FormatterConfig::from_json(&json!({
        "hidePassed": null,
        "hidePath": null,
        "output": null
    }));
    assert_eq!(config, FormatterConfig::default());
}
