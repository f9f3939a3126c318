//! Configuration presets and loading

use source_resolver::{ConfigError, ResolverConfig, DEFAULT_LINE_OFFSET};
use std::fs;

#[test]
fn test_default_is_playground() {
    assert_eq!(ResolverConfig::default(), ResolverConfig::playground());
}

#[test]
fn test_playground_preset() {
    let config = ResolverConfig::playground();

    assert_eq!(config.line_offset, DEFAULT_LINE_OFFSET);
    assert_eq!(config.source_label.as_deref(), Some("file.js"));
    assert!(config.user_files.contains("StudentCode.js"));
    assert!(config.harness_files.contains("file.js"));
    assert!(!config.harness_is_source());
}

#[test]
fn test_standalone_editor_preset() {
    let config = ResolverConfig::standalone_editor();

    assert!(config.harness_is_source());
    assert_eq!(config.display_file(), "Editor.js");
}

#[test]
fn test_from_json_partial() {
    let config = ResolverConfig::from_json(
        r#"{ "harness_files": ["runner.js"], "user_files": [], "source_label": null }"#,
    )
    .unwrap();

    assert!(config.harness_is_source());
    assert_eq!(config.display_file(), "runner.js");
    assert_eq!(config.line_offset, DEFAULT_LINE_OFFSET);
}

#[test]
fn test_from_json_rejects_unknown_fields() {
    let result = ResolverConfig::from_json(r#"{ "wrapper_offset": 3 }"#);
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_from_json_rejects_empty_name_sets() {
    let result = ResolverConfig::from_json(r#"{ "harness_files": [], "user_files": [] }"#);
    assert!(matches!(result, Err(ConfigError::NoSourceFiles)));
}

#[test]
fn test_json_round_trip() {
    let config = ResolverConfig::standalone_editor().with_line_offset(5);
    let text = serde_json::to_string(&config).unwrap();

    assert_eq!(ResolverConfig::from_json(&text).unwrap(), config);
}

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("resolver.json");
    fs::write(&path, r#"{ "line_offset": 0 }"#).unwrap();

    let config = ResolverConfig::load(&path).unwrap();
    assert_eq!(config.line_offset, 0);
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = ResolverConfig::load(dir.path().join("missing.json"));

    match result {
        Err(ConfigError::Io { path, .. }) => assert!(path.ends_with("missing.json")),
        other => panic!("Expected Io error, got {:?}", other),
    }
}
