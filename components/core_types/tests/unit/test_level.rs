//! Unit tests for ConsoleLevel

use core_types::ConsoleLevel;

#[test]
fn test_from_method_known_names() {
    assert_eq!(ConsoleLevel::from_method("log"), ConsoleLevel::Log);
    assert_eq!(ConsoleLevel::from_method("warn"), ConsoleLevel::Warn);
    assert_eq!(ConsoleLevel::from_method("error"), ConsoleLevel::Error);
    assert_eq!(ConsoleLevel::from_method("info"), ConsoleLevel::Info);
    assert_eq!(ConsoleLevel::from_method("debug"), ConsoleLevel::Debug);
}

#[test]
fn test_from_method_unknown_defaults_to_log() {
    assert_eq!(ConsoleLevel::from_method("trace"), ConsoleLevel::Log);
    assert_eq!(ConsoleLevel::from_method(""), ConsoleLevel::Log);
}

#[test]
fn test_display_matches_method_name() {
    assert_eq!(ConsoleLevel::Warn.to_string(), "warn");
    assert_eq!(ConsoleLevel::default(), ConsoleLevel::Log);
}

#[test]
fn test_icons() {
    assert_eq!(ConsoleLevel::Error.icon(), "⨯");
    assert_eq!(ConsoleLevel::Log.icon(), "›");
}

#[test]
fn test_deserialize_unknown_method_as_log() {
    let level: ConsoleLevel = serde_json::from_str(r#""table""#).unwrap();
    assert_eq!(level, ConsoleLevel::Log);

    let level: ConsoleLevel = serde_json::from_str(r#""debug""#).unwrap();
    assert_eq!(level, ConsoleLevel::Debug);
    assert_eq!(serde_json::to_string(&ConsoleLevel::Warn).unwrap(), r#""warn""#);
}
