//! Sandbox script preparation

use source_resolver::{normalize_source, ResolverConfig, SandboxScript};

#[test]
fn test_normalize_replaces_nbsp() {
    assert_eq!(normalize_source("a\u{a0}=\u{a0}1"), "a = 1");
}

#[test]
fn test_normalize_drops_zero_width() {
    assert_eq!(normalize_source("\u{feff}f\u{200b}o\u{200c}o\u{200d}()"), "foo()");
}

#[test]
fn test_normalize_maps_separators() {
    assert_eq!(normalize_source("a;\u{2028}b;\u{2029}c;"), "a;\nb;\nc;");
}

#[test]
fn test_normalize_leaves_plain_code() {
    let code = "for (let i = 0; i < 3; i++) {\n  console.log(i);\n}";
    assert_eq!(normalize_source(code), code);
}

#[test]
fn test_prepare_normalizes_code() {
    let script = SandboxScript::prepare("let\u{a0}x = 1;", &ResolverConfig::playground());

    assert_eq!(script.code(), "let x = 1;");
    assert_eq!(script.source_url(), "StudentCode.js");
    assert!(!script.is_blank());
}

#[test]
fn test_body_ends_with_annotation() {
    let script = SandboxScript::prepare("f();", &ResolverConfig::playground());
    let body = script.body();

    assert!(body.starts_with("f();\n"));
    assert!(body.ends_with("//# sourceURL=StudentCode.js"));
    assert_eq!(script.parameters(), &["console", "document", "window"]);
}
