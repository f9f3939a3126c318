//! Syntax inference through the resolver

use source_resolver::{infer_syntax_position, ResolverConfig, SourceResolver};

#[test]
fn test_frame_uses_display_file() {
    let resolver = SourceResolver::new(ResolverConfig::playground());
    let frame = resolver
        .infer_syntax_frame("const a = [1, 2;\n", "missing ] after element list")
        .unwrap();

    assert_eq!(frame.location(), "file.js:1:11");
    assert!(frame.function_name.is_none());
}

#[test]
fn test_double_quote_broken_on_second_line() {
    let pos = infer_syntax_position("let a = 1;\nlet b = \"oops\nlet c;", "").unwrap();
    assert_eq!((pos.line, pos.column), (2, 9));
}

#[test]
fn test_escaped_quote_does_not_close() {
    let pos = infer_syntax_position("let s = 'it\\'s\nx';", "").unwrap();
    assert_eq!((pos.line, pos.column), (1, 9));
}

#[test]
fn test_block_comment_spanning_lines() {
    assert_eq!(infer_syntax_position("/* ( [\n { */ f();", ""), None);
}

#[test]
fn test_unterminated_block_comment_is_not_an_error() {
    assert_eq!(infer_syntax_position("f(); /* (", ""), None);
}

#[test]
fn test_quotes_in_line_comment_ignored() {
    assert_eq!(infer_syntax_position("// it's fine\nf();", ""), None);
}

#[test]
fn test_unexpected_identifier_with_backticks() {
    let pos = infer_syntax_position("let x = 1\nlet y = x z;", "Unexpected identifier `z`").unwrap();
    assert_eq!((pos.line, pos.column), (2, 11));
}

#[test]
fn test_unexpected_token_without_quoted_token() {
    assert_eq!(infer_syntax_position("let x = ;", "Unexpected token"), None);
}

#[test]
fn test_multibyte_columns_count_characters() {
    let pos = infer_syntax_position("let é = 'ü\n';", "").unwrap();
    assert_eq!((pos.line, pos.column), (1, 9));
}

/// Regex literals are scanned as ordinary text; a bracket inside one is
/// reported as if it were code.
#[test]
fn test_regex_literal_limitation() {
    let pos = infer_syntax_position("const re = /[)]/;", "").unwrap();
    assert_eq!((pos.line, pos.column), (1, 14));
}
