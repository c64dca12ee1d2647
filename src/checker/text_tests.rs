use super::*;

#[test]
fn empty_text_has_no_lines() {
    assert!(split_lines("").is_empty());
}

#[test]
fn trailing_newline_does_not_add_line() {
    assert_eq!(split_lines("a\nb\n"), vec!["a", "b"]);
}

#[test]
fn missing_trailing_newline_keeps_last_line() {
    assert_eq!(split_lines("a\nb"), vec!["a", "b"]);
}

#[test]
fn blank_lines_are_preserved() {
    assert_eq!(split_lines("a\n\n\nb\n"), vec!["a", "", "", "b"]);
    assert_eq!(split_lines("\n"), vec![""]);
}

#[test]
fn crlf_counts_as_one_terminator() {
    assert_eq!(split_lines("a\r\nb\r\n"), vec!["a", "b"]);
}

#[test]
fn lone_cr_is_a_terminator() {
    assert_eq!(split_lines("a\rb\r\rc"), vec!["a", "b", "", "c"]);
}

#[test]
fn form_feed_and_unicode_separators_split_lines() {
    assert_eq!(split_lines("a\x0cb\u{2028}c\u{85}d"), vec!["a", "b", "c", "d"]);
    assert_eq!(
        split_lines("a\x0bb\x1cc\x1dd\x1ee\u{2029}"),
        vec!["a", "b", "c", "d", "e"]
    );
}

#[test]
fn multibyte_content_is_kept_intact() {
    assert_eq!(split_lines("── box ─\n└─┘"), vec!["── box ─", "└─┘"]);
}

#[test]
fn source_text_splits_once() {
    let source = SourceText::new("x\ny\n");
    assert_eq!(source.text, "x\ny\n");
    assert_eq!(source.lines, vec!["x", "y"]);
}
