use std::fmt::Write;
use std::path::Path;

use super::*;
use crate::config::DEFAULT_DELIMITER;

fn full_header() -> String {
    format!(
        "{DEFAULT_DELIMITER}\n\
         -- IP Name:     opq_fifo\n\
         -- Author:      Jane Doe\n\
         -- Revision:    1.0\n\
         -- Description: Ordered priority queue FIFO stage\n\
         {DEFAULT_DELIMITER}\n\
         library ieee;\n"
    )
}

fn messages(text: &str) -> Vec<String> {
    HeaderCheck::new(&HeaderConfig::default())
        .check(Path::new("rtl/opq_fifo.vhd"), &SourceText::new(text))
        .into_iter()
        .map(|f| f.message)
        .collect()
}

#[test]
fn complete_header_passes() {
    assert!(messages(&full_header()).is_empty());
}

#[test]
fn each_missing_field_is_reported_alone() {
    for field in ["IP Name:", "Author:", "Revision:", "Description:"] {
        let text = full_header().replace(field, "Unrelated");
        assert_eq!(
            messages(&text),
            vec![format!(
                "Missing header field \"{field}\" in top-of-file comment block"
            )],
            "removing {field}"
        );
    }
}

#[test]
fn delimiter_must_be_first_bytes() {
    let text = format!("\n{}", full_header());
    assert_eq!(
        messages(&text),
        vec![format!(
            "Missing top-of-file delimiter line \"{DEFAULT_DELIMITER}\""
        )]
    );
}

#[test]
fn shorter_delimiter_is_rejected() {
    let text = full_header().replacen(DEFAULT_DELIMITER, "-- -----", 1);
    assert_eq!(messages(&text).len(), 1);
}

#[test]
fn findings_are_file_level() {
    let findings = HeaderCheck::new(&HeaderConfig::default())
        .check(Path::new("a.vhd"), &SourceText::new("library ieee;\n"));

    assert_eq!(findings.len(), 5);
    assert!(findings.iter().all(|f| f.line == 1));
}

#[test]
fn fields_beyond_head_window_do_not_count() {
    let mut text = format!("{DEFAULT_DELIMITER}\n");
    for i in 0..79 {
        let _ = writeln!(text, "-- filler {i}");
    }
    text.push_str("-- IP Name: late\n-- Author: x\n-- Revision: 1\n-- Description: y\n");

    assert_eq!(messages(&text).len(), 4);
}

#[test]
fn field_on_line_eighty_counts() {
    let mut text = format!("{DEFAULT_DELIMITER}\n");
    for i in 0..75 {
        let _ = writeln!(text, "-- filler {i}");
    }
    text.push_str("-- IP Name: a\n-- Author: b\n-- Revision: c\n-- Description: d\n");

    assert!(messages(&text).is_empty());
}

#[test]
fn empty_file_reports_all_requirements() {
    assert_eq!(messages("").len(), 5);
}
