/// Split text into lines on the universal line-terminator set.
///
/// Recognized terminators: `\n`, `\r\n`, `\r`, vertical tab, form feed, the
/// file/group/record separators (`\x1c`..`\x1e`), NEL, U+2028 and U+2029.
/// Terminators are stripped and a trailing terminator does not produce an
/// extra empty line, so `"a\n"` yields `["a"]` and `""` yields nothing.
#[must_use]
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        if !is_line_terminator(ch) {
            continue;
        }
        lines.push(&text[start..idx]);
        let mut end = idx + ch.len_utf8();
        if ch == '\r'
            && let Some(&(next_idx, '\n')) = chars.peek()
        {
            chars.next();
            end = next_idx + 1;
        }
        start = end;
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

const fn is_line_terminator(ch: char) -> bool {
    matches!(
        ch,
        '\n' | '\r'
            | '\u{0b}'
            | '\u{0c}'
            | '\u{1c}'
            | '\u{1d}'
            | '\u{1e}'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Decoded file content with its lines split once for all text checks.
#[derive(Debug, Clone)]
pub struct SourceText<'a> {
    pub text: &'a str,
    pub lines: Vec<&'a str>,
}

impl<'a> SourceText<'a> {
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            lines: split_lines(text),
        }
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
