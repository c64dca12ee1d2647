use std::path::Path;

use super::{Finding, SourceText, TextCheck};

pub const TRAILING_WHITESPACE: &str = "Trailing whitespace";

/// One finding per line ending in a space or tab.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrailingWhitespaceCheck;

impl TextCheck for TrailingWhitespaceCheck {
    fn check(&self, path: &Path, source: &SourceText<'_>) -> Vec<Finding> {
        source
            .lines
            .iter()
            .enumerate()
            .filter(|(_, line)| line.ends_with([' ', '\t']))
            .map(|(idx, _)| Finding::new(path, idx + 1, TRAILING_WHITESPACE))
            .collect()
    }
}
