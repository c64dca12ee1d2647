mod finding;
mod header;
mod line_endings;
mod process_doc;
mod scope;
mod text;
mod whitespace;

pub use finding::Finding;
pub use header::HeaderCheck;
pub use line_endings::{CR_FOUND, LineEndingCheck, MISSING_EOF_NEWLINE};
pub use process_doc::ProcessDocCheck;
pub use scope::RtlScope;
pub use text::{SourceText, split_lines};
pub use whitespace::{TRAILING_WHITESPACE, TrailingWhitespaceCheck};

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::Result;

pub const NOT_UTF8: &str = "File is not valid UTF-8";

/// A check over the raw bytes of a file.
pub trait ByteCheck {
    fn check(&self, path: &Path, data: &[u8]) -> Vec<Finding>;
}

/// A check over decoded text. Only runs for files that are valid UTF-8.
pub trait TextCheck {
    fn check(&self, path: &Path, source: &SourceText<'_>) -> Vec<Finding>;
}

/// Runs every check against one file in a fixed order:
/// line endings, UTF-8 decoding, trailing whitespace, header, process docs.
///
/// A decoding failure is reported once and ends the text checks for that file.
pub struct SourceChecker {
    repo_root: PathBuf,
    rtl_scope: RtlScope,
    line_endings: LineEndingCheck,
    trailing_whitespace: TrailingWhitespaceCheck,
    header: HeaderCheck,
    process_doc: ProcessDocCheck,
}

impl SourceChecker {
    /// # Errors
    /// Returns an error if the process declaration pattern cannot be compiled.
    pub fn new(config: &Config, repo_root: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self {
            repo_root: repo_root.into(),
            rtl_scope: RtlScope::new(&config.header),
            line_endings: LineEndingCheck,
            trailing_whitespace: TrailingWhitespaceCheck,
            header: HeaderCheck::new(&config.header),
            process_doc: ProcessDocCheck::new(&config.process_doc)?,
        })
    }

    #[must_use]
    pub fn check(&self, path: &Path, data: &[u8]) -> Vec<Finding> {
        let mut findings = self.line_endings.check(path, data);

        let Ok(text) = std::str::from_utf8(data) else {
            findings.push(Finding::file_level(path, NOT_UTF8));
            return findings;
        };
        let source = SourceText::new(text);

        findings.extend(self.trailing_whitespace.check(path, &source));

        let relative = path.strip_prefix(&self.repo_root).unwrap_or(path);
        if self.rtl_scope.applies_to(relative) {
            findings.extend(self.header.check(path, &source));
            findings.extend(self.process_doc.check(path, &source));
        }
        findings
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
