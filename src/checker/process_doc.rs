//! Documentation rule for labeled process declarations.
//!
//! Matching is textual: a regex finds the declaration and a substring scan over
//! a fixed lookback window finds the annotation markers.

use std::path::Path;

use regex::Regex;

use crate::config::ProcessDocConfig;
use crate::error::{OpqLintError, Result};

use super::{Finding, SourceText, TextCheck};

/// Labeled process declarations (`proc_fill : process (clk)`) must be preceded
/// by `@name` and `@brief` annotation comments.
///
/// The search is a plain substring scan over the window of `lookback_lines`
/// lines ending at the declaration itself. It is not structural: an annotation
/// block belonging to an earlier process inside the window satisfies a later
/// one as well.
#[derive(Debug, Clone)]
pub struct ProcessDocCheck {
    declaration: Regex,
    lookback_lines: usize,
    name_marker: String,
    brief_marker: String,
}

impl ProcessDocCheck {
    /// # Errors
    /// Returns an error if the declaration pattern built from the config does not compile.
    pub fn new(config: &ProcessDocConfig) -> Result<Self> {
        let pattern = format!(
            r"(?i)^\s*({}[A-Za-z0-9_]+)\s*:\s*{}\b",
            regex::escape(&config.label_prefix),
            regex::escape(&config.keyword)
        );
        let declaration =
            Regex::new(&pattern).map_err(|source| OpqLintError::InvalidPattern { pattern, source })?;

        Ok(Self {
            declaration,
            lookback_lines: config.lookback_lines,
            name_marker: config.name_marker.clone(),
            brief_marker: config.brief_marker.clone(),
        })
    }

    fn missing(&self, path: &Path, line_no: usize, label: &str, marker: &str) -> Finding {
        Finding::new(
            path,
            line_no,
            format!("{label} missing preceding \"{marker}\" block"),
        )
    }
}

impl TextCheck for ProcessDocCheck {
    fn check(&self, path: &Path, source: &SourceText<'_>) -> Vec<Finding> {
        let mut findings = Vec::new();
        for (idx, line) in source.lines.iter().enumerate() {
            let Some(label) = self.declaration.captures(line).and_then(|c| c.get(1)) else {
                continue;
            };
            let line_no = idx + 1;
            let window = &source.lines[line_no.saturating_sub(self.lookback_lines)..line_no];

            if !window.iter().any(|l| l.contains(self.name_marker.as_str())) {
                findings.push(self.missing(path, line_no, label.as_str(), &self.name_marker));
            }
            if !window.iter().any(|l| l.contains(self.brief_marker.as_str())) {
                findings.push(self.missing(path, line_no, label.as_str(), &self.brief_marker));
            }
        }
        findings
    }
}

#[cfg(test)]
#[path = "process_doc_tests.rs"]
mod tests;
