use std::path::Path;

use crate::config::HeaderConfig;

use super::{Finding, SourceText, TextCheck};

/// Top-of-file header block: the exact delimiter line as the very first bytes,
/// and every labeled field somewhere in the first `head_lines` lines.
///
/// Each missing requirement is its own file-level finding.
#[derive(Debug, Clone)]
pub struct HeaderCheck {
    delimiter: String,
    fields: Vec<String>,
    head_lines: usize,
}

impl HeaderCheck {
    #[must_use]
    pub fn new(config: &HeaderConfig) -> Self {
        Self {
            delimiter: config.delimiter.clone(),
            fields: config.fields.clone(),
            head_lines: config.head_lines,
        }
    }
}

impl TextCheck for HeaderCheck {
    fn check(&self, path: &Path, source: &SourceText<'_>) -> Vec<Finding> {
        let mut findings = Vec::new();
        if !source.text.starts_with(self.delimiter.as_str()) {
            findings.push(Finding::file_level(
                path,
                format!("Missing top-of-file delimiter line \"{}\"", self.delimiter),
            ));
        }

        let head = &source.lines[..source.lines.len().min(self.head_lines)];
        for field in &self.fields {
            if !head.iter().any(|line| line.contains(field.as_str())) {
                findings.push(Finding::file_level(
                    path,
                    format!("Missing header field \"{field}\" in top-of-file comment block"),
                ));
            }
        }
        findings
    }
}

#[cfg(test)]
#[path = "header_tests.rs"]
mod tests;
