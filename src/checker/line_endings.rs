use std::path::Path;

use super::{ByteCheck, Finding};

pub const CR_FOUND: &str = "CRLF/CR characters found (use LF only)";
pub const MISSING_EOF_NEWLINE: &str = "Missing trailing newline at EOF";

/// LF-only line endings and a trailing newline at end of file.
///
/// Both findings are file-level: a file with a thousand CRLF lines still
/// reports a single CR finding.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineEndingCheck;

impl ByteCheck for LineEndingCheck {
    fn check(&self, path: &Path, data: &[u8]) -> Vec<Finding> {
        let mut findings = Vec::new();
        if data.contains(&b'\r') {
            findings.push(Finding::file_level(path, CR_FOUND));
        }
        if data.last().is_some_and(|&b| b != b'\n') {
            findings.push(Finding::file_level(path, MISSING_EOF_NEWLINE));
        }
        findings
    }
}
