use std::fmt::Write;

use crate::error::Result;
use crate::linter::{LintReport, LintStatus};

use super::OutputFormatter;

const TOOL: &str = "opq_lint";

/// Plain-text report. Tooling parses the `path:line: message` lines, so the
/// layout is fixed and never colored.
///
/// Collection is unbounded; the listing cap is applied here only.
pub struct TextFormatter {
    max_findings: usize,
}

impl TextFormatter {
    #[must_use]
    pub const fn new(max_findings: usize) -> Self {
        Self { max_findings }
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(200)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &LintReport) -> Result<String> {
        let mut output = String::new();
        match report.status() {
            LintStatus::NoTargets => {
                let _ = writeln!(output, "{TOOL}: no targets found");
            }
            LintStatus::Pass => {
                let _ = writeln!(output, "{TOOL}: PASS ({} files)", report.target_count);
            }
            LintStatus::Fail => {
                let _ = writeln!(output, "{TOOL}: FAIL\n");
                for finding in report.findings.iter().take(self.max_findings) {
                    let _ = writeln!(output, "{finding}");
                }
                let remaining = report.findings.len().saturating_sub(self.max_findings);
                if remaining > 0 {
                    let _ = writeln!(output, "... and {remaining} more");
                }
            }
        }
        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
