use serde::Serialize;

use crate::checker::Finding;
use crate::error::Result;
use crate::linter::LintReport;

use super::OutputFormatter;

/// Machine-readable report with the complete, uncapped findings list.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    status: &'static str,
    target_count: usize,
    finding_count: usize,
    findings: &'a [Finding],
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &LintReport) -> Result<String> {
        let output = JsonOutput {
            status: report.status().as_str(),
            target_count: report.target_count,
            finding_count: report.findings.len(),
            findings: &report.findings,
        };

        let mut json = serde_json::to_string_pretty(&output)?;
        json.push('\n');
        Ok(json)
    }
}
