mod loader;
mod model;

pub use loader::{
    ConfigLoader, FileConfigLoader, FileSystem, LOCAL_CONFIG_NAME, LoadResult, RealFileSystem,
};
pub use model::{
    Config, DEFAULT_DELIMITER, HeaderConfig, IgnoreConfig, ProcessDocConfig, ReportConfig,
    ScannerConfig,
};

use crate::error::{OpqLintError, Result};

impl Config {
    /// Reject configurations under which the rules cannot run meaningfully.
    ///
    /// # Errors
    /// Returns `OpqLintError::Config` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if self.scanner.roots.is_empty() {
            return Err(invalid("scanner.roots cannot be empty"));
        }
        if self.scanner.extensions.iter().all(String::is_empty) {
            return Err(invalid("scanner.extensions cannot be empty"));
        }
        if self.header.head_lines == 0 {
            return Err(invalid("header.head_lines must be at least 1"));
        }
        if self.header.fields.is_empty() {
            return Err(invalid("header.fields cannot be empty"));
        }
        if self.header.fields.iter().any(String::is_empty) {
            return Err(invalid("header.fields cannot contain empty labels"));
        }
        if self.process_doc.label_prefix.is_empty() {
            return Err(invalid("process_doc.label_prefix cannot be empty"));
        }
        if self.process_doc.keyword.is_empty() {
            return Err(invalid("process_doc.keyword cannot be empty"));
        }
        if self.process_doc.lookback_lines == 0 {
            return Err(invalid("process_doc.lookback_lines must be at least 1"));
        }
        Ok(())
    }
}

fn invalid(message: &str) -> OpqLintError {
    OpqLintError::Config(message.to_string())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
