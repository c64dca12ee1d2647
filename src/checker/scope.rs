use std::path::Path;

use crate::config::HeaderConfig;
use crate::path_utils::{dir_contains_fragment, has_suffix_ignore_case};

/// Decides whether the header and process-documentation rules apply to a file.
///
/// Only hand-written RTL is covered: testbench/verification trees and known
/// generated outputs are exempt. Paths are expected relative to the repository root.
#[derive(Debug, Clone)]
pub struct RtlScope {
    extensions: Vec<String>,
    exempt_dirs: Vec<String>,
    exempt_files: Vec<String>,
}

impl RtlScope {
    #[must_use]
    pub fn new(config: &HeaderConfig) -> Self {
        Self {
            extensions: config.extensions.clone(),
            exempt_dirs: config.exempt_dirs.clone(),
            exempt_files: config.exempt_files.clone(),
        }
    }

    #[must_use]
    pub fn applies_to(&self, relative: &Path) -> bool {
        if !has_suffix_ignore_case(relative, &self.extensions) {
            return false;
        }
        if self
            .exempt_dirs
            .iter()
            .any(|fragment| dir_contains_fragment(relative, fragment))
        {
            return false;
        }

        let name = relative
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();
        !self.exempt_files.iter().any(|f| *f == name)
    }
}
