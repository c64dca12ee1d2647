use std::borrow::Cow;
use std::path::Path;

use crate::config::IgnoreConfig;
use crate::path_utils::{has_suffix_ignore_case, segments};

pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;
}

/// Excludes generated, tool-owned and version-control trees by path segment.
///
/// Rules are OR-ed: a path is ignored as soon as any rule matches any segment.
#[derive(Debug, Clone)]
pub struct IgnoreFilter {
    dir_names: Vec<String>,
    dir_prefixes: Vec<String>,
    testbench_segments: Vec<String>,
    generated_testbench_files: Vec<String>,
}

impl IgnoreFilter {
    #[must_use]
    pub fn new(config: &IgnoreConfig) -> Self {
        Self {
            dir_names: config.dir_names.clone(),
            dir_prefixes: config
                .dir_prefixes
                .iter()
                .filter(|p| !p.is_empty())
                .cloned()
                .collect(),
            testbench_segments: config.testbench_segments.clone(),
            generated_testbench_files: config.generated_testbench_files.clone(),
        }
    }

    #[must_use]
    pub fn is_ignored(&self, path: &Path) -> bool {
        let parts = segments(path);

        let reserved_segment = parts.iter().any(|part| {
            self.dir_names.iter().any(|name| name == part)
                || self
                    .dir_prefixes
                    .iter()
                    .any(|prefix| part.starts_with(prefix.as_str()))
        });

        reserved_segment || self.is_generated_testbench_output(path, &parts)
    }

    fn is_generated_testbench_output(&self, path: &Path, parts: &[Cow<'_, str>]) -> bool {
        if self.testbench_segments.is_empty() {
            return false;
        }
        let in_testbench = self
            .testbench_segments
            .iter()
            .all(|wanted| parts.iter().any(|part| part == wanted.as_str()));
        if !in_testbench {
            return false;
        }

        path.file_name()
            .map(|name| name.to_string_lossy())
            .is_some_and(|name| self.generated_testbench_files.iter().any(|f| *f == name))
    }
}

impl FileFilter for IgnoreFilter {
    fn should_include(&self, path: &Path) -> bool {
        !self.is_ignored(path)
    }
}

/// Accepts files whose name ends with one of the allowed suffixes (case-insensitive).
#[derive(Debug, Clone)]
pub struct ExtensionFilter {
    extensions: Vec<String>,
}

impl ExtensionFilter {
    #[must_use]
    pub const fn new(extensions: Vec<String>) -> Self {
        Self { extensions }
    }
}

impl FileFilter for ExtensionFilter {
    fn should_include(&self, path: &Path) -> bool {
        has_suffix_ignore_case(path, &self.extensions)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
