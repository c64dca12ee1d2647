//! Target discovery.
//!
//! Walks the configured roots below a repository root and returns the ordered,
//! de-duplicated list of files to check.

mod filter;

pub use filter::{ExtensionFilter, FileFilter, IgnoreFilter};

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::Config;
use crate::error::{OpqLintError, Result};

/// Trait for scanning directories and finding files.
pub trait FileScanner {
    /// Scan a directory and return all matching file paths.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be read.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

/// Walks configured roots below a repository root and collects lint targets.
///
/// Ignore rules are evaluated on paths relative to `repo_root`; returned paths
/// are `repo_root` joined with the relative path.
pub struct DirectoryScanner {
    repo_root: PathBuf,
    ignore: IgnoreFilter,
    extensions: ExtensionFilter,
}

impl DirectoryScanner {
    #[must_use]
    pub fn new(repo_root: impl Into<PathBuf>, ignore: IgnoreFilter, extensions: ExtensionFilter) -> Self {
        Self {
            repo_root: repo_root.into(),
            ignore,
            extensions,
        }
    }

    #[must_use]
    pub fn from_config(repo_root: impl Into<PathBuf>, config: &Config) -> Self {
        Self::new(
            repo_root,
            IgnoreFilter::new(&config.ignore),
            ExtensionFilter::new(config.scanner.extensions.clone()),
        )
    }

    /// Path relative to the repository root, used for all rule matching.
    #[must_use]
    pub fn relative<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.repo_root).unwrap_or(path)
    }

    /// Scan every root and return the unique targets sorted by path.
    ///
    /// Roots that do not exist are skipped. The order is byte-wise on the full
    /// path, so repeated runs over an unchanged tree yield the same list.
    ///
    /// # Errors
    /// Returns an error if an existing root cannot be traversed.
    pub fn discover(&self, roots: &[PathBuf]) -> Result<Vec<PathBuf>> {
        let mut targets = Vec::new();
        for root in roots {
            let root = self.repo_root.join(root);
            if !root.exists() {
                log::debug!("Skipping missing root {}", root.display());
                continue;
            }
            let found = self.scan(&root)?;
            log::debug!("Root {}: {} target(s)", root.display(), found.len());
            targets.extend(found);
        }

        targets.sort_unstable_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
        targets.dedup();
        Ok(targets)
    }
}

impl FileScanner for DirectoryScanner {
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let walker = WalkDir::new(root)
            .into_iter()
            .filter_entry(|e| !self.ignore.is_ignored(self.relative(e.path())));

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|source| OpqLintError::Walk {
                path: source
                    .path()
                    .map_or_else(|| root.to_path_buf(), Path::to_path_buf),
                source,
            })?;

            let path = entry.path();
            if path.is_file() && self.extensions.should_include(path) {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
