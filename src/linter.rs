//! Runs every check over the discovered targets and builds the report.

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::checker::{Finding, SourceChecker};
use crate::config::Config;
use crate::error::{OpqLintError, Result};
use crate::scanner::DirectoryScanner;
use crate::{EXIT_CONFIG_ERROR, EXIT_FINDINGS, EXIT_SUCCESS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintStatus {
    Pass,
    Fail,
    /// No target was found under any root. This is a configuration problem,
    /// not a clean result.
    NoTargets,
}

impl LintStatus {
    #[must_use]
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::Pass => EXIT_SUCCESS,
            Self::Fail => EXIT_FINDINGS,
            Self::NoTargets => EXIT_CONFIG_ERROR,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::Fail => "fail",
            Self::NoTargets => "no_targets",
        }
    }
}

/// Outcome of a full run: every finding, grouped by file in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LintReport {
    pub findings: Vec<Finding>,
    pub target_count: usize,
}

impl LintReport {
    #[must_use]
    pub fn status(&self) -> LintStatus {
        if self.target_count == 0 {
            LintStatus::NoTargets
        } else if self.findings.is_empty() {
            LintStatus::Pass
        } else {
            LintStatus::Fail
        }
    }

    #[must_use]
    pub fn exit_code(&self) -> i32 {
        self.status().exit_code()
    }
}

/// Discovers targets under the configured roots and checks each of them.
pub struct Linter {
    roots: Vec<PathBuf>,
    scanner: DirectoryScanner,
    checker: SourceChecker,
}

impl Linter {
    /// # Errors
    /// Returns an error if the configured rules cannot be compiled.
    pub fn new(config: &Config, repo_root: impl Into<PathBuf>) -> Result<Self> {
        let repo_root = repo_root.into();
        Ok(Self {
            roots: config.scanner.roots.clone(),
            scanner: DirectoryScanner::from_config(&repo_root, config),
            checker: SourceChecker::new(config, &repo_root)?,
        })
    }

    /// Ordered, de-duplicated list of files that will be checked.
    ///
    /// # Errors
    /// Returns an error if an existing root cannot be traversed.
    pub fn discover(&self) -> Result<Vec<PathBuf>> {
        self.scanner.discover(&self.roots)
    }

    /// Read one target and run every check on it.
    ///
    /// # Errors
    /// Returns `OpqLintError::FileRead` if the file cannot be read.
    pub fn check_file(&self, path: &Path) -> Result<Vec<Finding>> {
        let data = fs::read(path).map_err(|source| OpqLintError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let findings = self.checker.check(path, &data);
        log::trace!("{}: {} finding(s)", path.display(), findings.len());
        Ok(findings)
    }

    /// Discover and check all targets.
    ///
    /// Files are checked in parallel but collected back in discovery order, so
    /// the findings sequence matches a sequential run.
    ///
    /// # Errors
    /// Returns an error on the first traversal or read failure.
    pub fn run(&self) -> Result<LintReport> {
        let targets = self.discover()?;
        log::info!("Discovered {} target(s)", targets.len());
        if targets.is_empty() {
            return Ok(LintReport::default());
        }

        let per_file: Vec<Vec<Finding>> = targets
            .par_iter()
            .map(|path| self.check_file(path))
            .collect::<Result<_>>()?;

        Ok(LintReport {
            findings: per_file.into_iter().flatten().collect(),
            target_count: targets.len(),
        })
    }
}

#[cfg(test)]
#[path = "linter_tests.rs"]
mod tests;
