use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::config::{ConfigLoader, FileConfigLoader, LoadResult};
use crate::error::{OpqLintError, Result};
use crate::linter::{LintStatus, Linter};
use crate::output::{JsonFormatter, OutputFormat, OutputFormatter, TextFormatter};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};

#[must_use]
pub fn run_check(cli: &Cli) -> i32 {
    match run_check_impl(cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            log::debug!("{} error: {e:?}", e.error_type());
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Run the checks and write the report; returns the process exit code.
///
/// # Errors
/// Returns an error if the repository root or configuration is invalid, or if
/// a target cannot be traversed or read.
pub fn run_check_impl(cli: &Cli) -> Result<i32> {
    // 1. Resolve repository root
    let repo_root = resolve_repo_root(&cli.repo_root)?;

    // 2. Load configuration
    let loaded = load_config(cli, &repo_root)?;
    match &loaded.source {
        Some(path) => log::info!("Using configuration {}", path.display()),
        None => log::debug!("Using built-in rules"),
    }

    if cli.print_config {
        print!(
            "{}",
            toml::to_string_pretty(&loaded.config)
                .map_err(|e| OpqLintError::Config(e.to_string()))?
        );
        return Ok(EXIT_SUCCESS);
    }

    // 3. Discover and check targets
    let linter = Linter::new(&loaded.config, &repo_root)?;
    let report = linter.run()?;
    let status = report.status();

    // 4. Write report
    match cli.format {
        OutputFormat::Json => print!("{}", JsonFormatter.format(&report)?),
        OutputFormat::Text => {
            let text = TextFormatter::new(loaded.config.report.max_findings).format(&report)?;
            if status == LintStatus::Pass {
                if !cli.quiet {
                    print!("{text}");
                }
            } else {
                eprint!("{text}");
            }
        }
    }

    Ok(status.exit_code())
}

/// Canonicalize the repository root so reported paths are absolute.
///
/// # Errors
/// Returns a configuration error if the directory does not exist.
pub fn resolve_repo_root(path: &Path) -> Result<PathBuf> {
    if !path.is_dir() {
        return Err(OpqLintError::Config(format!(
            "Repository root is not a directory: {}",
            path.display()
        )));
    }
    Ok(dunce::canonicalize(path)?)
}

/// Load the effective configuration honoring `--config` and `--no-config`.
///
/// # Errors
/// Returns an error if the selected config file cannot be read, parsed or validated.
pub fn load_config(cli: &Cli, repo_root: &Path) -> Result<LoadResult> {
    if cli.no_config {
        return Ok(LoadResult {
            config: crate::config::Config::default(),
            source: None,
        });
    }

    let loader = FileConfigLoader::new();
    cli.config
        .as_deref()
        .map_or_else(|| loader.load(repo_root), |path| loader.load_from_path(path))
}
