use std::path::PathBuf;

use clap::Parser;

use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "opq-lint")]
#[command(author, version, about = "Style and documentation checks for the OPQ HDL sources")]
#[command(long_about = "Checks line endings, trailing whitespace, RTL header blocks and \
    process documentation in the packet scheduler and UVM OPQ source trees.\n\n\
    Exit codes:\n  \
    0 - All checks passed\n  \
    1 - Violations found\n  \
    2 - Configuration or runtime error (including: no files found)")]
pub struct Cli {
    /// Repository root that the scan roots are resolved against
    #[arg(long, default_value = ".")]
    pub repo_root: PathBuf,

    /// Path to configuration file (default: <repo-root>/.opq-lint.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file and use the built-in rules
    #[arg(long, conflicts_with = "config")]
    pub no_config: bool,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,

    /// Increase log verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the success line
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Default `env_logger` filter for the requested verbosity; `RUST_LOG` wins.
    #[must_use]
    pub const fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
