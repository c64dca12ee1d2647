use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OpqLintError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to walk directory: {path}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Invalid regex pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl OpqLintError {
    /// Short category name, used in debug logging.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) => "Config",
            Self::FileRead { .. } => "FileRead",
            Self::Walk { .. } => "Walk",
            Self::InvalidPattern { .. } => "Pattern",
            Self::Io(_) => "IO",
            Self::TomlParse(_) => "Syntax",
            Self::JsonSerialize(_) => "Serialize",
        }
    }
}

pub type Result<T> = std::result::Result<T, OpqLintError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
