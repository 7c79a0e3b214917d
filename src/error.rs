use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CfgPatchError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create directory: {path}")]
    DirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("Failed to find required settings: {}", .0.join(", "))]
    MissingSettings(Vec<String>),
}

impl CfgPatchError {
    /// Whether this error comes from the filesystem rather than from configuration.
    #[must_use]
    pub const fn is_io(&self) -> bool {
        matches!(
            self,
            Self::FileAccess { .. } | Self::FileWrite { .. } | Self::DirCreate { .. } | Self::Io(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, CfgPatchError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
