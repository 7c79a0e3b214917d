use serde::{Deserialize, Serialize};

use crate::profiles::{DEFAULT_INDENT, DEFAULT_LOG_FILE_NAME, ProfileOptions};

/// Settings that tune how cfgpatch rewrites files.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ToolConfig {
    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub format: FormatConfig,
}

/// `[paths]`: log file naming and directory side effects.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PathsConfig {
    /// File name appended to the log directory (default: `mongod.log`).
    #[serde(default = "default_log_file_name")]
    pub log_file_name: String,

    /// Create declared directories before patching (default: true).
    #[serde(default = "default_true")]
    pub create_dirs: bool,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            log_file_name: default_log_file_name(),
            create_dirs: true,
        }
    }
}

/// `[format]`: layout of lines written by cfgpatch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FormatConfig {
    /// One indentation level (default: two spaces).
    #[serde(default = "default_indent")]
    pub indent: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            indent: default_indent(),
        }
    }
}

impl ToolConfig {
    #[must_use]
    pub fn profile_options(&self) -> ProfileOptions {
        ProfileOptions {
            indent: self.format.indent.clone(),
            log_file_name: self.paths.log_file_name.clone(),
        }
    }
}

fn default_log_file_name() -> String {
    DEFAULT_LOG_FILE_NAME.to_string()
}

fn default_indent() -> String {
    DEFAULT_INDENT.to_string()
}

const fn default_true() -> bool {
    true
}
