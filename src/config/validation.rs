//! Configuration semantic validation.

use crate::config::ToolConfig;
use crate::{CfgPatchError, Result};

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error if `log_file_name` is empty or contains a path separator,
/// or if `indent` is empty or holds anything but spaces and tabs.
pub fn validate_config_semantics(config: &ToolConfig) -> Result<()> {
    let name = &config.paths.log_file_name;
    if name.trim().is_empty() {
        return Err(CfgPatchError::Config(
            "paths.log_file_name must not be empty".to_string(),
        ));
    }
    if name.contains(['/', '\\']) {
        return Err(CfgPatchError::Config(format!(
            "paths.log_file_name must be a file name, got '{name}'"
        )));
    }

    let indent = &config.format.indent;
    if indent.is_empty() || !indent.chars().all(|c| c == ' ' || c == '\t') {
        return Err(CfgPatchError::Config(format!(
            "format.indent must be one or more spaces or tabs, got {indent:?}"
        )));
    }

    Ok(())
}
