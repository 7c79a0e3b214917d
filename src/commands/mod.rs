pub mod init;
pub mod inspect;
pub mod patch;
pub mod upgrade;

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cli::WriteArgs;
use crate::config::{ConfigLoader, FileConfigLoader, ToolConfig};
use crate::{
    CfgPatchError, EXIT_CONFIG_ERROR, EXIT_IO_ERROR, EXIT_MISSING_SETTINGS, Result, fsio,
};

pub use init::{generate_config_template, run_init, run_init_impl};
pub use inspect::{run_inspect, run_inspect_impl};
pub use patch::{run_auth, run_auth_impl, run_unauth, run_unauth_impl};
pub use upgrade::{run_upgrade, run_upgrade_impl};

/// Loads the tool configuration, or defaults when `no_config` is set.
///
/// # Errors
/// Returns an error if a configuration file exists but is unreadable or invalid.
pub fn load_tool_config(config_path: Option<&Path>, no_config: bool) -> Result<ToolConfig> {
    if no_config {
        return Ok(ToolConfig::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// Maps an error to the process exit code.
#[must_use]
pub const fn exit_code_for(err: &CfgPatchError) -> i32 {
    if err.is_io() {
        EXIT_IO_ERROR
    } else if matches!(err, CfgPatchError::MissingSettings(_)) {
        EXIT_MISSING_SETTINGS
    } else {
        EXIT_CONFIG_ERROR
    }
}

pub(crate) fn report_error(err: &CfgPatchError) -> i32 {
    eprintln!("Error: {err}");
    exit_code_for(err)
}

/// Delivers rewritten content: stdout for `--dry-run`, otherwise an atomic
/// write to `--output` or back over `source`.
///
/// Returns the path written, or `None` for a dry run.
///
/// # Errors
/// Returns an error if the destination cannot be written.
pub fn commit(source: &Path, write: &WriteArgs, content: &[u8]) -> Result<Option<PathBuf>> {
    if write.dry_run {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(content)?;
        stdout.flush()?;
        return Ok(None);
    }

    let target = write
        .output
        .clone()
        .unwrap_or_else(|| source.to_path_buf());
    fsio::write_atomic(&target, content)?;
    Ok(Some(target))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
