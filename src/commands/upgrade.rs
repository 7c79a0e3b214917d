use crate::cli::{Cli, UpgradeArgs};
use crate::config::ToolConfig;
use crate::line::ConfigLine;
use crate::upgrade::{UpgradeResult, upgrade};
use crate::{EXIT_SUCCESS, Result, fsio};

use super::{commit, load_tool_config, report_error};

#[must_use]
pub fn run_upgrade(args: &UpgradeArgs, cli: &Cli) -> i32 {
    let result = load_tool_config(cli.tool_config.as_deref(), cli.no_config)
        .and_then(|config| run_upgrade_impl(args, &config));
    match result {
        Ok(_) => EXIT_SUCCESS,
        Err(e) => report_error(&e),
    }
}

/// Upgrades a configuration for a newer server release.
///
/// An in-place upgrade that changes nothing leaves the file untouched.
///
/// # Errors
/// Returns an error if the file cannot be read or written.
pub fn run_upgrade_impl(args: &UpgradeArgs, config: &ToolConfig) -> Result<UpgradeResult> {
    let source = fsio::read_config(&args.cfg)?;
    let result = upgrade(&ConfigLine::parse_all(&source.text), &config.format.indent);

    if !result.changed() && args.write.output.is_none() && !args.write.dry_run {
        tracing::info!(file = %args.cfg.display(), "configuration already up to date");
        return Ok(result);
    }

    let written = commit(&args.cfg, &args.write, &source.encode(&result.text()))?;
    tracing::info!(
        file = %written.as_deref().unwrap_or(&args.cfg).display(),
        journal_entries_removed = result.journal_entries_removed,
        journal_header_removed = result.journal_header_removed,
        tls_use_system_ca = ?result.tls_system_ca,
        dry_run = args.write.dry_run,
        "upgraded configuration"
    );
    Ok(result)
}

#[cfg(test)]
#[path = "upgrade_tests.rs"]
mod tests;
