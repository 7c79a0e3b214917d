//! `unauth` and `auth`: run a directive profile over a configuration file.

use std::path::Path;

use crate::cli::{AuthArgs, Cli, UnauthArgs, WriteArgs};
use crate::config::ToolConfig;
use crate::engine::{TransformResult, transform};
use crate::line::ConfigLine;
use crate::profiles::{self, Profile};
use crate::{EXIT_SUCCESS, Result, fsio};

use super::{commit, load_tool_config, report_error};

#[must_use]
pub fn run_unauth(args: &UnauthArgs, cli: &Cli) -> i32 {
    let result = load_tool_config(cli.tool_config.as_deref(), cli.no_config)
        .and_then(|config| run_unauth_impl(args, &config));
    match result {
        Ok(_) => EXIT_SUCCESS,
        Err(e) => report_error(&e),
    }
}

/// Patches a configuration for an unauthenticated server.
///
/// # Errors
/// Returns an error if a directory cannot be created or the file cannot be read or written.
pub fn run_unauth_impl(args: &UnauthArgs, config: &ToolConfig) -> Result<TransformResult> {
    let profile = profiles::unauthenticated(
        &config.profile_options(),
        &args.db_path,
        &args.log_path,
        &args.bind_ip,
        &args.authorization,
    );
    apply_profile(&args.cfg, &profile, config, &args.write)
}

#[must_use]
pub fn run_auth(args: &AuthArgs, cli: &Cli) -> i32 {
    let result = load_tool_config(cli.tool_config.as_deref(), cli.no_config)
        .and_then(|config| run_auth_impl(args, &config));
    match result {
        Ok(_) => EXIT_SUCCESS,
        Err(e) => report_error(&e),
    }
}

/// Patches a configuration for an authenticated, TLS-enabled server.
///
/// # Errors
/// Returns an error if a directory cannot be created or the file cannot be read or written.
pub fn run_auth_impl(args: &AuthArgs, config: &ToolConfig) -> Result<TransformResult> {
    let profile = profiles::authenticated(
        &config.profile_options(),
        &args.authorization,
        &args.cert_key_file,
        &args.port,
    );
    apply_profile(&args.cfg, &profile, config, &args.write)
}

fn apply_profile(
    cfg: &Path,
    profile: &Profile,
    config: &ToolConfig,
    write: &WriteArgs,
) -> Result<TransformResult> {
    let source = fsio::read_config(cfg)?;

    if write.dry_run {
        tracing::debug!("dry run, skipping directory creation");
    } else if config.paths.create_dirs {
        for dir in &profile.ensure_dirs {
            fsio::ensure_dir(dir)?;
        }
    } else {
        tracing::debug!(count = profile.ensure_dirs.len(), "directory creation disabled");
    }

    let result = transform(&ConfigLine::parse_all(&source.text), &profile.directives);
    let written = commit(cfg, write, &source.encode(&result.text()))?;
    tracing::info!(
        file = %written.as_deref().unwrap_or(cfg).display(),
        profile = profile.name,
        fired = result.total_fired(),
        inserted = result.inserted,
        dry_run = write.dry_run,
        "patched configuration"
    );
    Ok(result)
}

#[cfg(test)]
#[path = "patch_tests.rs"]
mod tests;
