//! The standard directive profiles for `mongod.cfg`.
//!
//! Profiles are plain data: an ordered [`DirectiveSet`] plus the directories
//! that must exist before the file is rewritten.

use std::path::PathBuf;

use crate::directive::{Action, Directive, DirectiveSet, Effect, Trigger};
use crate::section::Section;

pub const DEFAULT_LOG_FILE_NAME: &str = "mongod.log";
pub const DEFAULT_INDENT: &str = "  ";

/// Directive names, shared with reporting and tests.
pub mod names {
    pub const DB_PATH: &str = "dbPath";
    pub const LOG_PATH: &str = "systemLog.path";
    pub const BIND_IP: &str = "bindIp";
    pub const PORT: &str = "port";
    pub const UNCOMMENT_SECURITY: &str = "uncomment-security";
    pub const ARM_SECURITY: &str = "security";
    pub const ARM_NET: &str = "net";
    pub const AUTHORIZATION: &str = "authorization";
    pub const TLS: &str = "net.tls";
    pub const BLANK_RESET: &str = "blank-reset";
}

/// Formatting knobs shared by both profiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileOptions {
    pub indent: String,
    pub log_file_name: String,
}

impl Default for ProfileOptions {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT.to_string(),
            log_file_name: DEFAULT_LOG_FILE_NAME.to_string(),
        }
    }
}

/// A directive set together with its directory side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub directives: DirectiveSet,
    /// Directories to create before the scan.
    pub ensure_dirs: Vec<PathBuf>,
}

/// Append the log file name to a directory, adding a `\` separator if the
/// directory does not already end in one.
#[must_use]
pub fn normalize_log_path(log_dir: &str, file_name: &str) -> String {
    let mut path = log_dir.to_string();
    if !path.ends_with(['\\', '/']) {
        path.push('\\');
    }
    path.push_str(file_name);
    path
}

fn authorization_line(opts: &ProfileOptions, authorization: &str) -> String {
    format!("{}authorization: {authorization}", opts.indent)
}

fn rewrite(opts: &ProfileOptions, key: &str, value: &str) -> Action {
    Action::rewrite(format!("{}{key}: {{value}}", opts.indent), value)
}

/// Profile for a fresh install: storage, logging, binding, and switching
/// on authorization by uncommenting `#security:`.
#[must_use]
pub fn unauthenticated(
    opts: &ProfileOptions,
    db_path: &str,
    log_path: &str,
    bind_ip: &str,
    authorization: &str,
) -> Profile {
    let full_log_path = normalize_log_path(log_path, &opts.log_file_name);

    let directives = DirectiveSet::new()
        .with(Directive::new(
            names::DB_PATH,
            Trigger::key("dbPath:"),
            rewrite(opts, "dbPath", db_path),
        ))
        .with(Directive::new(
            names::LOG_PATH,
            Trigger::key_in("path:", Section::SystemLog),
            rewrite(opts, "path", &full_log_path),
        ))
        .with(Directive::new(
            names::BIND_IP,
            Trigger::key("bindIp:"),
            rewrite(opts, "bindIp", bind_ip),
        ))
        .with(
            Directive::new(
                names::UNCOMMENT_SECURITY,
                Trigger::key("#security:"),
                Action::ReplaceLine("security:".to_string()),
            )
            .with_effect(Effect::Arm(Section::Security)),
        )
        .with(Directive::new(
            names::AUTHORIZATION,
            Trigger::Pending(Section::Security),
            Action::InsertBefore(vec![authorization_line(opts, authorization)]),
        ))
        .with(
            Directive::new(names::BLANK_RESET, Trigger::Blank, Action::Keep)
                .with_effect(Effect::ResetSections),
        );

    Profile {
        name: "unauthenticated",
        directives,
        ensure_dirs: vec![PathBuf::from(db_path), PathBuf::from(log_path)],
    }
}

/// Profile for an install that already has users: enforce authorization,
/// move the port, and require TLS.
///
/// The `port` rewrite is declared ahead of the TLS insertion so a `port:`
/// line directly under `net:` is rewritten rather than used as the anchor.
#[must_use]
pub fn authenticated(
    opts: &ProfileOptions,
    authorization: &str,
    certificate_key_file: &str,
    port: &str,
) -> Profile {
    let nested = format!("{0}{0}", opts.indent);
    let tls_block = vec![
        format!("{}tls:", opts.indent),
        format!("{nested}mode: requireTLS"),
        format!("{nested}certificateKeyFile: {certificate_key_file}"),
    ];

    let directives = DirectiveSet::new()
        .with(Directive::new(
            names::PORT,
            Trigger::key("port:"),
            rewrite(opts, "port", port),
        ))
        .with(Directive::new(
            names::AUTHORIZATION,
            Trigger::Pending(Section::Security),
            Action::InsertBefore(vec![authorization_line(opts, authorization)]),
        ))
        .with(Directive::new(
            names::TLS,
            Trigger::Pending(Section::Net),
            Action::InsertBefore(tls_block),
        ))
        .with(
            Directive::new(names::ARM_SECURITY, Trigger::key("security:"), Action::Keep)
                .with_effect(Effect::Arm(Section::Security)),
        )
        .with(
            Directive::new(names::ARM_NET, Trigger::key("net:"), Action::Keep)
                .with_effect(Effect::Arm(Section::Net)),
        );

    let ensure_dirs = certificate_dir(certificate_key_file).into_iter().collect();

    Profile {
        name: "authenticated",
        directives,
        ensure_dirs,
    }
}

/// Parent directory of the certificate key file, accepting either separator.
fn certificate_dir(certificate_key_file: &str) -> Option<PathBuf> {
    let (dir, _) = certificate_key_file.rsplit_once(['\\', '/'])?;
    (!dir.is_empty()).then(|| PathBuf::from(dir))
}

#[cfg(test)]
#[path = "profiles_tests.rs"]
mod tests;
