use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Output format for `inspect`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum InspectFormat {
    /// Aligned key/value table
    #[default]
    Text,
    /// JSON object
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "cfgpatch")]
#[command(author, version, about = "Patch mongod configuration files in place")]
#[command(long_about = "Rewrites a mongod YAML-like configuration file line by line, \
    leaving every untouched line byte-identical.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    1 - File could not be read, written or created\n  \
    2 - Usage or tool configuration error\n  \
    3 - Required settings missing (inspect --require)")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only report errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to the cfgpatch tool configuration
    #[arg(long, global = true)]
    pub tool_config: Option<PathBuf>,

    /// Skip loading the tool configuration
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Configure an unauthenticated server: data/log paths, bind address, authorization
    Unauth(UnauthArgs),

    /// Configure an authenticated server: authorization, TLS certificate, port
    Auth(AuthArgs),

    /// Prepare a configuration for a newer server release
    Upgrade(UpgradeArgs),

    /// Print the settings a configuration file declares
    Inspect(InspectArgs),

    /// Generate a default tool configuration file
    Init(InitArgs),
}

/// Destination flags shared by every rewriting command.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct WriteArgs {
    /// Write the result here instead of over the input file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the result to stdout; touch nothing on disk
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Parser, Debug)]
pub struct UnauthArgs {
    /// Configuration file to patch
    pub cfg: PathBuf,

    /// New storage path (`dbPath`)
    pub db_path: String,

    /// Log directory; the log file name is appended
    pub log_path: String,

    /// Addresses to listen on (`bindIp`)
    pub bind_ip: String,

    /// Value for `security.authorization`
    pub authorization: String,

    #[command(flatten)]
    pub write: WriteArgs,
}

#[derive(Parser, Debug)]
pub struct AuthArgs {
    /// Configuration file to patch
    pub cfg: PathBuf,

    /// Value for `security.authorization`
    pub authorization: String,

    /// PEM file for `net.tls.certificateKeyFile`
    pub cert_key_file: String,

    /// Port to listen on
    pub port: String,

    #[command(flatten)]
    pub write: WriteArgs,
}

#[derive(Parser, Debug)]
pub struct UpgradeArgs {
    /// Configuration file to upgrade
    pub cfg: PathBuf,

    #[command(flatten)]
    pub write: WriteArgs,
}

#[derive(Parser, Debug)]
pub struct InspectArgs {
    /// Configuration file to read
    pub cfg: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: InspectFormat,

    /// Fail with exit code 3 when a required setting is missing
    #[arg(long)]
    pub require: bool,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for the tool configuration
    #[arg(short, long, default_value = ".cfgpatch.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
