use crate::cli::InitArgs;
use crate::{CfgPatchError, EXIT_SUCCESS, Result, fsio};

use super::report_error;

#[must_use]
pub fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => report_error(&e),
    }
}

/// Writes a commented tool configuration template.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(CfgPatchError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fsio::write_atomic(output_path, generate_config_template().as_bytes())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# cfgpatch tool configuration
#
# Looked up in this order: --tool-config <path>, ./.cfgpatch.toml,
# then config.toml in the user configuration directory.

[paths]
# File name appended to the log directory given to `unauth` (default: mongod.log)
log_file_name = "mongod.log"

# Create the data, log and certificate directories before patching (default: true)
create_dirs = true

[format]
# One indentation level for lines cfgpatch writes (default: two spaces)
indent = "  "
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
