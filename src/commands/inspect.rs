use crate::cli::{InspectArgs, InspectFormat};
use crate::settings::MongodSettings;
use crate::{CfgPatchError, EXIT_SUCCESS, Result, fsio};

use super::report_error;

#[must_use]
pub fn run_inspect(args: &InspectArgs) -> i32 {
    match run_inspect_impl(args) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => report_error(&e),
    }
}

/// Reads a configuration and renders the settings it declares.
///
/// # Errors
/// Returns an error if the file cannot be read, or if `--require` is set and
/// a required setting is absent.
pub fn run_inspect_impl(args: &InspectArgs) -> Result<String> {
    let source = fsio::read_config(&args.cfg)?;
    let settings = MongodSettings::extract_str(&source.text);

    if args.require {
        let missing = settings.missing_required();
        if !missing.is_empty() {
            return Err(CfgPatchError::MissingSettings(
                missing.into_iter().map(String::from).collect(),
            ));
        }
    }

    format_settings(&settings, args.format)
}

/// Renders settings in the requested format.
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn format_settings(settings: &MongodSettings, format: InspectFormat) -> Result<String> {
    match format {
        InspectFormat::Text => Ok(settings.format_text()),
        InspectFormat::Json => {
            let json = serde_json::to_string_pretty(settings)?;
            Ok(format!("{json}\n"))
        }
    }
}

#[cfg(test)]
#[path = "inspect_tests.rs"]
mod tests;
