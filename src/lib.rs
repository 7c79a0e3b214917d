pub mod cli;
pub mod commands;
pub mod config;
pub mod directive;
pub mod engine;
pub mod error;
pub mod fsio;
pub mod host;
pub mod line;
pub mod logging;
pub mod profiles;
pub mod section;
pub mod settings;
pub mod upgrade;

pub use error::{CfgPatchError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_IO_ERROR: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;
pub const EXIT_MISSING_SETTINGS: i32 = 3;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
