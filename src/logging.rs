use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Filter directive derived from the command-line verbosity flags.
#[must_use]
pub const fn default_directive(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "cfgpatch=error";
    }
    match verbose {
        0 => "cfgpatch=info",
        1 => "cfgpatch=debug",
        _ => "cfgpatch=trace",
    }
}

/// Installs the global subscriber. `RUST_LOG` takes precedence over the flags.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, quiet)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
