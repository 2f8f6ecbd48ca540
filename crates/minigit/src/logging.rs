//! Logging initialization.
//!
//! Logs go to stderr so they never interleave with the menu output on
//! stdout. `RUST_LOG` overrides the defaults when set.

use tracing_subscriber::EnvFilter;

/// Initialize tracing based on verbosity.
///
/// This should be called once at application startup.
pub fn init(verbose: bool) {
    let default_filter = if verbose {
        "minigit=debug,minigit_history=debug"
    } else {
        "minigit=info,minigit_history=info"
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
