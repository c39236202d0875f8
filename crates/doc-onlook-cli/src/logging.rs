//! Log output setup.
//!
//! Logs go to stderr so `--json` output on stdout stays machine-readable.
//! `RUST_LOG` takes precedence over the `--verbose` default.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "doc_onlook_core=debug,doc_onlook=debug"
    } else {
        "warn"
    }
}

/// Install the global tracing subscriber.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(verbose))
        .try_init()
        .ok();
}
