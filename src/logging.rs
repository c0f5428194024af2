//! Logging setup
//!
//! Diagnostics go through `tracing` to stderr; stdout is reserved for the
//! graph itself so it can be piped straight into `dot`.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when neither a flag nor `RUST_LOG` says otherwise
const DEFAULT_FILTER: &str = "imports_graph=info";

/// Pick the log filter for the given verbosity flags
///
/// `verbose` wins over `quiet`; without either, `RUST_LOG` is honoured.
pub fn log_filter(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("imports_graph=debug")
    } else if quiet {
        EnvFilter::new("imports_graph=error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Install the global subscriber.
///
/// Calling this more than once is harmless: later calls leave the first
/// subscriber in place.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    let _ = tracing_subscriber::registry()
        .with(log_filter(verbose, quiet))
        .with(fmt_layer)
        .try_init();
}
