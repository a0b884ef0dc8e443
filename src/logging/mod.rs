//! Structured logging setup

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_FILTER: &str = "sagegraph=info";

/// Install the global subscriber. Logs go to stderr so stdout stays clean
/// for JSON output. Safe to call more than once.
pub fn init_logging() {
    init_logging_with(None);
}

/// Like [`init_logging`], with an explicit directive taking precedence over
/// `RUST_LOG` (e.g. `--verbose` mapping to `sagegraph=debug`).
pub fn init_logging_with(directive: Option<&str>) {
    let filter = match directive {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .try_init();
}
