//! Logging configuration
//!
//! Initializes tracing for the CLI. `RUST_LOG` wins over the configured
//! level.

/// Initializes logging with the specified level
///
/// Safe to call more than once; later calls keep the first subscriber.
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_line_number(true)
        .try_init();
}
