/// Logging setup for the application
///
/// Installs a global tracing subscriber writing to stdout. The filter comes
/// from `RUST_LOG` and defaults to info-level output for this crate.
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_FILTER: &str = "photo_gallery=info";

/// Initialize tracing. Fails only if a global subscriber is already set.
pub fn init() -> Result<(), tracing_subscriber::util::TryInitError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .try_init()
}
