//! Logging setup
//!
//! Library code only emits `tracing` events. Binaries and tests call
//! [`init`] once to get them printed.

use tracing::Span;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid
pub const DEFAULT_FILTER: &str = "info";

/// Install a plain-text subscriber filtered by `RUST_LOG`.
///
/// Calling it again, or after another subscriber was installed, is a no-op.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    install(filter);
}

/// Like [`init`] but with an explicit filter directive, e.g.
/// `"triplekit=debug"`
pub fn init_with_filter(directive: &str) {
    install(EnvFilter::new(directive));
}

fn install(filter: EnvFilter) {
    // another subscriber may already be installed, keep it
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .try_init();
}

/// Span tagging every event inside it with a component name
///
/// ```rust
/// let span = triplekit::logging::logger("importer");
/// let _guard = span.enter();
/// tracing::info!("loading");
/// ```
pub fn logger(context: &str) -> Span {
    tracing::info_span!("triplekit", context = %context)
}
