//! Tracing bootstrap.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the global tracing subscriber.
///
/// Honors `RUST_LOG`, defaulting to `info` globally with `debug` for the
/// mobitrack crates. Safe to call more than once; later calls are no-ops,
/// which keeps test binaries that share a process happy.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,mobitrack=debug"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .try_init();

    tracing::debug!("tracing initialized");
}
