pub mod auth;
pub mod chat;
pub mod context;
pub mod feed;
pub mod files;
pub mod interactions;

use tracing_subscriber::EnvFilter;

/// Logs to stderr, filtered by `RUST_LOG` or else the configured level.
pub fn init_tracing(fallback_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
