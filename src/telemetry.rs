use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber.
///
/// The embedding app calls this once at startup; `RUST_LOG` overrides the
/// default `info` filter. Calling it twice is a no-op rather than a panic.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
