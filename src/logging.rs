use tracing_subscriber::EnvFilter;

/// Installs a global `tracing` subscriber for binaries and tests.
///
/// Respects `RUST_LOG`, defaulting to `info`. Best-effort: calling it when
/// a subscriber is already set is a no-op.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .try_init();
}
