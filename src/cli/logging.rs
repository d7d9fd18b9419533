use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber. Level comes from `RUST_LOG`, `warn` otherwise.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
