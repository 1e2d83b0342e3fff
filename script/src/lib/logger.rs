use tracing_subscriber::EnvFilter;

/// Sets up the tracing subscriber, logging at `info` unless `RUST_LOG` says otherwise.
pub fn setup_logger() {
    let filter: EnvFilter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
