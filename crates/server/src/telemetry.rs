use tracing_subscriber::EnvFilter;

/// Initialize the fmt tracing subscriber. `RUST_LOG` controls verbosity,
/// defaulting to info for our crates.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,server=debug,app=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}
