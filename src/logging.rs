use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `HMM_UTILS_LOG=debug`.
pub const LOG_ENV: &str = "HMM_UTILS_LOG";

/// Install a `fmt` subscriber writing to stderr. Defaults to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
