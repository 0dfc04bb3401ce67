use tracing_subscriber::EnvFilter;

use crate::settings::DEFAULT_LOG_FILTER;

/// Installs a stderr subscriber so stdout stays reserved for command output.
pub fn init(filter: &str) {
    let env_filter =
        EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
