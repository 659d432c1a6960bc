use tracing_subscriber::EnvFilter;

pub const LOG_ENV_VAR: &str = "ESTIMATOR_LOG";

/// Logs go to stderr so that reports on stdout stay clean. The filter is read
/// from `ESTIMATOR_LOG` and defaults to `warn`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
