use tracing_subscriber::EnvFilter;

/// Sends diagnostics to stderr so stdout only carries the update report.
/// Verbosity follows `RUST_LOG` and defaults to warnings.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
