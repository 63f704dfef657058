use tracing_subscriber::EnvFilter;

/// Installs the stderr log subscriber for the command-line front-ends.
///
/// `RUST_LOG` takes precedence unless `verbose` is set, which forces `debug`.
/// Without either only warnings and errors are shown.
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
