use tracing_subscriber::EnvFilter;

/// Sends diagnostics to stderr so they never mix with the install command's
/// stdout. `RUST_LOG` wins over `--debug` when set.
pub fn init(debug: bool) {
    let default_directive = if debug {
        "lockcheck=debug"
    } else {
        "lockcheck=warn"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    // Ignore the error from a second init, e.g. when tests share a process.
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
