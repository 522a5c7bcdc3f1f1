//! Tracing subscriber setup shared by the CLI and the bindings.

/// Initialize tracing for the CLI and embedding hosts.
///
/// Default: info for this crate, warn for everything else.
/// Can be overridden with `RUST_LOG`. Calling it twice is harmless; the second
/// subscriber install is ignored.
pub fn init(service_name: &str, verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,polybot_imgproc={level},{}={level}",
            service_name.replace('-', "_")
        ))
    });

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .ok();
}
