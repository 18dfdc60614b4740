use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter directive (e.g. `grocer=debug`)
pub const LOG_ENV: &str = "GROCER_LOG";

/// Install the stderr subscriber. `verbose` raises the default level to debug;
/// an explicit `GROCER_LOG` always wins.
pub fn init(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    // A second init (e.g. from tests) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
