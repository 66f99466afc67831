use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Set to a filter directive (e.g. `debug`) to log to stderr
pub const LOG_ENV: &str = "ECHO_ARGS_LOG";

/// Initialize tracing if `ECHO_ARGS_LOG` is set.
///
/// Logs only ever go to stderr so the echoed output is never mixed with them.
pub fn init_tracing() {
    let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) else {
        return;
    };

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    // A subscriber may already be installed when embedded
    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init()
        .ok();
}
