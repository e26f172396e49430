//! Tracing setup for build scripts and the diagnostic binary.
//!
//! Build scripts have no terminal of their own: Cargo captures stderr into
//! `target/*/build/<pkg>/stderr` and shows it when the build fails, which is
//! exactly when the discovery log is needed. Output is therefore plain text
//! (no ANSI) on stderr, filtered by `VISA_SYS_LOG`.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV: &str = "VISA_SYS_LOG";

/// Default filter when [`LOG_ENV`] is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

/// Install a stderr subscriber.
///
/// Returns an error if a global subscriber is already set; callers in build
/// scripts can ignore it.
pub fn init_build_logging() -> Result<(), tracing_subscriber::util::TryInitError> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .with_target(false)
                .without_time(),
        )
        .try_init()
}
