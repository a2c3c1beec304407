//! Diagnostic logging for the desktop binary.
//!
//! Events go to stderr. The filter comes from `CATALOG_LOG` using the usual
//! `EnvFilter` directive syntax (`debug`, `storage=trace,info`, ...).

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "CATALOG_LOG";

const DEFAULT_FILTER: &str = "info";

/// Install the global subscriber. Calling this twice is harmless; the
/// second call is ignored.
pub fn init() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .try_init();
}
