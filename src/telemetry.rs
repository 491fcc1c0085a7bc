//! Logging setup

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable read for the log filter
pub const LOG_ENV: &str = "BACKOFFICE_LOG";

/// Initialize tracing with the BACKOFFICE_LOG environment variable.
///
/// Defaults to "info" level if BACKOFFICE_LOG is not set. Calling this twice
/// is a no-op rather than a panic.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_does_not_panic() {
        init_tracing();
        init_tracing();
    }
}
