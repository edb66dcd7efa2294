//! Tracing initialization for the command line front end.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter, e.g. `MONTE_CARLO_LOG=monte_carlo_pi=debug`.
pub const LOG_ENV: &str = "MONTE_CARLO_LOG";

/// Install the global subscriber. Logs go to stderr so stdout carries only
/// the approximation line. Safe to call more than once.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new("monte_carlo_pi=warn"));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .with(filter)
            .init();
    });
}
