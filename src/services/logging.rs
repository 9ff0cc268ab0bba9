//! Tracing setup for the CLI.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

pub const LOG_ENV: &str = "BIRTHDAYS_LOG";

/// Installs a stderr fmt subscriber filtered by `BIRTHDAYS_LOG`
/// (for example `BIRTHDAYS_LOG=birthdays=debug`). Defaults to warnings only.
/// Safe to call more than once.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("birthdays=warn"));

        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(filter)
            .try_init();
    });
}
