//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "LOADSIM_LOG";

static INIT: Once = Once::new();

/// Install the stderr tracing subscriber.
///
/// Reads `LOADSIM_LOG` (e.g. `LOADSIM_LOG=loadsim=debug`), falling back to
/// `loadsim=warn`. Calling this more than once is a no-op.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("loadsim=warn"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .with(filter)
            .init();
    });
}
