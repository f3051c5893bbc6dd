use std::io;
use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

static INIT: Once = Once::new();

/// Installs the stderr log subscriber. Reads `HUMILITY_LOG` for the
/// filter (e.g. `HUMILITY_LOG=debug`), falling back to `humility_scale=info`.
/// Safe to call more than once.
pub fn init() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("HUMILITY_LOG")
            .unwrap_or_else(|_| EnvFilter::new("humility_scale=info"));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(false)
                    .without_time()
                    .with_writer(io::stderr),
            )
            .with(filter)
            .init();
    });
}
