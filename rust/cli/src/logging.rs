//! Diagnostic logging for the `handlog` binary.
//!
//! Command output goes to the `out`/`err` writers passed to [`crate::run`];
//! `tracing` events (per-file summaries, hands that failed to build) go to
//! stderr and are silent unless `RUST_LOG` asks for them.

use std::sync::Once;

/// Initialize the global subscriber. Safe to call more than once.
pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        use tracing_subscriber::EnvFilter;
        use tracing_subscriber::fmt;

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

        let subscriber = fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();

        // another subscriber may already be installed (tests, embedding)
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}
