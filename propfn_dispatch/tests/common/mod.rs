//! Shared test setup for the integration suite: install a `tracing`
//! subscriber so a failing scenario can be re-run with `RUST_LOG` set and
//! show the `tracing::debug!`/`tracing::warn!` spans the dispatcher and
//! fallback log emit.

use std::sync::Once;

static INIT: Once = Once::new();

pub fn init_tracing() {
    INIT.call_once(|| {
        if std::env::var("RUST_LOG").is_ok() {
            let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        }
    });
}
