//! Tracing setup for the binaries and integration tests

use std::sync::OnceLock;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

static INIT: OnceLock<()> = OnceLock::new();

/// Install a stderr fmt subscriber filtered by `RUST_LOG`.
///
/// `default_directive` (e.g. `"warn"`, `"clipshelf_lib=debug"`) applies when
/// `RUST_LOG` is unset or invalid. Later calls are no-ops.
pub fn init_tracing(default_directive: &str) {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive));

        // Fails only if another global subscriber exists; keep that one
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init();
    });
}
