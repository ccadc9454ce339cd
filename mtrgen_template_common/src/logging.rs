// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive
pub const LOG_ENV: &str = "MTRGEN_LOG";

static INIT: Once = Once::new();

/// Installs the global subscriber. Logs go to stderr so that JSON written to
/// stdout stays clean. Only the first call has any effect.
///
/// `MTRGEN_LOG` wins over `level`; `verbose` raises the fallback to `debug`.
pub fn init(level: &str, verbose: bool) {
    INIT.call_once(|| {
        let fallback = if verbose { "debug" } else { level };
        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

        // Another subscriber may already be installed (e.g. by a test harness)
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
