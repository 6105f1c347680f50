//! Shared helpers for the `fdb-harness` test suites.
//!
//! - [`builders`] assembles harness configs without writing TOML.
//! - [`fake_launcher`] stands in for the Tokio launcher and records argv.

pub mod builders;
pub mod fake_launcher;

use std::sync::Once;
use std::time::Duration;

use tracing_subscriber::{EnvFilter, fmt};

static INIT: Once = Once::new();

/// Install a test-captured tracing subscriber, once per test binary.
///
/// Runner and config events then show up next to a failing test's output.
/// Filter with `RUST_LOG`, e.g. `RUST_LOG=fdb_harness=debug`; the default is
/// `info`.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .init();
    });
}

/// Await `f`, failing the test if the child process it depends on has not
/// produced its result within 5 seconds.
pub async fn with_timeout<F, T>(f: F) -> T
where
    F: std::future::Future<Output = T>,
{
    tokio::time::timeout(Duration::from_secs(5), f)
        .await
        .expect("child process did not finish within 5 seconds")
}
