//! Tracing setup for binaries and tests.
//!
//! A production initializer for binaries, and a test-only initializer
//! that installs a test writer so `cargo test -- --nocapture` shows
//! spans without polluting non-failing test output.

use once_cell::sync::Lazy;
use tracing_subscriber::EnvFilter;

/// Initializes `tracing` for a binary entry point. Respects `RUST_LOG`;
/// defaults to `ft2h_sim=info` when unset.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ft2h_sim=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_thread_ids(true)
        .try_init()
        .ok();
}

#[cfg(test)]
static TEST_TRACING: Lazy<()> = Lazy::new(|| {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ft2h_sim=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init()
        .ok();
});

/// Initializes `tracing` for test harnesses. Idempotent; safe to call at
/// the top of every test.
#[cfg(test)]
pub fn init_test_tracing() {
    Lazy::force(&TEST_TRACING);
}
