//! Shared helpers for integration tests.

use std::time::Duration;
use strikegate_access::AccessController;
use strikegate_actuator::{MemoryStrike, MemoryStrikeHandle};
use strikegate_core::Config;

/// Build a controller over a mock strike, returning the observer handle.
pub fn test_controller() -> (AccessController, MemoryStrikeHandle) {
    let strike = MemoryStrike::new();
    let handle = strike.handle();
    (AccessController::new(strike), handle)
}

/// Build a controller wired the way a deployment would: ceiling taken from
/// the configuration file section.
pub fn configured_controller(config: &Config) -> (AccessController, MemoryStrikeHandle) {
    let strike = MemoryStrike::new();
    let handle = strike.handle();
    let controller = AccessController::with_max_unlock(strike, config.access.max_unlock());
    (controller, handle)
}

/// Paused-clock sleep; auto-advance fires any relock timers that come due.
pub async fn advance(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// Install a subscriber for ad-hoc debugging; safe to call repeatedly.
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();
}
