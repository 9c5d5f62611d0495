//! Minimal wiring demo: config + logging + controller over a mock strike.
//!
//! Run with `cargo run -p strikegate-access --example timed_unlock`.

use std::time::Duration;
use strikegate_access::AccessController;
use strikegate_actuator::MemoryStrike;
use strikegate_core::{logging, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();

    let config = Config::default_config();
    let strike = MemoryStrike::new();
    let handle = strike.handle();
    let controller = AccessController::with_max_unlock(strike, config.access.max_unlock());

    controller.unlock_for_duration(Duration::from_secs(2), "demo-operator")?;
    tracing::info!(
        state = %controller.state(),
        energized = handle.is_energized(),
        "window open"
    );

    tokio::time::sleep(Duration::from_secs(3)).await;
    tracing::info!(
        state = %controller.state(),
        energized = handle.is_energized(),
        "window expired"
    );

    Ok(())
}
