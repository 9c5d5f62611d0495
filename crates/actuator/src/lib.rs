//! Strike actuator drivers for strikegate.
//!
//! A door strike is driven by a single binary output. This crate defines the
//! [`StrikeDriver`] seam the access controller writes through, plus two
//! implementations: a Linux sysfs GPIO driver for the real hardware and an
//! in-memory mock for tests and demos.
//!
//! Drivers are write-only and fire-and-forget. They report none of their own
//! state; the controller is the single source of truth for the logical
//! locked/unlocked state.

pub mod driver;
pub mod error;
pub mod memory;
pub mod sysfs;

pub use driver::StrikeDriver;
pub use error::ActuatorError;
pub use memory::{MemoryStrike, MemoryStrikeHandle};
pub use sysfs::SysfsStrike;
