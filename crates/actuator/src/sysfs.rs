//! Linux sysfs GPIO strike driver.
//!
//! Drives the strike relay through `/sys/class/gpio`. Construction exports
//! the pin, configures it as an output, and drives it low so the process
//! always starts with the door held shut. Runtime level writes follow the
//! fire-and-forget driver contract: an I/O failure is logged and dropped,
//! never propagated.

use crate::driver::StrikeDriver;
use crate::error::ActuatorError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::error;

const SYSFS_GPIO_BASE: &str = "/sys/class/gpio";

/// Strike driver writing to a sysfs GPIO value file.
#[derive(Debug)]
pub struct SysfsStrike {
    pin: u8,
    value_path: PathBuf,
}

impl SysfsStrike {
    /// Export `pin`, set it to output, and drive it low.
    pub fn new(pin: u8) -> Result<Self, ActuatorError> {
        Self::with_base(Path::new(SYSFS_GPIO_BASE), pin)
    }

    /// Same as [`SysfsStrike::new`] against an alternate sysfs root.
    ///
    /// Lets tests point the driver at a scratch directory instead of real
    /// hardware.
    pub fn with_base(base: &Path, pin: u8) -> Result<Self, ActuatorError> {
        let pin_dir = base.join(format!("gpio{pin}"));

        // Exporting an already-exported pin fails with EBUSY; skip it when
        // the pin directory is already present.
        if !pin_dir.exists() {
            fs::write(base.join("export"), pin.to_string())
                .map_err(|source| ActuatorError::Export { pin, source })?;
        }

        fs::write(pin_dir.join("direction"), "out")
            .map_err(|source| ActuatorError::Direction { pin, source })?;

        let value_path = pin_dir.join("value");
        fs::write(&value_path, "0")
            .map_err(|source| ActuatorError::InitialLevel { pin, source })?;

        Ok(Self { pin, value_path })
    }

    /// BCM pin number this driver writes to.
    pub fn pin(&self) -> u8 {
        self.pin
    }

    fn write_level(&self, level: &str) {
        if let Err(err) = fs::write(&self.value_path, level) {
            error!(pin = self.pin, level, %err, "gpio level write failed");
        }
    }
}

impl StrikeDriver for SysfsStrike {
    fn energize(&self) {
        self.write_level("1");
    }

    fn de_energize(&self) {
        self.write_level("0");
    }
}
