//! Actuator error types

use thiserror::Error;

/// Errors raised while bringing a strike driver up.
///
/// Runtime writes never surface errors (see [`crate::StrikeDriver`]); only
/// driver construction is fallible.
#[derive(Debug, Error)]
pub enum ActuatorError {
    /// The pin could not be exported through the sysfs interface
    #[error("failed to export gpio pin {pin}: {source}")]
    Export {
        /// BCM pin number
        pin: u8,
        /// Underlying I/O failure
        source: std::io::Error,
    },

    /// The pin direction could not be set to output
    #[error("failed to set gpio pin {pin} direction to out: {source}")]
    Direction {
        /// BCM pin number
        pin: u8,
        /// Underlying I/O failure
        source: std::io::Error,
    },

    /// The pin could not be driven to its initial low level
    #[error("failed to drive gpio pin {pin} low at startup: {source}")]
    InitialLevel {
        /// BCM pin number
        pin: u8,
        /// Underlying I/O failure
        source: std::io::Error,
    },
}
