//! Core types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Logical state of the door strike.
///
/// The physical output is a single binary signal; `Unlocked` means the
/// strike coil is energized and the door can be opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrikeState {
    /// Strike de-energized, door held shut. Initial state on process start.
    Locked,
    /// Strike energized, door can be opened.
    Unlocked,
}

impl fmt::Display for StrikeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrikeState::Locked => write!(f, "locked"),
            StrikeState::Unlocked => write!(f, "unlocked"),
        }
    }
}
