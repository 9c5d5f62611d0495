//! In-memory strike driver for tests and demos.

use crate::driver::StrikeDriver;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Mock strike driver backed by an atomic level.
///
/// The electrical level is observable through a [`MemoryStrikeHandle`],
/// which stays valid after the driver itself has been moved into a
/// controller.
#[derive(Debug, Default)]
pub struct MemoryStrike {
    energized: Arc<AtomicBool>,
}

/// Observer handle onto a [`MemoryStrike`]'s output level.
#[derive(Debug, Clone)]
pub struct MemoryStrikeHandle {
    energized: Arc<AtomicBool>,
}

impl MemoryStrike {
    /// Create a new mock strike, initially de-energized.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a cloneable handle observing the output level.
    pub fn handle(&self) -> MemoryStrikeHandle {
        MemoryStrikeHandle {
            energized: Arc::clone(&self.energized),
        }
    }
}

impl MemoryStrikeHandle {
    /// Current electrical level: `true` when the strike is energized.
    pub fn is_energized(&self) -> bool {
        self.energized.load(Ordering::SeqCst)
    }
}

impl StrikeDriver for MemoryStrike {
    fn energize(&self) {
        self.energized.store(true, Ordering::SeqCst);
    }

    fn de_energize(&self) {
        self.energized.store(false, Ordering::SeqCst);
    }
}
