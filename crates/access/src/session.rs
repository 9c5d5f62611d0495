//! Access session bookkeeping.
//!
//! One [`AccessSession`] represents one authorized open window. Sessions are
//! never stored beyond the controller's single `current` slot; a session is
//! superseded the moment a newer one is installed.

use rand::RngCore;
use std::fmt;
use tokio::time::Instant;

/// Opaque identifier distinguishing one unlock window from any other.
///
/// The deferred relock captures a copy of the token it was scheduled for and
/// compares it against the current session at fire time (the staleness
/// check). Random rather than sequential so no coordination is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionToken([u8; 32]);

impl SessionToken {
    /// Generate a fresh random token.
    pub fn generate() -> Self {
        let mut bytes = [0u8; 32];
        rand::thread_rng().fill_bytes(&mut bytes);
        Self(bytes)
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Eight bytes of hex is plenty for log correlation
        write!(f, "{}", hex::encode(&self.0[..8]))
    }
}

/// One authorized open window.
#[derive(Debug, Clone)]
pub struct AccessSession {
    /// Principal the window is attributed to (logging only)
    pub authorized_by: String,
    /// Absolute instant the window's authorization ends
    pub expires_at: Instant,
    /// Token identifying this window for the staleness check
    pub token: SessionToken,
}
