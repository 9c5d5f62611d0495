//! The access controller: timed unlock windows over a write-only strike.
//!
//! The controller owns the strike's logical state and the single current
//! [`AccessSession`]. Every unlock window schedules a deferred relock that
//! captures a copy of its session token; at fire time the timer re-checks
//! that token against the current session under the state lock and acts only
//! on a match. A superseded or explicitly cleared window therefore leaves
//! its timer to fire as a no-op, with no cancellation machinery.
//!
//! # Interleavings the staleness check resolves
//!
//! - Two `unlock_for_duration` calls close together: the second installs a
//!   new token, so the first window's timer goes stale and the door stays
//!   open for the full second window.
//! - `unlock_for_duration` then `lock` before expiry: `lock` clears the
//!   session, the timer goes stale, the explicit lock sticks.
//! - `unlock_for_duration` then open-ended `unlock`: same, but the door
//!   stays open indefinitely.
//!
//! The driver write and the session swap happen inside the same critical
//! section. Energizing outside the lock would let two concurrent unlock
//! calls interleave their physical writes against their session updates.

use crate::error::AccessError;
use crate::session::{AccessSession, SessionToken};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use strikegate_actuator::StrikeDriver;
use strikegate_core::StrikeState;
use tokio::time::Instant;
use tracing::{debug, info};

/// Default ceiling on a single unlock window (30 seconds).
pub const DEFAULT_MAX_UNLOCK: Duration = Duration::from_secs(30);

/// Controller for one physical door strike.
///
/// Cheap to clone; all clones share the same driver and state. Initial
/// state is `Locked` (drivers reset the physical output low on startup).
#[derive(Clone)]
pub struct AccessController {
    shared: Arc<Shared>,
}

struct Shared {
    driver: Box<dyn StrikeDriver>,
    max_unlock: Duration,
    inner: Mutex<Inner>,
}

struct Inner {
    state: StrikeState,
    current: Option<AccessSession>,
}

/// Snapshot of the current unlock window for status reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionInfo {
    /// Principal the window is attributed to
    pub authorized_by: String,
    /// Time left until the window's auto-relock
    pub remaining: Duration,
}

impl AccessController {
    /// Create a controller over `driver` with the default window ceiling.
    pub fn new(driver: impl StrikeDriver + 'static) -> Self {
        Self::with_max_unlock(driver, DEFAULT_MAX_UNLOCK)
    }

    /// Create a controller with an explicit ceiling on unlock windows.
    pub fn with_max_unlock(driver: impl StrikeDriver + 'static, max_unlock: Duration) -> Self {
        Self {
            shared: Arc::new(Shared {
                driver: Box::new(driver),
                max_unlock,
                inner: Mutex::new(Inner {
                    state: StrikeState::Locked,
                    current: None,
                }),
            }),
        }
    }

    /// Unlock the door for `duration`, relocking automatically when the
    /// window expires unless a newer request supersedes it.
    ///
    /// A new window always wins: it resets the open window rather than
    /// stacking onto any window already in progress.
    ///
    /// Returns [`AccessError::InvalidDuration`] when `duration` is zero or
    /// exceeds the configured ceiling; the strike is left untouched.
    ///
    /// Must be called from within a Tokio runtime (the deferred relock is a
    /// spawned task).
    pub fn unlock_for_duration(
        &self,
        duration: Duration,
        principal: &str,
    ) -> Result<(), AccessError> {
        if duration.is_zero() || duration > self.shared.max_unlock {
            return Err(AccessError::InvalidDuration {
                requested: duration,
                max: self.shared.max_unlock,
            });
        }

        let token = SessionToken::generate();
        let expires_at = Instant::now() + duration;

        {
            let mut inner = self.shared.inner.lock().unwrap();
            self.shared.driver.energize();
            inner.state = StrikeState::Unlocked;
            inner.current = Some(AccessSession {
                authorized_by: principal.to_string(),
                expires_at,
                token,
            });
            info!(
                principal,
                duration_secs = duration.as_secs_f64(),
                %token,
                "door unlocked"
            );
        }

        let controller = self.clone();
        let principal = principal.to_string();
        tokio::spawn(async move {
            tokio::time::sleep_until(expires_at).await;
            controller.relock_if_current(token, &principal);
        });

        Ok(())
    }

    /// Unconditionally unlock with no auto-relock.
    ///
    /// Clears the current session, so any pending relock timer goes stale.
    pub fn unlock(&self, principal: &str) {
        let mut inner = self.shared.inner.lock().unwrap();
        self.shared.driver.energize();
        inner.state = StrikeState::Unlocked;
        inner.current = None;
        info!(principal, "door unlocked");
    }

    /// Unconditionally relock.
    ///
    /// Clears the current session, so any pending relock timer goes stale.
    pub fn lock(&self, principal: &str) {
        let mut inner = self.shared.inner.lock().unwrap();
        self.shared.driver.de_energize();
        inner.state = StrikeState::Locked;
        inner.current = None;
        info!(principal, "door locked");
    }

    /// Current logical state of the strike.
    pub fn state(&self) -> StrikeState {
        self.shared.inner.lock().unwrap().state
    }

    /// The current timed window, if one is active.
    ///
    /// `None` when the door is locked or held open without an expiry.
    pub fn current_session(&self) -> Option<SessionInfo> {
        let inner = self.shared.inner.lock().unwrap();
        inner.current.as_ref().map(|session| SessionInfo {
            authorized_by: session.authorized_by.clone(),
            remaining: session.expires_at.saturating_duration_since(Instant::now()),
        })
    }

    /// Configured ceiling on a single unlock window.
    pub fn max_unlock(&self) -> Duration {
        self.shared.max_unlock
    }

    /// Deferred-relock body: act only if `token` still identifies the
    /// current session. The comparison and the driver write share the
    /// critical section, so a concurrent unlock either commits before us
    /// (we go stale) or after us (it re-energizes and installs its own
    /// window).
    fn relock_if_current(&self, token: SessionToken, principal: &str) {
        let mut inner = self.shared.inner.lock().unwrap();
        match &inner.current {
            Some(session) if session.token == token => {
                self.shared.driver.de_energize();
                inner.state = StrikeState::Locked;
                inner.current = None;
                info!(principal, %token, "door locked");
            }
            _ => {
                debug!(%token, "relock timer superseded; ignoring");
            }
        }
    }
}
