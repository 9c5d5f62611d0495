//! Timed access control for a single door strike.
//!
//! This crate owns the logical locked/unlocked state of the strike and
//! arbitrates overlapping unlock windows. The transport layer (HTTP, auth)
//! lives outside this crate; it hands in a verified principal and a
//! requested duration and maps the result back to a response.
//!
//! The invariant this crate exists to hold: the strike returns to `Locked`
//! within the requested window of the most recent authorized unlock, no
//! matter how unlock requests and their expirations interleave.

pub mod controller;
pub mod error;
pub mod session;

pub use controller::{AccessController, SessionInfo};
pub use error::AccessError;
pub use session::{AccessSession, SessionToken};
