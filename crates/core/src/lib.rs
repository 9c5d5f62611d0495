//! Core functionality for the strikegate access-control system.
//!
//! This crate provides the shared types, configuration, and logging
//! bootstrap used across the strikegate workspace.

pub mod config;
pub mod error;
pub mod logging;
pub mod types;

pub use config::{AccessConfig, Config, StrikeConfig};
pub use error::{Error, Result};
pub use types::StrikeState;
