//! Integration tests for the strikegate workspace
//!
//! This test suite validates:
//! - End-to-end timing of unlock windows against the driver seam
//! - Arbitration of overlapping and racing unlock requests
//! - Configuration-driven controller wiring

pub mod test_utils;


#[cfg(test)]
mod race_arbitration_tests;
