//! Domain layer abstraction for the physical strike output.
//!
//! The controller only ever needs to push the output to one of two
//! electrical levels. Keeping the seam this narrow means the timed-access
//! logic can be tested against an in-memory driver and deployed against
//! sysfs GPIO without changes.

/// Write-only driver for a binary strike output.
///
/// Contract:
/// - Both operations are idempotent; driving an already-energized strike
///   high again is a no-op at the hardware level.
/// - Neither operation returns a value or an error. Hardware faults are out
///   of scope at this layer; implementations log I/O failures and continue.
/// - Implementations must be safe to call from multiple tasks concurrently.
pub trait StrikeDriver: Send + Sync {
    /// Drive the output high, releasing the strike (door can be opened).
    fn energize(&self);

    /// Drive the output low, holding the strike shut.
    fn de_energize(&self);
}
