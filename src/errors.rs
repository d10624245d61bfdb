//! Error taxonomy for the lottery service.
//!
//! Validation failures are surfaced to the caller as structured rejections
//! and never cross the registration boundary as panics; engine errors are
//! recovered inside the draw loop; scheduler startup errors are fatal.

/// Rejections of a registration request. The display strings are the wire
/// messages returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The requested slot is strictly before the current time.
    #[error("Cannot register for past drawing")]
    PastSlot,

    /// At least one submitted number lies outside [1, 255].
    #[error("Number out of range")]
    NumberOutOfRange,

    /// The participant already holds one of the submitted numbers for the
    /// slot. Cross-participant duplicates are allowed.
    #[error("Number(s) already registered")]
    DuplicateNumber,
}

/// Failures inside a single drawing. Recovered locally: the tick is treated
/// as "no draw" and the scheduler continues.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The number source produced a value outside [1, 255].
    #[error("drawn number {drawn} for slot {slot} is out of range")]
    DrawOutOfRange { slot: String, drawn: u32 },
}

/// Failure to deliver a winner notification. Settlement correctness is not
/// affected; the notifier's own retry policy is out of scope.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("notification delivery failed: {0}")]
    Delivery(String),
}

/// Invalid service configuration, rejected before startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Failure to start the periodic draw job. Fatal: the service must not run
/// without its draw engine.
#[derive(Debug, thiserror::Error)]
pub enum SchedulerError {
    #[error("draw period must be at least one second")]
    InvalidPeriod,
}
