use thiserror::Error;

/// Validation errors raised at the input boundary. The arithmetic itself
/// never fails; anything malformed is rejected before it gets there.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Invalid time '{0}', expected HH:MM (24-hour)")]
    InvalidTime(String),

    #[error("Unsupported cycle count {0}, choose 4, 5 or 6")]
    InvalidCycles(u8),
}
