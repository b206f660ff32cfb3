//! Error types for Tanklog core operations.
//!
//! Validation rejections and storage failures are separate types: a
//! rejection is an expected outcome carried as data, while a storage error
//! wraps an underlying I/O or serialization failure. The CLI layer maps
//! both to user-facing messages.

use thiserror::Error;

/// Why a candidate refuel record was not accepted.
///
/// Returned by [`crate::validate::create_record`]. Each variant carries the
/// user-facing explanation; callers report the message and discard the
/// input, no record is created.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Date text did not parse as a calendar date
    #[error("Date must be in YYYY-MM-DD format")]
    DateFormat,

    /// The stored date on the last record is unreadable (corrupted file)
    #[error("Stored date on the last record is unreadable")]
    CorruptLastDate,

    /// Candidate date is earlier than the last recorded refuel
    #[error("Date precedes the last recorded refuel")]
    DateBeforeLast,

    /// Liters must be strictly positive
    #[error("Liters must be positive")]
    LitersNotPositive,

    /// Price per liter must be strictly positive
    #[error("Price per liter must be positive")]
    PriceNotPositive,

    /// Odometer must be strictly positive
    #[error("Odometer must be positive")]
    OdometerNotPositive,

    /// Odometer must exceed the last recorded value
    #[error("Odometer must exceed the last recorded value")]
    OdometerNotIncreasing,
}

/// Storage error for load/save operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem error while writing the data file
    #[error("Storage error: {0}")]
    Io(String),

    /// History could not be serialized
    #[error("Serialization error: {0}")]
    Serialize(String),
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialize(err.to_string())
    }
}
