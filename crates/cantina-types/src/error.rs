//! Error types for cantina.

use std::path::PathBuf;

use thiserror::Error;

/// Malformed order data supplied by a caller.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidInputError {
    /// A line item carried a negative quantity.
    #[error("Invalid quantity {quantity} for item '{item_id}': must not be negative")]
    NegativeQuantity {
        /// The offending item.
        item_id: String,
        /// The quantity as supplied.
        quantity: i64,
    },

    /// A line item carried a negative preparation time.
    #[error("Invalid prep time {minutes} for item '{item_id}': must not be negative")]
    NegativePrepTime {
        /// The offending item.
        item_id: String,
        /// The prep time in minutes as supplied.
        minutes: f64,
    },

    /// A line item carried a NaN or infinite preparation time.
    #[error("Invalid prep time for item '{item_id}': must be a finite number")]
    NonFinitePrepTime {
        /// The offending item.
        item_id: String,
    },

    /// A line item quantity does not fit the supported range.
    #[error("Quantity {quantity} for item '{item_id}' is too large")]
    QuantityOverflow {
        /// The offending item.
        item_id: String,
        /// The quantity as supplied.
        quantity: i64,
    },

    /// The queue length was negative or out of range.
    #[error("Invalid queue length {0}: must be between 0 and {max}", max = u32::MAX)]
    QueueLength(i64),

    /// The reference timestamp could not be parsed.
    #[error("Malformed timestamp '{input}': {reason}")]
    MalformedTimestamp {
        /// The timestamp as supplied.
        input: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// The estimate does not fit in a representable timestamp.
    #[error("Estimated wait of {minutes} minutes is out of range")]
    EstimateOutOfRange {
        /// The rounded estimate in minutes.
        minutes: f64,
    },

    /// A textual line-item spec could not be parsed.
    #[error("Malformed line item '{0}', expected <id>:<quantity>:<minutes>")]
    MalformedLineItem(String),
}

/// Errors raised while building or loading an engine configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Vendor capacity must be at least one order.
    #[error("Vendor capacity must be greater than zero")]
    ZeroCapacity,

    /// Parallel efficiency must lie in (0, 1].
    #[error("Parallel efficiency {0} must be in (0, 1]")]
    ParallelEfficiency(f64),

    /// The acceptance buffer must be a non-negative finite number.
    #[error("Acceptance buffer {0} must be a non-negative number of minutes")]
    AcceptanceBuffer(f64),

    /// A peak window is malformed.
    #[error("Invalid peak window {start}..={end}: hours must satisfy start <= end <= 23 and span at most 5 hours")]
    PeakWindow {
        /// First hour of the window.
        start: u32,
        /// Last hour of the window.
        end: u32,
    },

    /// Two peak windows share at least one hour.
    #[error("Peak windows {first} and {second} overlap")]
    OverlappingPeakWindows {
        /// The earlier window, formatted.
        first: String,
        /// The later window, formatted.
        second: String,
    },

    /// A vendor profile table did not define the `default` profile.
    #[error("Vendor profile table has no 'default' profile")]
    MissingDefaultProfile,

    /// Failed to read a profile file.
    #[error("Failed to read profile file '{path}': {source}")]
    ReadFile {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to parse a profile table.
    #[error("Failed to parse vendor profiles: {0}")]
    ParseJson(#[from] serde_json::Error),
}
