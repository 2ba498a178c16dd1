/// Error types for the station library
use thiserror::Error;

/// Main error type for station data operations
#[derive(Error, Debug)]
pub enum StationError {
    /// Reading the source failed
    #[error("Failed to read station data: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not a valid station dump
    #[error("Failed to decode station data: {0}")]
    Decode(#[from] serde_json::Error),

    /// Failed to decompress data
    #[error("Failed to decompress data: {0}")]
    Decompression(String),

    /// Property key or label that matches no known measurement
    #[error("Unknown property: {0}")]
    UnknownProperty(String),
}

/// Type alias for Results using StationError
pub type Result<T> = std::result::Result<T, StationError>;
