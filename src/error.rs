//! Errors for resume token decoding and validation

use thiserror::Error;

/// Errors that can occur while decoding or validating a resume token
///
/// Decoding errors (`MissingField`, `InvalidBase64`, `TokenTooShort`) are
/// raised by [`EncodedToken::decode`](crate::EncodedToken::decode) and
/// propagate through validation unwrapped. Malformed input stays malformed,
/// so nothing here is worth retrying.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("JSON parsing failed: {0}")]
    InvalidJson(String),

    #[error("Base64 decoding failed: {0}")]
    InvalidBase64(String),

    #[error("Encoded token too large: {size} bytes (maximum: {max} bytes)")]
    TokenTooLarge { size: usize, max: usize },

    #[error("Decoded token too short: {size} bytes (minimum: {min} bytes)")]
    TokenTooShort { size: usize, min: usize },

    #[error("Cluster time {0} is not representable as a UTC timestamp")]
    TimestampOutOfRange(u64),

    #[error("Invalid retention window: {0} hours (must be non-negative)")]
    InvalidWindow(f64),
}

/// Result type alias for retoken operations
pub type Result<T> = std::result::Result<T, Error>;
