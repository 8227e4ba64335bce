//! Standard base64 encoding/decoding per RFC 4648
//!
//! This module provides a thin wrapper around the `base64` crate with
//! size limit validation. Resume tokens use the standard alphabet with
//! padding, unlike the URL-safe variant common in web tokens.

use crate::error::{Error, Result};
use base64::{engine::general_purpose::STANDARD, Engine};

/// Decode a base64 string to bytes with a maximum size limit
pub(crate) fn decode_bytes(input: &str, max_size: usize) -> Result<Vec<u8>> {
    let result = STANDARD
        .decode(input)
        .map_err(|e| Error::InvalidBase64(format!("Base64 decode failed: {e}")))?;

    if result.len() > max_size {
        return Err(Error::InvalidBase64(format!(
            "Decoded size exceeds limit: {} bytes (max: {})",
            result.len(),
            max_size
        )));
    }

    Ok(result)
}

/// Encode bytes as a base64 string
pub fn encode_bytes(input: &[u8]) -> String {
    STANDARD.encode(input)
}
