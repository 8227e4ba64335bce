//! Resume token types and binary layout decoding
//!
//! A resume token marks a position in a document database's replicated
//! operation log. On the wire it is a mapping with a single required field,
//! `_data`, holding a base64-encoded byte sequence. The leading bytes follow
//! a fixed big-endian layout:
//!
//! - bytes `[0, 8)` — cluster time, seconds since the Unix epoch (UTC)
//! - bytes `[8, 12)` — ordinal, disambiguating operations that share a
//!   cluster time
//!
//! Bytes past offset 12 are format-specific extension data (collection UUID,
//! document key) and are preserved only through the raw hex rendering.

use crate::error::{Error, Result};
use crate::limits::{MAX_DECODED_TOKEN_SIZE, MAX_TOKEN_LENGTH};
use crate::utils::base64;
use chrono::{DateTime, Utc};
use miniserde::Deserialize;

/// Name of the payload field in the originating ecosystem's convention
pub(crate) const DATA_FIELD: &str = "_data";

/// Width of the cluster time field, bytes `[0, 8)`
pub(crate) const CLUSTER_TIME_BYTES: usize = 8;

/// Width of the ordinal field, bytes `[8, 12)`
pub(crate) const ORDINAL_BYTES: usize = 4;

/// Minimum decoded length for timestamp and ordinal extraction
pub(crate) const MIN_TOKEN_BYTES: usize = CLUSTER_TIME_BYTES + ORDINAL_BYTES;

/// An opaque resume token as handed out by a change-stream cursor
///
/// The only field this crate understands is `_data`. Other fields that may
/// appear in the mapping (e.g. `_typeBits`) are ignored during parsing.
#[derive(Debug, Clone, Deserialize)]
pub struct EncodedToken {
    /// Base64-encoded token payload
    #[serde(rename = "_data")]
    pub data: Option<String>,
}

impl EncodedToken {
    /// Create a token from an already-extracted payload string
    pub fn new(data: impl Into<String>) -> Self {
        Self {
            data: Some(data.into()),
        }
    }

    /// Parse a token from its JSON mapping form
    ///
    /// # Example
    /// ```ignore
    /// let token = EncodedToken::from_json(r#"{"_data": "AAAA..."}"#)?;
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        miniserde::json::from_str(json)
            .map_err(|e| Error::InvalidJson(format!("Failed to parse resume token: {e}")))
    }

    /// Decode the token payload into its structured fields
    ///
    /// Fails with [`Error::MissingField`] when the `_data` payload is absent,
    /// [`Error::InvalidBase64`] when it does not decode, and
    /// [`Error::TokenTooShort`] when fewer than 12 bytes come out. No side
    /// effects; deterministic given the input bytes.
    pub fn decode(&self) -> Result<DecodedToken> {
        let data = self
            .data
            .as_deref()
            .ok_or_else(|| Error::MissingField(DATA_FIELD.to_string()))?;

        if data.len() > MAX_TOKEN_LENGTH {
            return Err(Error::TokenTooLarge {
                size: data.len(),
                max: MAX_TOKEN_LENGTH,
            });
        }

        let raw = base64::decode_bytes(data, MAX_DECODED_TOKEN_SIZE)?;

        let Some((cluster_bytes, rest)) = raw.split_first_chunk::<CLUSTER_TIME_BYTES>() else {
            return Err(Error::TokenTooShort {
                size: raw.len(),
                min: MIN_TOKEN_BYTES,
            });
        };
        let Some((ordinal_bytes, _extension)) = rest.split_first_chunk::<ORDINAL_BYTES>() else {
            return Err(Error::TokenTooShort {
                size: raw.len(),
                min: MIN_TOKEN_BYTES,
            });
        };

        let seconds = u64::from_be_bytes(*cluster_bytes);
        let cluster_time = i64::try_from(seconds)
            .ok()
            .and_then(|s| DateTime::from_timestamp(s, 0))
            .ok_or(Error::TimestampOutOfRange(seconds))?;

        Ok(DecodedToken {
            raw_hex: hex::encode(&raw),
            cluster_time,
            ordinal: u32::from_be_bytes(*ordinal_bytes),
            length: raw.len(),
        })
    }
}

/// Structured fields extracted from a resume token payload
///
/// Constructed fresh on every decode call and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedToken {
    /// Lowercase hex of the full decoded byte sequence
    pub raw_hex: String,
    /// Cluster time decoded from bytes `[0, 8)`
    pub cluster_time: DateTime<Utc>,
    /// Ordinal decoded from bytes `[8, 12)`
    pub ordinal: u32,
    /// Total decoded byte count
    pub length: usize,
}
