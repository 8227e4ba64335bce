//! # retoken - Change-Stream Resume Token Decoding
//!
//! > Minimal decoder and freshness validator for change-stream resume tokens.
//!
//! A resume token is the opaque identifier a document database hands out to
//! mark a position in its replicated operation log, letting a consumer pick
//! a change stream back up after disconnection. The token's `_data` payload
//! is base64-encoded binary with a fixed big-endian layout: an 8-byte
//! cluster time (seconds since the Unix epoch, UTC) followed by a 4-byte
//! ordinal. **retoken** decodes those fields and estimates whether the token
//! still falls inside the oplog retention window.
//!
//! ## Quick Start
//!
//! ```ignore
//! use retoken::{EncodedToken, TokenValidator};
//!
//! let token = EncodedToken::from_json(r#"{"_data": "AAAAAGVT8QAAAAAHKwIsAQApbloQBA=="}"#)?;
//!
//! let result = TokenValidator::new()
//!     .window_hours(24.0)
//!     .validate(&token)?;
//!
//! println!("cluster time: {}", result.token.cluster_time);
//! println!("age: {:.1}h, within window: {}", result.age_hours, result.within_window);
//! ```
//!
//! ## Scope
//!
//! This crate never talks to a database. The freshness verdict is a
//! heuristic derived from the embedded timestamp; the source database stays
//! the final authority on whether a token can actually resume. Bytes past
//! offset 12 (collection UUID, document key and other format-specific
//! extension data) are not parsed; they survive only in the raw hex
//! rendering.

mod error;

// Internal modules
pub(crate) mod limits;

// Token types and decoding
pub mod token;

// Freshness validation
pub mod validator;

// Encoding helpers
pub mod utils;

// Public Interface
pub use error::{Error, Result};
pub use token::{DecodedToken, EncodedToken};
pub use validator::{TokenValidator, ValidationResult, DEFAULT_WINDOW_HOURS};
