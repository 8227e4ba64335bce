//! Freshness validation against an oplog retention window
//!
//! The source database only keeps replication-log history for a bounded
//! window, so a resume token older than that window is unlikely to resume.
//! The verdict here is a heuristic based on the token's embedded cluster
//! time: the real oplog may evict entries earlier (disk pressure) or retain
//! them longer than the configured estimate, and the database itself remains
//! the final authority on expiry.

use crate::error::{Error, Result};
use crate::token::{DecodedToken, EncodedToken};
use chrono::{DateTime, Utc};

/// Default oplog retention window assumed when none is configured
pub const DEFAULT_WINDOW_HOURS: f64 = 24.0;

/// Resume token freshness validator
///
/// The validator is configured once and can be reused for any number of
/// tokens. There is no shared state, so a configured validator is safe to
/// use from multiple threads.
///
/// # Example
/// ```ignore
/// let result = TokenValidator::new()
///     .window_hours(48.0)
///     .validate(&token)?;
/// ```
#[derive(Debug, Clone)]
pub struct TokenValidator {
    window_hours: f64,
}

impl Default for TokenValidator {
    fn default() -> Self {
        Self {
            window_hours: DEFAULT_WINDOW_HOURS,
        }
    }
}

impl TokenValidator {
    /// Create a validator with the default retention window
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the assumed oplog retention window in hours
    ///
    /// Negative values are rejected during validation with
    /// [`Error::InvalidWindow`].
    pub fn window_hours(mut self, hours: f64) -> Self {
        self.window_hours = hours;
        self
    }

    /// Validate a token against the current wall clock
    pub fn validate(&self, token: &EncodedToken) -> Result<ValidationResult> {
        self.validate_at(token, Utc::now())
    }

    /// Validate a token against a caller-supplied instant
    ///
    /// Decoding errors propagate unwrapped. A cluster time ahead of `now` is
    /// not an error; it surfaces as a negative age.
    pub fn validate_at(&self, token: &EncodedToken, now: DateTime<Utc>) -> Result<ValidationResult> {
        // NaN fails this comparison too
        if !(self.window_hours >= 0.0) {
            return Err(Error::InvalidWindow(self.window_hours));
        }

        let token = token.decode()?;
        let age = now.signed_duration_since(token.cluster_time);
        let age_hours = age.num_milliseconds() as f64 / 3_600_000.0;

        Ok(ValidationResult {
            within_window: age_hours <= self.window_hours,
            age_hours,
            token,
        })
    }
}

/// Outcome of a freshness check
///
/// Carries the decoded token fields plus the age arithmetic. Constructed
/// fresh per validation call and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    /// Structured fields decoded from the token payload
    pub token: DecodedToken,
    /// Hours between the validation instant and the token's cluster time
    pub age_hours: f64,
    /// Whether the age falls inside the retention window (boundary inclusive)
    pub within_window: bool,
}
