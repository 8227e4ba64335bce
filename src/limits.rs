//! Size limit constants for input validation

/// Maximum length for an encoded token payload (4KB)
///
/// Real resume tokens are a few hundred characters at most; anything larger
/// is rejected before base64 decoding.
pub(crate) const MAX_TOKEN_LENGTH: usize = 4 * 1024;

/// Maximum size for the decoded byte sequence (1KB)
pub(crate) const MAX_DECODED_TOKEN_SIZE: usize = 1024;
