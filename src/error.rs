//! Error types for credential derivation.

use thiserror::Error;

/// Errors that can occur while deriving credentials.
///
/// Verification never produces an error: an invalid candidate is an
/// expected outcome and `check` reports it as `false`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CredentialError {
    /// Key material is not a valid hexadecimal string.
    #[error("invalid key: not a valid hexadecimal string")]
    InvalidKey,

    /// Identifier does not fit in the configured number of decimal digits.
    #[error("identifier {number} does not fit in {width} decimal digits")]
    InvalidInput { number: u64, width: usize },
}

/// Result type alias for credential operations.
pub type Result<T> = std::result::Result<T, CredentialError>;
