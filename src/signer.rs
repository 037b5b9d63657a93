//! Keyed HMAC-SHA256 signing of numeric identifiers.

use data_encoding::HEXLOWER_PERMISSIVE;
use hmac::{Hmac, Mac};
use num_bigint::BigUint;
use sha2::Sha256;
use zeroize::Zeroize;

use crate::error::{CredentialError, Result};

type HmacSha256 = Hmac<Sha256>;

/// Default number of decimal digits an identifier is padded to before
/// signing.
pub const DEFAULT_DIGIT_WIDTH: usize = 4;

/// Produces deterministic keyed signatures for small integer identifiers.
///
/// The identifier is rendered as a zero-padded decimal string of
/// `digit_width` digits and authenticated with HMAC-SHA256; the 32-byte tag
/// is interpreted big-endian as one large integer. The width is part of the
/// signed message, so generation and verification must use the same value
/// or derived credentials silently diverge.
pub struct Signer {
    key: Vec<u8>,
    digit_width: usize,
}

impl Signer {
    /// Create a signer from a hexadecimal key string.
    ///
    /// The key must be valid even-length hex; upper- and lowercase digits
    /// are both accepted.
    pub fn new(key_hex: &str) -> Result<Self> {
        let key = HEXLOWER_PERMISSIVE
            .decode(key_hex.as_bytes())
            .map_err(|_| CredentialError::InvalidKey)?;
        Ok(Self {
            key,
            digit_width: DEFAULT_DIGIT_WIDTH,
        })
    }

    /// Set the number of decimal digits identifiers are padded to.
    pub fn with_digit_width(mut self, digit_width: usize) -> Self {
        self.digit_width = digit_width;
        self
    }

    /// The configured identifier width.
    pub fn digit_width(&self) -> usize {
        self.digit_width
    }

    /// Sign `number`, returning the signature as a large integer.
    ///
    /// An identifier that needs more than `digit_width` digits is rejected
    /// rather than widening the message, so a credential can never be
    /// issued that verification would misparse.
    pub fn signature(&self, number: u64) -> Result<BigUint> {
        let message = format!("{:0width$}", number, width = self.digit_width);
        if message.len() > self.digit_width {
            return Err(CredentialError::InvalidInput {
                number,
                width: self.digit_width,
            });
        }

        let mut mac =
            HmacSha256::new_from_slice(&self.key).map_err(|_| CredentialError::InvalidKey)?;
        mac.update(message.as_bytes());
        Ok(BigUint::from_bytes_be(&mac.finalize().into_bytes()))
    }
}

impl std::fmt::Debug for Signer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signer")
            .field("key", &"<redacted>")
            .field("digit_width", &self.digit_width)
            .finish()
    }
}

impl Drop for Signer {
    fn drop(&mut self) {
        // Clear key material from memory when dropped
        self.key.zeroize();
    }
}
