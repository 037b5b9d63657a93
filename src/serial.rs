//! Serial number generation and verification.

use subtle::ConstantTimeEq;

use crate::error::{CredentialError, Result};
use crate::signer::Signer;

/// Width of the plaintext identifier prefix in every serial number.
pub const SERIAL_PREFIX_WIDTH: usize = 4;

/// Default number of signature digits appended after the prefix.
pub const DEFAULT_SERIAL_SIZE: usize = 8;

/// Generates and verifies fixed-width numeric serial numbers.
///
/// A serial number is the identifier zero-padded to four digits followed by
/// the last `size` digits of the decimal signature. The four-digit prefix
/// caps representable identifiers at 0..=9999; this is a deliberate format
/// constraint so the identifier can be recovered from the code alone.
#[derive(Debug)]
pub struct SerialNumber<'a> {
    signer: &'a Signer,
    size: usize,
}

impl<'a> SerialNumber<'a> {
    /// Create a serial number generator backed by `signer`.
    pub fn new(signer: &'a Signer) -> Self {
        Self {
            signer,
            size: DEFAULT_SERIAL_SIZE,
        }
    }

    /// Set the number of signature digits in the suffix.
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// The configured suffix size.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Generate the serial number for `number`.
    ///
    /// The result is always exactly `4 + size` characters long.
    pub fn serial(&self, number: u64) -> Result<String> {
        if number > 9_999 {
            return Err(CredentialError::InvalidInput {
                number,
                width: SERIAL_PREFIX_WIDTH,
            });
        }

        let digits = self.signer.signature(number)?.to_str_radix(10);
        // The signature rendering is padded so the suffix slice always has
        // `size` digits, even for pathologically small signatures.
        let width = self.size.max(8);
        let padded = format!("{digits:0>width$}");
        let suffix = &padded[padded.len() - self.size..];
        Ok(format!("{number:04}{suffix}"))
    }

    /// Check a candidate serial number.
    ///
    /// Fails closed: a candidate of the wrong length, with a non-numeric
    /// prefix, or whose recomputed serial differs yields `false`, never an
    /// error. The comparison is constant-time.
    pub fn check(&self, candidate: &str) -> bool {
        if candidate.len() != SERIAL_PREFIX_WIDTH + self.size {
            return false;
        }
        let Some(prefix) = candidate.get(..SERIAL_PREFIX_WIDTH) else {
            return false;
        };
        if !prefix.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
        let Ok(number) = prefix.parse::<u64>() else {
            return false;
        };
        let Ok(expected) = self.serial(number) else {
            return false;
        };
        expected.as_bytes().ct_eq(candidate.as_bytes()).into()
    }
}
