//! Block-structured password generation and verification.

use num_bigint::BigUint;
use subtle::ConstantTimeEq;

use crate::alphabet::ALPHABET;
use crate::error::Result;
use crate::signer::Signer;

/// Default number of blocks in a password.
pub const DEFAULT_BLOCKS: usize = 3;

/// Default number of characters per block.
pub const DEFAULT_BLOCK_SIZE: usize = 4;

/// Separator placed between password blocks.
pub const BLOCK_SEPARATOR: char = '-';

/// Generates and verifies block-structured alphanumeric passwords.
///
/// The signature is converted to base 27 over the restricted [`ALPHABET`],
/// least-significant digit first. Extraction runs continuously across block
/// boundaries: the running value is not reseeded per block, so the password
/// is one big-integer base conversion split for readability.
#[derive(Debug)]
pub struct Password<'a> {
    signer: &'a Signer,
    blocks: usize,
    size: usize,
}

impl<'a> Password<'a> {
    /// Create a password generator backed by `signer`.
    pub fn new(signer: &'a Signer) -> Self {
        Self {
            signer,
            blocks: DEFAULT_BLOCKS,
            size: DEFAULT_BLOCK_SIZE,
        }
    }

    /// Set the number of blocks.
    pub fn with_blocks(mut self, blocks: usize) -> Self {
        self.blocks = blocks;
        self
    }

    /// Set the number of characters per block.
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Generate the password for `number`.
    ///
    /// The result is always `blocks * size + (blocks - 1)` characters long.
    pub fn password(&self, number: u64) -> Result<String> {
        let mut signature = self.signer.signature(number)?;
        let base = BigUint::from(ALPHABET.len());

        let mut blocks = Vec::with_capacity(self.blocks);
        for _ in 0..self.blocks {
            let mut block = String::with_capacity(self.size);
            for _ in 0..self.size {
                let index = (&signature % &base)
                    .iter_u32_digits()
                    .next()
                    .unwrap_or(0) as usize;
                block.push(ALPHABET[index] as char);
                signature /= &base;
            }
            blocks.push(block);
        }
        Ok(blocks.join(&BLOCK_SEPARATOR.to_string()))
    }

    /// Check a candidate password for `number`.
    ///
    /// The candidate is never parsed; the expected password is recomputed
    /// and compared in constant time. A generation failure (identifier out
    /// of range for the signer) yields `false`.
    pub fn check(&self, number: u64, candidate: &str) -> bool {
        let Ok(expected) = self.password(number) else {
            return false;
        };
        expected.as_bytes().ct_eq(candidate.as_bytes()).into()
    }
}
