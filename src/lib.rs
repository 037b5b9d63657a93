//! Offline-verifiable credential codes for printed participant material.
//!
//! This crate derives two human-checkable credential strings from a small
//! integer identifier, keyed by a shared secret so values cannot be forged:
//! - A numeric serial number: the identifier plus a truncated signature
//!   suffix (e.g. a program registration number)
//! - A block-structured password over an alphabet with visually ambiguous
//!   characters removed (e.g. an access code)
//!
//! Both are derived from the same HMAC-SHA256 signature of the identifier,
//! so staff holding the key can validate a printed credential with no
//! network lookup or database. Verification simply recomputes the expected
//! value and compares it; there is no separate acceptance rule that could
//! drift from generation.
//!
//! # Security Notes
//!
//! - Comparisons in `check` are constant-time to avoid timing side channels
//! - Key material is zeroized when the [`Signer`] is dropped
//! - Generation errors are surfaced (they indicate a configuration bug);
//!   malformed candidates during verification are reported as a clean
//!   `false`, never a panic or error
//!
//! # Example
//!
//! ```rust
//! use credential_code::{Password, SerialNumber, Signer};
//!
//! let signer = Signer::new("f09d837b265d7ff95d724c7f9dcc8b51dc6a357db5630eedff48b6c1659e2181")?;
//!
//! let serials = SerialNumber::new(&signer);
//! let serial = serials.serial(0)?;
//! assert_eq!(serial, "000075101802");
//! assert!(serials.check(&serial));
//!
//! let passwords = Password::new(&signer);
//! let password = passwords.password(0)?;
//! assert_eq!(password, "yd2f-ktfb-dyru");
//! assert!(passwords.check(0, &password));
//! # Ok::<(), credential_code::CredentialError>(())
//! ```

mod alphabet;
mod error;
mod password;
mod serial;
mod signer;

// Public re-exports
pub use alphabet::ALPHABET;
pub use error::{CredentialError, Result};
pub use password::{BLOCK_SEPARATOR, DEFAULT_BLOCKS, DEFAULT_BLOCK_SIZE, Password};
pub use serial::{DEFAULT_SERIAL_SIZE, SERIAL_PREFIX_WIDTH, SerialNumber};
pub use signer::{DEFAULT_DIGIT_WIDTH, Signer};
