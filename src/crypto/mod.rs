//! Password digests for telemetry access control.
//!
//! Profilers unlock advanced telemetry by presenting a password whose
//! SHA-256 digest matches the one stored in the `EnableTelemetry` tag. Only
//! the digest is ever written to the file.

mod password;

use sha2::{Digest, Sha256};

pub use password::Password;

/// Size of a password digest in bytes.
pub const DIGEST_SIZE: usize = 32;

/// Computes the SHA-256 digest of the password's UTF-8 bytes.
pub fn password_digest(password: &Password) -> [u8; DIGEST_SIZE] {
    Sha256::digest(password.as_bytes()).into()
}
