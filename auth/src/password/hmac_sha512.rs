use std::fmt;

use hmac::Hmac;
use hmac::Mac;
use sha2::Sha512;

type HmacSha512 = Hmac<Sha512>;

/// Password hashing implementation.
///
/// Deterministic keyed digest (HMAC-SHA-512) of a plaintext credential. The
/// same plaintext and salt always produce the same digest, so stored
/// credentials are compared by equality on the digest.
#[derive(Clone)]
pub struct PasswordHasher {
    mac: HmacSha512,
}

impl PasswordHasher {
    /// Create a hasher keyed by the given salt.
    ///
    /// HMAC accepts keys of any length: longer keys are hashed down and
    /// shorter ones zero-padded, so every salt yields a hasher.
    pub fn new(salt: &[u8]) -> Self {
        let mac = HmacSha512::new_from_slice(salt).expect("HMAC accepts keys of any length");

        Self { mac }
    }

    /// Hash a plaintext password.
    ///
    /// # Returns
    /// Lowercase hexadecimal digest (128 characters)
    pub fn hash(&self, password: &str) -> String {
        let mut mac = self.mac.clone();
        mac.update(password.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }
}

impl fmt::Debug for PasswordHasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordHasher")
            .field("algorithm", &"HMAC-SHA-512")
            .finish_non_exhaustive()
    }
}
