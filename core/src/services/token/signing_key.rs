//! HMAC signing key derivation

use jsonwebtoken::{DecodingKey, EncodingKey};
use sha2::{Digest, Sha256};

/// Minimum HS256 key length in bytes
pub const MIN_SIGNING_KEY_LEN: usize = 32;

/// Key material used to sign and verify HS256 tokens
///
/// Always at least [`MIN_SIGNING_KEY_LEN`] bytes long.
#[derive(Clone, PartialEq, Eq)]
pub struct SigningKey {
    bytes: Vec<u8>,
    hashed: bool,
}

impl std::fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningKey")
            .field("len", &self.bytes.len())
            .field("hashed", &self.hashed)
            .finish()
    }
}

impl SigningKey {
    /// Derives the signing key from a configured secret
    ///
    /// The UTF-8 bytes of the secret are used directly when they are at least
    /// 32 bytes long. Shorter secrets are replaced by their SHA-256 digest and
    /// a warning is logged.
    ///
    /// # Example
    ///
    /// ```
    /// use enue_core::services::token::SigningKey;
    ///
    /// let key = SigningKey::derive("01234567890123456789012345678901");
    /// assert_eq!(key.as_bytes(), b"01234567890123456789012345678901");
    ///
    /// let short = SigningKey::derive("short");
    /// assert_eq!(short.as_bytes().len(), 32);
    /// assert!(short.is_hashed());
    /// ```
    pub fn derive(secret: &str) -> Self {
        let raw = secret.as_bytes();

        if raw.len() < MIN_SIGNING_KEY_LEN {
            tracing::warn!(
                secret_len = raw.len(),
                min_len = MIN_SIGNING_KEY_LEN,
                "jwt secret is shorter than the minimum key length, using its SHA-256 digest as the signing key"
            );
            return Self {
                bytes: Sha256::digest(raw).to_vec(),
                hashed: true,
            };
        }

        Self {
            bytes: raw.to_vec(),
            hashed: false,
        }
    }

    /// Returns the raw key bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Whether the key was produced by hashing an under-length secret
    pub fn is_hashed(&self) -> bool {
        self.hashed
    }

    /// Returns the key for signing tokens
    pub fn encoding_key(&self) -> EncodingKey {
        EncodingKey::from_secret(&self.bytes)
    }

    /// Returns the key for verifying tokens
    pub fn decoding_key(&self) -> DecodingKey {
        DecodingKey::from_secret(&self.bytes)
    }
}
