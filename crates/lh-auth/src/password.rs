//! PBKDF2-HMAC-SHA256 password hashes

use crate::error::{AuthError, AuthResult};
use base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD};
use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::Sha256;
use std::fmt;
use std::str::FromStr;

/// Algorithm identifier embedded in encoded hashes
pub const ALGORITHM: &str = "pbkdf2-sha256";

/// Default PBKDF2 iteration count
pub const DEFAULT_ITERATIONS: u32 = 29_000;

/// Length of generated salts in bytes
pub const SALT_LEN: usize = 16;

/// Length of the derived key in bytes (one SHA-256 block)
pub const KEY_LEN: usize = 32;

/// Something that turns passwords into storable hash strings
pub trait PasswordHasher: Send + Sync {
    /// Hash `password` with a fresh salt
    fn hash_password(&self, password: &str) -> String;

    /// Check `password` against a stored hash string
    fn verify_password(&self, password: &str, encoded: &str) -> AuthResult<bool>;
}

/// PBKDF2-HMAC-SHA256 hasher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pbkdf2Sha256 {
    iterations: u32,
}

impl Default for Pbkdf2Sha256 {
    fn default() -> Self {
        Self::new(DEFAULT_ITERATIONS)
    }
}

impl Pbkdf2Sha256 {
    /// Create a hasher using `iterations` rounds
    pub fn new(iterations: u32) -> Self {
        Self { iterations }
    }

    /// Get the configured iteration count
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Hash `password` with an explicit salt
    pub fn hash_with_salt(&self, password: &str, salt: &[u8]) -> PasswordHash {
        PasswordHash {
            iterations: self.iterations,
            salt: salt.to_vec(),
            hash: derive_key(password, salt, self.iterations).to_vec(),
        }
    }

    /// Hash `password` with a random 16-byte salt from the OS
    pub fn hash(&self, password: &str) -> PasswordHash {
        let mut salt = [0u8; SALT_LEN];
        OsRng.fill_bytes(&mut salt);
        self.hash_with_salt(password, &salt)
    }
}

impl PasswordHasher for Pbkdf2Sha256 {
    fn hash_password(&self, password: &str) -> String {
        self.hash(password).to_string()
    }

    // The stored iteration count wins over the configured one.
    fn verify_password(&self, password: &str, encoded: &str) -> AuthResult<bool> {
        Ok(encoded.parse::<PasswordHash>()?.matches(password))
    }
}

fn derive_key(password: &str, salt: &[u8], iterations: u32) -> [u8; KEY_LEN] {
    let mut key = [0u8; KEY_LEN];
    pbkdf2::pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, iterations, &mut key);
    key
}

/// Decoded `$pbkdf2-sha256$<iterations>$<salt>$<hash>` string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordHash {
    /// PBKDF2 rounds
    pub iterations: u32,
    /// Raw salt bytes
    pub salt: Vec<u8>,
    /// Raw derived key bytes
    pub hash: Vec<u8>,
}

impl PasswordHash {
    /// Parse an encoded hash.
    ///
    /// Accepts padded standard base64 as well as the unpadded `.`-for-`+`
    /// alphabet some password libraries emit.
    pub fn parse(encoded: &str) -> AuthResult<Self> {
        let invalid = || AuthError::InvalidHashFormat(encoded.to_string());

        let mut fields = encoded.split('$');
        if fields.next() != Some("") {
            return Err(invalid());
        }

        let algorithm = fields.next().ok_or_else(invalid)?;
        if algorithm != ALGORITHM {
            return Err(AuthError::UnsupportedAlgorithm(algorithm.to_string()));
        }

        let (Some(iterations), Some(salt), Some(hash), None) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return Err(invalid());
        };

        let iterations: u32 = iterations.parse().map_err(|_| invalid())?;
        if iterations == 0 {
            return Err(invalid());
        }

        Ok(Self {
            iterations,
            salt: decode_b64(salt).ok_or_else(invalid)?,
            hash: decode_b64(hash).ok_or_else(invalid)?,
        })
    }

    /// Check whether `password` derives to this hash
    pub fn matches(&self, password: &str) -> bool {
        let mut candidate = vec![0u8; self.hash.len()];
        pbkdf2::pbkdf2_hmac::<Sha256>(password.as_bytes(), &self.salt, self.iterations, &mut candidate);
        constant_time_eq(&candidate, &self.hash)
    }
}

impl fmt::Display for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "${ALGORITHM}${}${}${}",
            self.iterations,
            STANDARD.encode(&self.salt),
            STANDARD.encode(&self.hash)
        )
    }
}

impl FromStr for PasswordHash {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn decode_b64(field: &str) -> Option<Vec<u8>> {
    let normalized = field.trim_end_matches('=').replace('.', "+");
    STANDARD_NO_PAD.decode(normalized).ok().filter(|bytes| !bytes.is_empty())
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

/// Enforce the minimum length of a new password, counted in characters
pub fn validate_new_password(password: &str, min_length: usize) -> AuthResult<()> {
    if password.chars().count() < min_length {
        return Err(AuthError::PasswordTooShort { min_length });
    }
    Ok(())
}
