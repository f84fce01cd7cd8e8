//! Secret key for the commit-reveal scheme.

use crate::error::GameError;
use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 256-bit secret key, generated fresh per round and never reused.
///
/// Generation uses the operating system entropy source: the key is what
/// makes the commitment hiding, so a general-purpose PRNG is not enough
/// here.
#[derive(Clone, Serialize, Deserialize)]
pub struct SecretKey([u8; 32]);

impl SecretKey {
    /// Generate a new random key from the OS entropy source
    pub fn generate() -> Result<Self, GameError> {
        let mut bytes = [0u8; 32];
        OsRng.try_fill_bytes(&mut bytes)?;
        Ok(Self(bytes))
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Disclose the key as lowercase hex, for display after the round
    pub fn reveal(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretKey({})", hex::encode(&self.0[..8]))
    }
}
