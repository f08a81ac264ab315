//! Core protocol types.
//!
//! The checkpoint subsystem consumes block hashes and heights produced by
//! the rest of the node; it never computes hashes itself. All heights use
//! u64 per protocol convention.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::HashParseError;

/// A 32-byte hash value.
///
/// Used for block header hashes throughout the chain index and the
/// compiled-in checkpoint table.
#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default,
)]
pub struct Hash256(pub [u8; 32]);

impl Hash256 {
    /// The zero hash (32 zero bytes). Marks the genesis parent reference.
    pub const ZERO: Self = Self([0u8; 32]);

    /// Create a Hash256 from a byte array.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Parse a Hash256 from a 64-character hex string.
    ///
    /// Accepts an optional `0x` prefix, matching how checkpoint hashes are
    /// conventionally written down.
    ///
    /// # Errors
    ///
    /// Returns [`HashParseError::InvalidLength`] when the decoded value is
    /// not exactly 32 bytes, or [`HashParseError::InvalidHex`] on bad digits.
    pub fn from_hex(s: &str) -> Result<Self, HashParseError> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(s).map_err(|e| HashParseError::InvalidHex(e.to_string()))?;
        let arr: [u8; 32] = bytes
            .try_into()
            .map_err(|v: Vec<u8>| HashParseError::InvalidLength(v.len()))?;
        Ok(Self(arr))
    }

    /// Return the underlying bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Check if this is the zero hash.
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

impl fmt::Display for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl From<[u8; 32]> for Hash256 {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Hash256 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
