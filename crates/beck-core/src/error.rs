//! Error types for the Beck checkpoint subsystem.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckpointError {
    #[error("block at height {height} contradicts hardened checkpoint")] Mismatch { height: u64 },
    #[error("height {height} at or below sync checkpoint at {anchor}")] SyncDepthExceeded { height: u64, anchor: u64 },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HashParseError {
    #[error("invalid hash length: {0} bytes, expected 32")] InvalidLength(usize),
    #[error("invalid hex: {0}")] InvalidHex(String),
}
