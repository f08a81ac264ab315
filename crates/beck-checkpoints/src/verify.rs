//! Hardened checkpoint verification and table-derived queries.
//!
//! A hardened checkpoint constrains exactly one height: a block at a
//! checkpointed height must carry the recorded hash, and a block at any
//! other height is unconstrained. This permissive-by-default policy is
//! deliberate — heights without a recorded checkpoint, including those
//! below the first one, impose no requirement.

use beck_core::chain_index::{ChainIndex, IndexEntry};
use beck_core::error::CheckpointError;
use beck_core::types::Hash256;
use tracing::warn;

use crate::table::CheckpointSet;

/// Check a candidate block hash against the hardened checkpoint table.
///
/// Returns `true` when no checkpoint exists at `height`, or when the
/// candidate hash matches the recorded one. A `false` result means the
/// candidate directly contradicts a trusted anchor and must be treated as
/// permanently invalid, along with any chain built on it.
pub fn check_hardened(set: &CheckpointSet, height: u64, hash: &Hash256) -> bool {
    match set.get(height) {
        Some(expected) => expected == *hash,
        None => true,
    }
}

/// Like [`check_hardened`], shaped for the block-acceptance pipeline.
///
/// # Errors
///
/// Returns [`CheckpointError::Mismatch`] when the hash contradicts the
/// checkpoint recorded at `height`.
pub fn verify_hardened(
    set: &CheckpointSet,
    height: u64,
    hash: &Hash256,
) -> Result<(), CheckpointError> {
    if check_hardened(set, height, hash) {
        return Ok(());
    }
    warn!(height, %hash, "block contradicts hardened checkpoint");
    Err(CheckpointError::Mismatch { height })
}

/// Coarse estimate of total chain length: the highest checkpointed height,
/// or 0 for a network without checkpoints.
///
/// Used as a denominator for percent-synced reporting. Carries no
/// correctness guarantee beyond tracking the compiled table.
pub fn total_blocks_estimate(set: &CheckpointSet) -> u64 {
    set.max_height().unwrap_or(0)
}

/// Find the highest checkpoint whose block is present in the local index.
///
/// Scans the table from the newest checkpoint down; older checkpoints are
/// consulted only when newer ones are absent from the index. Returns `None`
/// when no checkpoint hash is indexed at all — the ordinary state of a
/// freshly initialized node, not an error.
pub fn last_checkpoint<I: ChainIndex + ?Sized>(
    set: &CheckpointSet,
    index: &I,
) -> Option<IndexEntry> {
    set.iter().rev().find_map(|(_, hash)| index.get(&hash))
}
