//! Sync-checkpoint selection and reorg-depth enforcement.
//!
//! The sync checkpoint is a moving anchor a bounded span behind the current
//! best tip. It is recomputed fresh from the caller's [`ChainView`] on
//! every call — never persisted or cached — so it advances automatically as
//! the best chain grows. Candidate blocks at or below it are rejected,
//! which bounds accepted reorg depth without any separately maintained
//! checkpoint record.

use beck_core::chain_index::{ChainIndex, ChainView, IndexEntry};
use beck_core::constants::CHECKPOINT_SPAN;
use beck_core::error::CheckpointError;
use tracing::warn;

/// Auto-select the current sync checkpoint.
///
/// Walks parent references backward from the best tip until the candidate
/// is more than [`CHECKPOINT_SPAN`] blocks behind the tip, or genesis is
/// reached. Chains no longer than the span anchor at genesis. Returns
/// `None` only when the view has no tip at all.
pub fn auto_select_sync_checkpoint<V: ChainView + ?Sized>(view: &V) -> Option<IndexEntry> {
    auto_select_sync_checkpoint_with(view, CHECKPOINT_SPAN)
}

/// Like [`auto_select_sync_checkpoint`] but with an explicit span.
///
/// This is the testable core: production code uses [`CHECKPOINT_SPAN`],
/// while tests can supply their own span.
pub fn auto_select_sync_checkpoint_with<V: ChainView + ?Sized>(
    view: &V,
    span: u64,
) -> Option<IndexEntry> {
    let tip = view.tip()?;
    let mut candidate = tip;
    // Search backward for the deepest block still within the span window.
    while candidate.height.saturating_add(span) > tip.height {
        match view.parent(&candidate) {
            Some(parent) => candidate = parent,
            None => break,
        }
    }
    Some(candidate)
}

/// Check a candidate block height against the current sync checkpoint.
///
/// Returns `false` for any height at or below the anchor — the caller must
/// reject such a candidate as an attempted deep reorganization. With no
/// tip yet (cold start) there is no anchor to enforce and every height
/// passes.
pub fn check_sync<V: ChainView + ?Sized>(view: &V, height: u64) -> bool {
    check_sync_with(view, CHECKPOINT_SPAN, height)
}

/// Like [`check_sync`] but with an explicit span.
pub fn check_sync_with<V: ChainView + ?Sized>(view: &V, span: u64, height: u64) -> bool {
    match auto_select_sync_checkpoint_with(view, span) {
        Some(anchor) => height > anchor.height,
        None => true,
    }
}

/// Like [`check_sync`], shaped for the block-acceptance pipeline.
///
/// # Errors
///
/// Returns [`CheckpointError::SyncDepthExceeded`] when `height` falls at or
/// below the current sync checkpoint.
pub fn enforce_sync<V: ChainView + ?Sized>(view: &V, height: u64) -> Result<(), CheckpointError> {
    let Some(anchor) = auto_select_sync_checkpoint(view) else {
        return Ok(());
    };
    if height > anchor.height {
        return Ok(());
    }
    warn!(
        height,
        anchor = anchor.height,
        "rejecting block below sync checkpoint"
    );
    Err(CheckpointError::SyncDepthExceeded {
        height,
        anchor: anchor.height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use beck_core::chain_index::MemoryChainIndex;
    use beck_core::types::Hash256;

    /// Deterministic hash for a height: little-endian height in the first
    /// eight bytes.
    fn hash_at(height: u64) -> Hash256 {
        let mut bytes = [0u8; 32];
        bytes[..8].copy_from_slice(&(height + 1).to_le_bytes());
        Hash256(bytes)
    }

    /// Build a linear chain with blocks at heights 0..=tip_height.
    fn chain_to(tip_height: u64) -> MemoryChainIndex {
        let mut index = MemoryChainIndex::new();
        for height in 0..=tip_height {
            let entry = IndexEntry {
                height,
                hash: hash_at(height),
                prev_hash: if height == 0 { Hash256::ZERO } else { hash_at(height - 1) },
            };
            index.insert_tip(entry);
        }
        index
    }

    // ------------------------------------------------------------------
    // auto_select_sync_checkpoint
    // ------------------------------------------------------------------

    #[test]
    fn anchor_is_span_behind_tip() {
        // The walk stops at the first block whose height + span no longer
        // exceeds the tip height.
        let index = chain_to(200);
        let anchor = auto_select_sync_checkpoint_with(&index, 5).unwrap();
        assert_eq!(anchor.height, 195);
    }

    #[test]
    fn short_chain_anchors_at_genesis() {
        let index = chain_to(3);
        let anchor = auto_select_sync_checkpoint_with(&index, 5).unwrap();
        assert_eq!(anchor.height, 0);
        assert!(anchor.is_genesis());
    }

    #[test]
    fn chain_length_equal_to_span_anchors_at_genesis() {
        // Tip at height 5 with span 5: the walk reaches genesis exactly
        // (0 + 5 > 5 is false).
        let index = chain_to(5);
        let anchor = auto_select_sync_checkpoint_with(&index, 5).unwrap();
        assert_eq!(anchor.height, 0);
    }

    #[test]
    fn single_block_chain_anchors_at_tip() {
        let index = chain_to(0);
        let anchor = auto_select_sync_checkpoint_with(&index, 5).unwrap();
        assert_eq!(anchor.height, 0);
    }

    #[test]
    fn empty_view_has_no_anchor() {
        let index = MemoryChainIndex::new();
        assert_eq!(auto_select_sync_checkpoint(&index), None);
    }

    #[test]
    fn anchor_advances_with_tip() {
        let mut index = chain_to(20);
        let before = auto_select_sync_checkpoint_with(&index, 5).unwrap();
        assert_eq!(before.height, 15);

        // Extend the chain by one block; the anchor moves with it.
        index.insert_tip(IndexEntry {
            height: 21,
            hash: hash_at(21),
            prev_hash: hash_at(20),
        });
        let after = auto_select_sync_checkpoint_with(&index, 5).unwrap();
        assert_eq!(after.height, 16);
    }

    #[test]
    fn anchor_never_more_than_span_behind() {
        for tip_height in [0u64, 1, 4, 5, 6, 49, 50, 51, 200] {
            let index = chain_to(tip_height);
            let anchor = auto_select_sync_checkpoint_with(&index, 50).unwrap();
            assert!(
                tip_height - anchor.height <= 50,
                "tip {tip_height}: anchor {} too deep",
                anchor.height
            );
        }
    }

    #[test]
    fn walk_stops_at_missing_parent() {
        // Index that only knows the last 3 blocks of a longer chain, as
        // after pruning. The walk stops where the parent chain ends.
        let mut index = MemoryChainIndex::new();
        for height in 98..=100 {
            index.insert_tip(IndexEntry {
                height,
                hash: hash_at(height),
                prev_hash: hash_at(height - 1),
            });
        }
        let anchor = auto_select_sync_checkpoint_with(&index, 50).unwrap();
        assert_eq!(anchor.height, 98);
    }

    #[test]
    fn full_span_uses_default_constant() {
        let index = chain_to(6000);
        let anchor = auto_select_sync_checkpoint(&index).unwrap();
        assert_eq!(anchor.height, 1000);
    }

    // ------------------------------------------------------------------
    // check_sync
    // ------------------------------------------------------------------

    #[test]
    fn boundary_is_inclusive() {
        // Tip 200, span 5 → anchor 195. 194 and 195 rejected, 196 accepted.
        let index = chain_to(200);
        assert!(!check_sync_with(&index, 5, 194));
        assert!(!check_sync_with(&index, 5, 195));
        assert!(check_sync_with(&index, 5, 196));
    }

    #[test]
    fn heights_above_tip_pass() {
        let index = chain_to(200);
        assert!(check_sync_with(&index, 5, 201));
        assert!(check_sync_with(&index, 5, u64::MAX));
    }

    #[test]
    fn genesis_anchor_rejects_only_genesis() {
        let index = chain_to(3);
        assert!(!check_sync_with(&index, 5, 0));
        assert!(check_sync_with(&index, 5, 1));
    }

    #[test]
    fn empty_view_passes_everything() {
        let index = MemoryChainIndex::new();
        assert!(check_sync(&index, 0));
        assert!(check_sync(&index, u64::MAX));
    }

    // ------------------------------------------------------------------
    // enforce_sync
    // ------------------------------------------------------------------

    #[test]
    fn enforce_ok_above_anchor() {
        let index = chain_to(6000);
        // Default span 5000 → anchor 1000.
        assert!(enforce_sync(&index, 1001).is_ok());
        assert!(enforce_sync(&index, 6001).is_ok());
    }

    #[test]
    fn enforce_err_at_and_below_anchor() {
        let index = chain_to(6000);
        let err = enforce_sync(&index, 1000).unwrap_err();
        assert_eq!(
            err,
            CheckpointError::SyncDepthExceeded { height: 1000, anchor: 1000 }
        );
        assert!(enforce_sync(&index, 0).is_err());
    }

    #[test]
    fn enforce_ok_on_empty_view() {
        let index = MemoryChainIndex::new();
        assert!(enforce_sync(&index, 0).is_ok());
    }
}
