//! # beck-checkpoints — Checkpoint verification and sync-anchor selection.
//!
//! Anchors the locally accepted chain to a small set of known-good block
//! hashes and bounds how deep a competing chain may reorganize local
//! history.
//!
//! # Attack vectors
//!
//! - **Long-range rewrite:** Without checkpoints an attacker with sufficient
//!   hash power could feed a syncing node an arbitrarily deep alternate
//!   history. Hardened checkpoints pin known-good blocks so any chain that
//!   contradicts one is rejected outright.
//!
//! - **Deep reorganization:** Even above the last hardened checkpoint, a
//!   reorg that unwinds thousands of blocks is almost certainly hostile.
//!   The sync checkpoint — auto-selected a bounded span behind the current
//!   best tip — rejects candidates at or below it.
//!
//! - **Checkpoint spoofing:** The checkpoint table is compiled into the
//!   binary. An attacker would need to distribute a modified binary to
//!   exploit this, which is outside our threat model.
//!
//! # Usage
//!
//! The block-acceptance pipeline calls [`verify_hardened`] and
//! [`enforce_sync`] while validating a candidate block, holding its chain
//! lock across any call that traverses the live index. It calls
//! [`total_blocks_estimate`] and [`last_checkpoint`] for sync-progress
//! reporting and index bootstrap. Everything here is a pure function of the
//! compiled table and caller-supplied chain state; nothing is fetched or
//! cached.

pub mod sync;
pub mod table;
pub mod verify;

pub use sync::{auto_select_sync_checkpoint, check_sync, enforce_sync};
pub use table::{CheckpointSet, checkpoints};
pub use verify::{check_hardened, last_checkpoint, total_blocks_estimate, verify_hardened};
