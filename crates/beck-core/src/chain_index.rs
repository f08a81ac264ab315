//! Chain-index traits and in-memory implementation.
//!
//! The checkpoint subsystem reads the node's block index through two small
//! capabilities: [`ChainIndex`] (hash → entry lookup) and [`ChainView`]
//! (adds the best-tip reference). The index itself is owned and mutated by
//! the block-acceptance pipeline; this module only defines the read seam.
//!
//! Lookups return [`IndexEntry`], a cheap owned snapshot of one node.
//! Parent traversal goes back through the index by `prev_hash`, so no
//! reference into caller-owned memory ever escapes a call.
//!
//! Callers that mutate the index concurrently must hold their chain lock
//! for the duration of any call that traverses it, or a walk may observe a
//! torn update.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::Hash256;

/// Snapshot of one block's position in the chain index.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexEntry {
    /// Block height. Genesis is 0.
    pub height: u64,
    /// Block header hash.
    pub hash: Hash256,
    /// Parent block hash. [`Hash256::ZERO`] for genesis.
    pub prev_hash: Hash256,
}

impl IndexEntry {
    /// Whether this entry is the genesis block (no parent reference).
    pub fn is_genesis(&self) -> bool {
        self.prev_hash.is_zero()
    }
}

/// Read access to the node's block index, keyed by block hash.
///
/// Implementations cover whatever blocks the local node currently knows;
/// absence of a hash is an ordinary result, not an error.
pub trait ChainIndex {
    /// Look up an entry by block hash. Returns `None` if unknown.
    fn get(&self, hash: &Hash256) -> Option<IndexEntry>;

    /// Whether the index contains the given block hash.
    ///
    /// Default implementation delegates to [`get`](Self::get).
    fn contains(&self, hash: &Hash256) -> bool {
        self.get(hash).is_some()
    }

    /// Look up the parent of an entry. Returns `None` at genesis or when
    /// the parent is not indexed.
    fn parent(&self, entry: &IndexEntry) -> Option<IndexEntry> {
        if entry.is_genesis() {
            return None;
        }
        self.get(&entry.prev_hash)
    }
}

/// A chain index that also tracks the best-chain tip.
pub trait ChainView: ChainIndex {
    /// The current best-chain tip. `None` when no blocks are indexed.
    fn tip(&self) -> Option<IndexEntry>;
}

/// In-memory chain index backed by a `HashMap`.
///
/// Suitable for tests and for a node that has not yet attached persistent
/// storage. No persistence, no pruning.
#[derive(Clone, Debug, Default)]
pub struct MemoryChainIndex {
    entries: HashMap<Hash256, IndexEntry>,
    tip_hash: Hash256,
}

impl MemoryChainIndex {
    /// Create a new empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, keyed by its hash. Replaces any existing entry
    /// with the same hash.
    pub fn insert(&mut self, entry: IndexEntry) {
        self.entries.insert(entry.hash, entry);
    }

    /// Insert an entry and mark it as the best tip.
    pub fn insert_tip(&mut self, entry: IndexEntry) {
        self.tip_hash = entry.hash;
        self.insert(entry);
    }

    /// Point the best tip at an already-indexed hash.
    pub fn set_tip(&mut self, hash: Hash256) {
        self.tip_hash = hash;
    }

    /// Number of indexed entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ChainIndex for MemoryChainIndex {
    fn get(&self, hash: &Hash256) -> Option<IndexEntry> {
        self.entries.get(hash).copied()
    }
}

impl ChainView for MemoryChainIndex {
    fn tip(&self) -> Option<IndexEntry> {
        if self.tip_hash.is_zero() {
            return None;
        }
        self.entries.get(&self.tip_hash).copied()
    }
}
