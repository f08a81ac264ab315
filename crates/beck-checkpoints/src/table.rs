//! The compiled-in checkpoint table.
//!
//! One [`CheckpointSet`] exists per network: the populated mainnet table
//! and an empty testnet table. Both are built once on first access and
//! never mutated; they may be read concurrently without synchronization.
//!
//! A good checkpoint block is buried deep enough that no honest reorg can
//! reach it, is surrounded by blocks with ordinary timestamps, and contains
//! no unusual transactions. Adding one is a one-line change to
//! [`MAINNET_CHECKPOINTS`].

use std::collections::BTreeMap;
use std::sync::LazyLock;

use beck_core::constants::NetworkType;
use beck_core::types::Hash256;

/// Mainnet hardened checkpoints as (height, header hash hex) pairs.
pub const MAINNET_CHECKPOINTS: &[(u64, &str)] = &[
    (0, "0000dd716a317a0ada4c9fdc6ec2982e2e9116f0e528373a0fcd53c0c378fad1"),
    (1_000, "9a878d343d5e63dfe8e455ae0e5e387bfdb9e7f05122553cd07a8365ebe5a62f"),
    (10_000, "4207b7388d022839374e4d0cfb51a94670b78b27b4f03561688d490164b413c8"),
    (25_000, "99a4e43113ae3ff1f7ef31bbf2dc5499fc9d149e003cfa3e10e8b054db0c2bbf"),
    (50_000, "f5811f207f83813e12259d31eadf47758b59b52006b98663c056bd2de1469291"),
    (100_000, "3d4b26cea49591810d53d70b2c9e37d7abd531d2a147cd560d99a9707c0c78a0"),
    (120_000, "2f18032bc85a8e9fefaf730cc3a0cb2f98eb105a5345e8c76de7600e1ca34f7e"),
    (140_000, "bbe08f3c1ad71e79f85ce35a1b5379e86a41f536bfc33dbdc9a1f357c24438b0"),
    (144_323, "4c555879587c42b507ebf3f77f1f409e1fab57996b352ab0c8772fc2b4cc229e"),
];

static MAINNET: LazyLock<CheckpointSet> = LazyLock::new(|| {
    CheckpointSet::from_entries(MAINNET_CHECKPOINTS.iter().map(|&(height, hex)| {
        // Hardcoded table — parse failure is a build defect, not a runtime
        // condition.
        let hash = Hash256::from_hex(hex).expect("compiled-in checkpoint hash is valid hex");
        (height, hash)
    }))
});

static TESTNET: LazyLock<CheckpointSet> = LazyLock::new(CheckpointSet::empty);

/// The active checkpoint set for the given network.
///
/// Testnet carries no hardened checkpoints, so every hardened check passes
/// there and the total-blocks estimate is 0.
pub fn checkpoints(network: NetworkType) -> &'static CheckpointSet {
    match network {
        NetworkType::Mainnet => &MAINNET,
        NetworkType::Testnet => &TESTNET,
    }
}

/// An immutable ordered mapping from block height to expected header hash.
///
/// Heights are strictly increasing under ascending iteration; at most one
/// hash exists per height. Built once by [`CheckpointSet::from_entries`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckpointSet {
    entries: BTreeMap<u64, Hash256>,
}

impl CheckpointSet {
    /// Build a set from (height, hash) pairs.
    ///
    /// Duplicate heights keep the last hash given, map-insert style.
    pub fn from_entries(entries: impl IntoIterator<Item = (u64, Hash256)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// An empty set. Every hardened check against it passes.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The expected hash at an exact height, if one is recorded.
    pub fn get(&self, height: u64) -> Option<Hash256> {
        self.entries.get(&height).copied()
    }

    /// The highest checkpointed height, or `None` for an empty set.
    pub fn max_height(&self) -> Option<u64> {
        self.entries.keys().next_back().copied()
    }

    /// Iterate over (height, hash) pairs in ascending height order.
    ///
    /// The iterator is double-ended; descending scans use `.rev()`.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (u64, Hash256)> + '_ {
        self.entries.iter().map(|(&height, &hash)| (height, hash))
    }

    /// Number of checkpoints in the set.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set has no checkpoints.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
