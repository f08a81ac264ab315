//! Protocol constants and network selection.

/// Network type: Mainnet or Testnet.
///
/// Selects which compiled-in checkpoint table is active. Set once from
/// process configuration and threaded explicitly through every call; the
/// subsystem never reads it from ambient global state.
///
/// # Examples
///
/// ```
/// use beck_core::constants::NetworkType;
/// let net = NetworkType::default();
/// assert_eq!(net, NetworkType::Mainnet);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NetworkType {
    /// Production network, carries the hardened checkpoint table.
    #[default]
    Mainnet,
    /// Public test network. Carries no hardened checkpoints.
    Testnet,
}

impl NetworkType {
    /// Human-readable network name, used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Testnet => "testnet",
        }
    }
}

/// Maximum depth, in blocks, a reorganization may reach below the current
/// best tip.
///
/// The sync checkpoint is auto-selected this many blocks (or fewer, near
/// genesis) behind the best tip; candidate blocks at or below it are
/// rejected.
pub const CHECKPOINT_SPAN: u64 = 5000;
