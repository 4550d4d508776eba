//! Error types for chain parameter construction and network selection

use thiserror::Error;

use crate::chainparams::NetworkKind;
use crate::crypto::Hash;

pub type Result<T> = std::result::Result<T, ChainParamsError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainParamsError {
    /// Both `-testnet` and `-regtest` were requested
    #[error("invalid combination of -regtest and -testnet")]
    ConfigurationConflict,

    #[error("unknown network: {0}")]
    UnknownNetwork(String),

    #[error("{network} genesis hash mismatch: expected {expected}, computed {computed}")]
    GenesisHashMismatch {
        network: NetworkKind,
        expected: Hash,
        computed: Hash,
    },

    #[error("{network} genesis merkle root mismatch: expected {expected}, computed {computed}")]
    MerkleRootMismatch {
        network: NetworkKind,
        expected: Hash,
        computed: Hash,
    },

    /// A compiled-in hash constant does not parse
    #[error("invalid pinned hash constant {0:?}")]
    InvalidPinnedHash(String),
}

impl ChainParamsError {
    /// Whether startup may report this and exit cleanly instead of treating
    /// the binary itself as broken
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            ChainParamsError::ConfigurationConflict | ChainParamsError::UnknownNetwork(_)
        )
    }
}
