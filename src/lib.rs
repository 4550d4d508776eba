//! RoyalEmpireCoin (REC) Core Library
//!
//! Network profiles for the main, test and regression-test chains: protocol
//! magic, ports, proof-of-work ceilings, address prefixes, fixed seeds and a
//! genesis block that is rebuilt and hash-checked before a node may start.

pub mod chainparams;
pub mod config;
pub mod consensus;
pub mod crypto;
pub mod error;
pub mod node;
pub mod p2p;
pub mod units;

pub use chainparams::{ChainParams, NetworkKind, NetworkSelector};
pub use error::{ChainParamsError, Result};

/// Protocol constants - HARD-CODED, NEVER CONFIGURABLE
pub mod constants {
    /// Base units per coin (8 decimal places)
    pub const COIN: i64 = 100_000_000;

    /// Number of decimal places
    pub const DECIMAL_PLACES: u8 = 8;

    /// Chain name (short form for addresses/logos)
    pub const CHAIN_NAME: &str = "REC";

    /// Full chain name
    pub const CHAIN_FULL_NAME: &str = "RoyalEmpireCoin";

    /// One week in seconds
    pub const ONE_WEEK: u64 = 7 * 24 * 60 * 60;
}
