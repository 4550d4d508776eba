//! Genesis block generation for the REC blockchain
//!
//! The first block of each network is rebuilt from literals at startup and
//! checked against pinned hashes. Nothing here reads the clock or a random
//! source; identical inputs give byte-identical blocks.

use log::error;
use serde::Serialize;

use crate::chainparams::NetworkKind;
use crate::consensus::{Block, BlockHeader, Script, Transaction, TxOut, OP_0};
use crate::crypto::Hash;
use crate::error::{ChainParamsError, Result};

/// Literal inputs of a genesis block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenesisParams {
    /// Block version
    pub version: i32,
    /// Header timestamp
    pub time: u32,
    /// Coinbase transaction timestamp
    pub tx_time: u32,
    /// Compact difficulty target
    pub bits: u32,
    pub nonce: u32,
    /// Text embedded in the coinbase scriptSig
    pub message: &'static str,
    /// Number pushed ahead of the message
    pub script_number: i64,
}

/// Pinned outputs a rebuilt genesis block must reproduce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenesisPins {
    pub hash: &'static str,
    pub merkle_root: &'static str,
}

/// Build the coinbase scriptSig: `OP_0 <number> <message>`
pub fn genesis_script_sig(params: &GenesisParams) -> Script {
    Script::new()
        .push_opcode(OP_0)
        .push_num(params.script_number)
        .push_slice(params.message.as_bytes())
}

/// Create a genesis block from its literal inputs
///
/// The reward output is empty, so the genesis coinbase can never be spent.
pub fn create_genesis_block(params: &GenesisParams) -> Block {
    let coinbase = Transaction::coinbase(
        1,
        params.tx_time,
        genesis_script_sig(params),
        vec![TxOut::empty()],
    );

    // One transaction: the merkle root is its own id
    let merkle_root = coinbase.hash();

    let header = BlockHeader::new(
        params.version,
        Hash::zero(),
        merkle_root,
        params.time,
        params.bits,
        params.nonce,
    );

    Block::new(header, vec![coinbase])
}

fn parse_pin(hex: &'static str) -> Result<Hash> {
    Hash::from_hex(hex).map_err(|_| ChainParamsError::InvalidPinnedHash(hex.to_string()))
}

/// Verify a rebuilt genesis block against its pins, returning its hash
pub fn verify_genesis(network: NetworkKind, block: &Block, pins: &GenesisPins) -> Result<Hash> {
    let expected_root = parse_pin(pins.merkle_root)?;
    let computed_root = block.build_merkle_root();
    if computed_root != expected_root || block.header.merkle_root != expected_root {
        error!(
            "{} genesis merkle root {} does not match pinned {}",
            network, computed_root, expected_root
        );
        return Err(ChainParamsError::MerkleRootMismatch {
            network,
            expected: expected_root,
            computed: computed_root,
        });
    }

    let expected_hash = parse_pin(pins.hash)?;
    let computed_hash = block.hash();
    if computed_hash != expected_hash {
        error!(
            "{} genesis hash {} does not match pinned {}",
            network, computed_hash, expected_hash
        );
        return Err(ChainParamsError::GenesisHashMismatch {
            network,
            expected: expected_hash,
            computed: computed_hash,
        });
    }

    Ok(computed_hash)
}

/// Genesis block statistics
#[derive(Debug, Clone, Serialize)]
pub struct GenesisInfo {
    pub hash: Hash,
    pub merkle_root: Hash,
    pub timestamp: u32,
    pub bits: u32,
    pub nonce: u32,
}

impl GenesisInfo {
    pub fn from_block(block: &Block) -> Self {
        Self {
            hash: block.hash(),
            merkle_root: block.header.merkle_root,
            timestamp: block.header.timestamp,
            bits: block.header.bits,
            nonce: block.header.nonce,
        }
    }
}
