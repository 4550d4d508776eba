//! Compiled-in network literals
//!
//! Test is written as Main plus overrides, and Regression as Test plus
//! overrides. Only data differs between networks.

use super::{AddressPrefixes, NetworkKind};
use crate::consensus::Target;
use crate::node::{GenesisParams, GenesisPins};
use crate::p2p::{DnsSeed, SeedSpec6};

/// Text embedded in every genesis coinbase
pub const GENESIS_MESSAGE: &str =
    "Quantum Computers vs Bitcoin – How Worried Should We Be? | Dariusz | July 10, 2017";

/// Timestamp of the genesis coinbase transaction, shared by all networks
pub const GENESIS_TX_TIME: u32 = 1499734800;

const GENESIS_MERKLE_ROOT: &str =
    "4061031e449231be3cff61fb1fa4ef59fd0fd82c49f402704f22e7f2bad319c8";

const MAIN_FIXED_SEEDS: &[SeedSpec6] = &[];
const TEST_FIXED_SEEDS: &[SeedSpec6] = &[];
const NO_DNS_SEEDS: &[DnsSeed] = &[];

/// Raw literal table for one network
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainSpec {
    pub kind: NetworkKind,
    pub magic: [u8; 4],
    pub default_port: u16,
    pub rpc_port: u16,
    /// Proof-of-work ceiling is `~0 >> pow_limit_shift`
    pub pow_limit_shift: u32,
    pub genesis_time: u32,
    pub genesis_nonce: u32,
    pub genesis_pins: GenesisPins,
    pub prefixes: AddressPrefixes,
    pub fixed_seeds: &'static [SeedSpec6],
    pub dns_seeds: &'static [DnsSeed],
    pub last_pow_block: u32,
    pub requires_rpc_authentication: bool,
    /// Sub-directory of the data directory, empty for Main
    pub data_dir: &'static str,
}

pub const MAIN: ChainSpec = ChainSpec {
    kind: NetworkKind::Main,
    // Rarely used upper ASCII, not valid UTF-8
    magic: [0xd3, 0xa4, 0xe5, 0xf6],
    default_port: 20028,
    rpc_port: 20029,
    pow_limit_shift: 20,
    genesis_time: 1499734800,
    genesis_nonce: 36733,
    genesis_pins: GenesisPins {
        hash: "a02c67cabb7caaf3d5ffb894cb8770af8d52efb6c1dfee62a878de4323491275",
        merkle_root: GENESIS_MERKLE_ROOT,
    },
    prefixes: AddressPrefixes {
        pubkey_address: &[122],
        script_address: &[124],
        secret_key: &[128],
        ext_public_key: &[0x50, 0xe7, 0xfc, 0x0a],
        ext_secret_key: &[0x50, 0x9e, 0x04, 0x2f],
    },
    fixed_seeds: MAIN_FIXED_SEEDS,
    dns_seeds: NO_DNS_SEEDS,
    last_pow_block: 0x7fff_ffff,
    requires_rpc_authentication: true,
    data_dir: "",
};

pub const TEST: ChainSpec = ChainSpec {
    kind: NetworkKind::Test,
    magic: [0xea, 0xf4, 0xa0, 0x35],
    default_port: 20063,
    rpc_port: 20062,
    pow_limit_shift: 8,
    genesis_time: 1499734800 + 120,
    genesis_nonce: 26,
    genesis_pins: GenesisPins {
        hash: "ff25501531aa2b1b294a9e1106881ca6f77c8aa8da1c8321ff71a88770191912",
        merkle_root: GENESIS_MERKLE_ROOT,
    },
    prefixes: AddressPrefixes {
        pubkey_address: &[123],
        script_address: &[50],
        secret_key: &[23],
        ext_public_key: &[0x1d, 0x9b, 0x7f, 0x74],
        ext_secret_key: &[0x1d, 0xc0, 0xfc, 0x28],
    },
    fixed_seeds: TEST_FIXED_SEEDS,
    data_dir: "testnet",
    ..MAIN
};

pub const REGTEST: ChainSpec = ChainSpec {
    kind: NetworkKind::Regression,
    magic: [0xaa, 0xb2, 0xd2, 0xf7],
    default_port: 20087,
    pow_limit_shift: 1,
    genesis_time: 1499734800 + 90,
    genesis_nonce: 8,
    genesis_pins: GenesisPins {
        hash: "d5bf35b0ab392c4d786a711670985eb7db835a112a5e758a3d796b2c9330a057",
        merkle_root: GENESIS_MERKLE_ROOT,
    },
    requires_rpc_authentication: false,
    data_dir: "regtest",
    ..TEST
};

impl ChainSpec {
    pub fn for_network(kind: NetworkKind) -> &'static ChainSpec {
        match kind {
            NetworkKind::Main => &MAIN,
            NetworkKind::Test => &TEST,
            NetworkKind::Regression => &REGTEST,
        }
    }

    pub fn pow_limit(&self) -> Target {
        Target::max_shifted_right(self.pow_limit_shift)
    }

    /// Genesis literals; the header bits are the compact proof-of-work ceiling
    pub fn genesis_params(&self) -> GenesisParams {
        GenesisParams {
            version: 1,
            time: self.genesis_time,
            tx_time: GENESIS_TX_TIME,
            bits: self.pow_limit().to_compact(),
            nonce: self.genesis_nonce,
            message: GENESIS_MESSAGE,
            script_number: 42,
        }
    }
}
