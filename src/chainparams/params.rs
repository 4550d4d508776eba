//! Verified network profiles

use log::info;
use serde::Serialize;

use super::{AddressPrefixes, Base58Type, ChainSpec, NetworkKind};
use crate::consensus::{Block, Target};
use crate::crypto::Hash;
use crate::error::Result;
use crate::node::{create_genesis_block, verify_genesis, GenesisInfo};
use crate::p2p::{materialize_seeds_now, DnsSeed, PeerAddress};

/// Every protocol constant of one network, built once and read-only after
#[derive(Debug, Clone)]
pub struct ChainParams {
    kind: NetworkKind,
    magic: [u8; 4],
    default_port: u16,
    rpc_port: u16,
    pow_limit: Target,
    genesis: Block,
    genesis_hash: Hash,
    prefixes: AddressPrefixes,
    fixed_seeds: Vec<PeerAddress>,
    dns_seeds: &'static [DnsSeed],
    last_pow_block: u32,
    requires_rpc_authentication: bool,
    data_dir: &'static str,
}

impl ChainParams {
    /// Build and verify a profile from its literal table
    ///
    /// Fails if the rebuilt genesis block does not reproduce the pinned
    /// merkle root and hash. Startup must not continue in that case.
    pub fn build(spec: &ChainSpec) -> Result<Self> {
        let pow_limit = spec.pow_limit();

        let genesis = create_genesis_block(&spec.genesis_params());
        let genesis_hash = verify_genesis(spec.kind, &genesis, &spec.genesis_pins)?;

        let fixed_seeds = materialize_seeds_now(spec.fixed_seeds);

        info!(
            "{} chain parameters ready: genesis {}, magic {}, port {}",
            spec.kind,
            genesis_hash,
            hex::encode(spec.magic),
            spec.default_port
        );

        Ok(Self {
            kind: spec.kind,
            magic: spec.magic,
            default_port: spec.default_port,
            rpc_port: spec.rpc_port,
            pow_limit,
            genesis,
            genesis_hash,
            prefixes: spec.prefixes,
            fixed_seeds,
            dns_seeds: spec.dns_seeds,
            last_pow_block: spec.last_pow_block,
            requires_rpc_authentication: spec.requires_rpc_authentication,
            data_dir: spec.data_dir,
        })
    }

    pub fn for_network(kind: NetworkKind) -> Result<Self> {
        Self::build(ChainSpec::for_network(kind))
    }

    pub fn main() -> Result<Self> {
        Self::for_network(NetworkKind::Main)
    }

    pub fn testnet() -> Result<Self> {
        Self::for_network(NetworkKind::Test)
    }

    pub fn regtest() -> Result<Self> {
        Self::for_network(NetworkKind::Regression)
    }

    pub fn network_kind(&self) -> NetworkKind {
        self.kind
    }

    pub fn magic_bytes(&self) -> [u8; 4] {
        self.magic
    }

    pub fn default_port(&self) -> u16 {
        self.default_port
    }

    pub fn rpc_port(&self) -> u16 {
        self.rpc_port
    }

    pub fn pow_limit(&self) -> &Target {
        &self.pow_limit
    }

    pub fn genesis_block(&self) -> &Block {
        &self.genesis
    }

    pub fn genesis_hash(&self) -> &Hash {
        &self.genesis_hash
    }

    pub fn address_prefixes(&self) -> &AddressPrefixes {
        &self.prefixes
    }

    pub fn prefix_for(&self, purpose: Base58Type) -> &'static [u8] {
        self.prefixes.prefix_for(purpose)
    }

    pub fn fixed_seeds(&self) -> &[PeerAddress] {
        &self.fixed_seeds
    }

    pub fn dns_seeds(&self) -> &'static [DnsSeed] {
        self.dns_seeds
    }

    /// Height after which proof-of-work blocks are no longer accepted
    pub fn last_pow_block(&self) -> u32 {
        self.last_pow_block
    }

    pub fn requires_rpc_authentication(&self) -> bool {
        self.requires_rpc_authentication
    }

    pub fn data_dir(&self) -> &'static str {
        self.data_dir
    }

    pub fn summary(&self) -> ChainParamsSummary {
        ChainParamsSummary {
            network: self.kind,
            magic: hex::encode(self.magic),
            default_port: self.default_port,
            rpc_port: self.rpc_port,
            pow_limit: self.pow_limit.to_hex(),
            genesis: GenesisInfo::from_block(&self.genesis),
            prefixes: self.prefixes,
            fixed_seeds: self.fixed_seeds.len(),
            dns_seeds: self.dns_seeds.len(),
            last_pow_block: self.last_pow_block,
            requires_rpc_authentication: self.requires_rpc_authentication,
            data_dir: self.data_dir,
        }
    }
}

/// Printable view of a profile
#[derive(Debug, Clone, Serialize)]
pub struct ChainParamsSummary {
    pub network: NetworkKind,
    pub magic: String,
    pub default_port: u16,
    pub rpc_port: u16,
    pub pow_limit: String,
    pub genesis: GenesisInfo,
    pub prefixes: AddressPrefixes,
    pub fixed_seeds: usize,
    pub dns_seeds: usize,
    pub last_pow_block: u32,
    pub requires_rpc_authentication: bool,
    pub data_dir: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chainparams::spec::{MAIN, REGTEST, TEST};
    use crate::consensus::check_proof_of_work;
    use crate::error::ChainParamsError;
    use crate::node::GenesisPins;

    #[test]
    fn test_all_profiles_build() {
        for kind in NetworkKind::ALL {
            let params = ChainParams::for_network(kind).unwrap();
            assert_eq!(params.network_kind(), kind);
            assert_eq!(params.genesis_block().hash(), *params.genesis_hash());
        }
    }

    #[test]
    fn test_build_is_deterministic() {
        for kind in NetworkKind::ALL {
            let a = ChainParams::for_network(kind).unwrap();
            let b = ChainParams::for_network(kind).unwrap();
            assert_eq!(a.genesis_block(), b.genesis_block());
            assert_eq!(a.genesis_hash(), b.genesis_hash());
        }
    }

    #[test]
    fn test_main_literals() {
        let main = ChainParams::main().unwrap();
        assert_eq!(main.magic_bytes(), [0xd3, 0xa4, 0xe5, 0xf6]);
        assert_eq!(main.default_port(), 20028);
        assert_eq!(main.rpc_port(), 20029);
        assert_eq!(main.genesis_block().header.timestamp, 1499734800);
        assert_eq!(main.genesis_block().header.nonce, 36733);
        assert_eq!(main.genesis_block().header.bits, 0x1e0fffff);
        assert_eq!(
            main.genesis_block().header.merkle_root.to_hex(),
            "4061031e449231be3cff61fb1fa4ef59fd0fd82c49f402704f22e7f2bad319c8"
        );
        assert_eq!(main.last_pow_block(), 0x7fffffff);
        assert_eq!(main.data_dir(), "");
    }

    #[test]
    fn test_regtest_overrides() {
        let regtest = ChainParams::regtest().unwrap();
        assert_eq!(regtest.default_port(), 20087);
        assert_eq!(regtest.rpc_port(), 20062);
        assert_eq!(regtest.prefix_for(Base58Type::PubkeyAddress), &[123]);
        assert_eq!(regtest.data_dir(), "regtest");
    }

    #[test]
    fn test_rpc_authentication() {
        assert!(ChainParams::main().unwrap().requires_rpc_authentication());
        assert!(ChainParams::testnet().unwrap().requires_rpc_authentication());
        assert!(!ChainParams::regtest().unwrap().requires_rpc_authentication());
    }

    #[test]
    fn test_magic_bytes_pairwise_distinct() {
        let magics = [MAIN.magic, TEST.magic, REGTEST.magic];
        assert_ne!(magics[0], magics[1]);
        assert_ne!(magics[0], magics[2]);
        assert_ne!(magics[1], magics[2]);
    }

    #[test]
    fn test_prefixes_distinct_within_profile() {
        for kind in NetworkKind::ALL {
            assert!(ChainParams::for_network(kind).unwrap().address_prefixes().all_distinct());
        }
    }

    #[test]
    fn test_genesis_bits_within_own_limit() {
        for kind in NetworkKind::ALL {
            let params = ChainParams::for_network(kind).unwrap();
            let bits = params.genesis_block().header.bits;
            assert_eq!(params.pow_limit().to_compact(), bits);
            // The zero hash meets any valid target, so this checks bits vs limit only
            assert!(check_proof_of_work(&Hash::zero(), bits, params.pow_limit()));
        }
    }

    #[test]
    fn test_tampered_pin_aborts_build() {
        let spec = ChainSpec {
            genesis_pins: GenesisPins {
                hash: TEST.genesis_pins.hash,
                ..MAIN.genesis_pins
            },
            ..MAIN
        };
        let err = ChainParams::build(&spec).unwrap_err();
        assert!(matches!(
            err,
            ChainParamsError::GenesisHashMismatch {
                network: NetworkKind::Main,
                ..
            }
        ));
    }

    #[test]
    fn test_no_dns_seeds() {
        for kind in NetworkKind::ALL {
            assert!(ChainParams::for_network(kind).unwrap().dns_seeds().is_empty());
        }
    }

    #[test]
    fn test_summary_serializes() {
        let summary = ChainParams::testnet().unwrap().summary();
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["network"], "test");
        assert_eq!(json["magic"], "eaf4a035");
        assert_eq!(json["genesis"]["nonce"], 26);
    }
}
