//! Property-based and adversarial tests for REC chain parameters
//!
//! These tests verify invariants hold under random inputs and tampering.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use rec_core::chainparams::spec::{MAIN, REGTEST, TEST};
use rec_core::chainparams::{Base58Type, ChainSpec};
use rec_core::consensus::{check_proof_of_work, BlockHeader, Target};
use rec_core::constants::ONE_WEEK;
use rec_core::crypto::Hash;
use rec_core::node::{create_genesis_block, verify_genesis};
use rec_core::p2p::{materialize_seeds, SeedSpec6};
use rec_core::units::Unit;
use rec_core::{ChainParams, ChainParamsError, NetworkKind, NetworkSelector};

// ============================================================================
// PROPERTY-BASED TESTS
// ============================================================================

proptest! {
    /// Block hash is deterministic
    #[test]
    fn prop_block_hash_deterministic(
        version in 1i32..10i32,
        timestamp in any::<u32>(),
        bits in 0x1c000001u32..0x20800000u32,
        nonce in any::<u32>()
    ) {
        let header1 = BlockHeader::new(version, Hash::zero(), Hash::zero(), timestamp, bits, nonce);
        let header2 = BlockHeader::new(version, Hash::zero(), Hash::zero(), timestamp, bits, nonce);
        prop_assert_eq!(header1.hash(), header2.hash());
    }

    /// Changing any one genesis literal changes the genesis hash
    #[test]
    fn prop_genesis_sensitive_to_literals(delta in 1u32..u32::MAX) {
        let base = MAIN.genesis_params();
        let base_hash = create_genesis_block(&base).hash();

        let mut p = base;
        p.time = base.time.wrapping_add(delta);
        prop_assert_ne!(create_genesis_block(&p).hash(), base_hash);

        let mut p = base;
        p.nonce = base.nonce.wrapping_add(delta);
        prop_assert_ne!(create_genesis_block(&p).hash(), base_hash);

        let mut p = base;
        p.bits = base.bits.wrapping_add(delta);
        prop_assert_ne!(create_genesis_block(&p).hash(), base_hash);
    }

    /// Any tampered nonce fails the hash pin
    #[test]
    fn prop_tampered_genesis_rejected(nonce in any::<u32>()) {
        prop_assume!(nonce != MAIN.genesis_nonce);
        let mut params = MAIN.genesis_params();
        params.nonce = nonce;
        let block = create_genesis_block(&params);
        let is_hash_mismatch = matches!(
            verify_genesis(NetworkKind::Main, &block, &MAIN.genesis_pins),
            Err(ChainParamsError::GenesisHashMismatch { .. })
        );
        prop_assert!(is_hash_mismatch);
    }

    /// Seeds keep order and land one to two weeks in the past
    #[test]
    fn prop_seed_window(
        count in 0usize..64,
        now in (2 * ONE_WEEK)..u64::from(u32::MAX),
        seed in any::<u64>()
    ) {
        let specs: Vec<SeedSpec6> = (0..count)
            .map(|i| SeedSpec6::ipv4([10, 0, (i >> 8) as u8, i as u8], 20028))
            .collect();
        let mut rng = StdRng::seed_from_u64(seed);
        let peers = materialize_seeds(&specs, now, &mut rng);

        prop_assert_eq!(peers.len(), specs.len());
        for (peer, spec) in peers.iter().zip(specs.iter()) {
            prop_assert_eq!(peer.addr, spec.socket_addr());
            prop_assert!(peer.last_seen >= now - 2 * ONE_WEEK);
            prop_assert!(peer.last_seen <= now - ONE_WEEK);
        }
    }

    /// Decoded compact targets re-encode to the same bits
    #[test]
    fn prop_compact_reencodes(exponent in 4u32..=32u32, mantissa in 0x008000u32..0x7fffffu32) {
        let bits = (exponent << 24) | mantissa;
        let target = Target::from_compact(bits).unwrap();
        prop_assert_eq!(target.to_compact(), bits);
    }

    /// Nothing easier than the ceiling ever passes the work check
    #[test]
    fn prop_pow_respects_limit(bytes in any::<[u8; 32]>(), shift in 1u32..32u32) {
        let limit = Target::max_shifted_right(shift);
        let hash = Hash(bytes);
        let easier = Target::max_shifted_right(shift - 1).to_compact();
        if Target::from_compact(easier).unwrap() > limit {
            prop_assert!(!check_proof_of_work(&hash, easier, &limit));
        }
        if check_proof_of_work(&hash, limit.to_compact(), &limit) {
            prop_assert!(Target::from_hash(&hash) <= limit);
        }
    }

    /// Formatted amounts parse back to the same value
    #[test]
    fn prop_units_format_parse(amount in 0i64..=(21_000_000i64 * 100_000_000)) {
        for unit in Unit::ALL {
            let text = unit.format(amount, false);
            prop_assert_eq!(unit.parse(&text), Ok(amount));
        }
    }

    /// Startup intent never selects two networks and never moves on conflict
    #[test]
    fn prop_startup_intent(initial in 0usize..3, want_test in any::<bool>(), want_regtest in any::<bool>()) {
        let selector = NetworkSelector::new().unwrap();
        let before = NetworkKind::ALL[initial];
        selector.select(before);

        match selector.select_from_startup_intent(want_test, want_regtest) {
            Ok(kind) => {
                prop_assert!(!(want_test && want_regtest));
                prop_assert_eq!(selector.current().network_kind(), kind);
            }
            Err(err) => {
                prop_assert_eq!(err, ChainParamsError::ConfigurationConflict);
                prop_assert_eq!(selector.current_kind(), before);
            }
        }
    }
}

// ============================================================================
// NETWORK PROFILE TESTS
// ============================================================================

#[test]
fn test_pinned_genesis_hashes() {
    let expected = [
        (NetworkKind::Main, "a02c67cabb7caaf3d5ffb894cb8770af8d52efb6c1dfee62a878de4323491275"),
        (NetworkKind::Test, "ff25501531aa2b1b294a9e1106881ca6f77c8aa8da1c8321ff71a88770191912"),
        (NetworkKind::Regression, "d5bf35b0ab392c4d786a711670985eb7db835a112a5e758a3d796b2c9330a057"),
    ];
    for (kind, hash) in expected {
        let params = ChainParams::for_network(kind).unwrap();
        assert_eq!(params.genesis_hash().to_hex(), hash);
    }
}

#[test]
fn test_shared_coinbase_across_networks() {
    let roots: Vec<Hash> = NetworkKind::ALL
        .iter()
        .map(|kind| ChainParams::for_network(*kind).unwrap().genesis_block().header.merkle_root)
        .collect();
    assert_eq!(roots[0], roots[1]);
    assert_eq!(roots[1], roots[2]);
    assert_eq!(
        roots[0].to_hex(),
        "4061031e449231be3cff61fb1fa4ef59fd0fd82c49f402704f22e7f2bad319c8"
    );
}

#[test]
fn test_magic_bytes_distinct() {
    let selector = NetworkSelector::new().unwrap();
    let magics: Vec<[u8; 4]> = NetworkKind::ALL
        .iter()
        .map(|kind| selector.params(*kind).magic_bytes())
        .collect();
    for i in 0..magics.len() {
        for j in i + 1..magics.len() {
            assert_ne!(magics[i], magics[j]);
        }
    }
}

#[test]
fn test_address_prefixes_scope_networks() {
    let main = ChainParams::main().unwrap();
    let test = ChainParams::testnet().unwrap();
    for purpose in Base58Type::ALL {
        assert_ne!(main.prefix_for(purpose), test.prefix_for(purpose));
    }
    assert_eq!(main.prefix_for(Base58Type::ExtPublicKey), &[0x50, 0xe7, 0xfc, 0x0a]);
    assert_eq!(test.prefix_for(Base58Type::ExtSecretKey), &[0x1d, 0xc0, 0xfc, 0x28]);
}

// ============================================================================
// ADVERSARIAL TESTS
// ============================================================================

/// A profile whose pinned hash belongs to another network must not build
#[test]
fn test_swapped_pins_abort() {
    let spec = ChainSpec {
        genesis_pins: TEST.genesis_pins,
        ..REGTEST
    };
    assert!(matches!(
        ChainParams::build(&spec),
        Err(ChainParamsError::GenesisHashMismatch {
            network: NetworkKind::Regression,
            ..
        })
    ));
}

/// Loosening the ceiling changes the genesis bits and so its hash
#[test]
fn test_altered_pow_limit_aborts() {
    let spec = ChainSpec {
        pow_limit_shift: 24,
        ..MAIN
    };
    assert!(ChainParams::build(&spec).is_err());
}

/// Regtest without RPC auth never leaks into the other networks
#[test]
fn test_rpc_auth_only_disabled_on_regtest() {
    let selector = NetworkSelector::new().unwrap();
    for kind in NetworkKind::ALL {
        let auth = selector.params(kind).requires_rpc_authentication();
        assert_eq!(auth, kind != NetworkKind::Regression);
    }
}
