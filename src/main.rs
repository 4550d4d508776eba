//! RoyalEmpireCoin (REC) Node
//!
//! Builds and verifies every network profile, selects the one requested on
//! the command line and reports its parameters.

use clap::Parser;
use log::{error, info};
use std::process;

use rec_core::config::StartupIntent;
use rec_core::constants::{CHAIN_FULL_NAME, CHAIN_NAME};
use rec_core::{ChainParams, NetworkSelector};

#[derive(Debug, Parser)]
#[command(name = "rec-node", version, about = "RoyalEmpireCoin node")]
struct Opt {
    /// Use the test network
    #[arg(long)]
    testnet: bool,

    /// Use the regression test network
    #[arg(long)]
    regtest: bool,

    /// Network by name: main, test or regtest
    #[arg(long)]
    network: Option<String>,

    /// Print the active profile as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let opt = Opt::parse();

    if let Err(e) = run(opt) {
        error!("Error: {e}");
        process::exit(1);
    }
}

fn run(opt: Opt) -> Result<(), Box<dyn std::error::Error>> {
    // Every profile is built and pinned before anything reads one
    let selector = NetworkSelector::new()?;

    let intent = StartupIntent {
        testnet: opt.testnet,
        regtest: opt.regtest,
        network: opt.network,
    }
    .with_process_env();
    let kind = intent.apply(&selector)?;
    info!("{} node starting on {} network", CHAIN_NAME, kind);

    let params = selector.current();
    if opt.json {
        println!("{}", serde_json::to_string_pretty(&params.summary())?);
    } else {
        print_summary(params);
    }
    Ok(())
}

fn print_summary(params: &ChainParams) {
    let genesis = params.genesis_block();
    println!("{} ({}) - {} network", CHAIN_FULL_NAME, CHAIN_NAME, params.network_kind());
    println!();
    println!("Network:");
    println!("  Magic:       {}", hex::encode(params.magic_bytes()));
    println!("  P2P Port:    {}", params.default_port());
    println!("  RPC Port:    {}", params.rpc_port());
    println!("  RPC Auth:    {}", params.requires_rpc_authentication());
    println!("  Fixed Seeds: {}", params.fixed_seeds().len());
    println!();
    println!("Genesis Block Information:");
    println!("  Hash:        {}", params.genesis_hash());
    println!("  Merkle Root: {}", genesis.header.merkle_root);
    println!("  Timestamp:   {}", genesis.header.timestamp);
    println!("  Difficulty:  0x{:08x}", genesis.header.bits);
    println!("  Nonce:       {}", genesis.header.nonce);
    println!();
    println!("Consensus:");
    println!("  PoW Limit:   {}", params.pow_limit());
    println!("  Last PoW:    {}", params.last_pow_block());
}
