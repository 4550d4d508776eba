//! Startup configuration
//!
//! Network flags come from the command line and from `REC_*` environment
//! variables. Either source can ask for a network; the selector decides
//! whether the combination is allowed.

use log::debug;
use std::env;

use crate::chainparams::{NetworkKind, NetworkSelector};
use crate::error::Result;

pub const TESTNET_ENV: &str = "REC_TESTNET";
pub const REGTEST_ENV: &str = "REC_REGTEST";
pub const NETWORK_ENV: &str = "REC_NETWORK";

/// Which network the operator asked for
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartupIntent {
    pub testnet: bool,
    pub regtest: bool,
    /// Network given by name, e.g. `--network regtest`
    pub network: Option<String>,
}

impl StartupIntent {
    /// Merge with environment variables read through `lookup`
    pub fn with_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        self.testnet |= lookup(TESTNET_ENV).map_or(false, |v| is_truthy(&v));
        self.regtest |= lookup(REGTEST_ENV).map_or(false, |v| is_truthy(&v));
        if self.network.is_none() {
            self.network = lookup(NETWORK_ENV).filter(|v| !v.trim().is_empty());
        }
        self
    }

    /// Merge with the process environment
    pub fn with_process_env(self) -> Self {
        self.with_env(|key| env::var(key).ok())
    }

    /// Reduce to the two startup flags. A named network adds its own flag.
    pub fn resolve_flags(&self) -> Result<(bool, bool)> {
        let mut want_test = self.testnet;
        let mut want_regtest = self.regtest;
        if let Some(name) = &self.network {
            match name.parse::<NetworkKind>()? {
                NetworkKind::Main => {}
                NetworkKind::Test => want_test = true,
                NetworkKind::Regression => want_regtest = true,
            }
        }
        Ok((want_test, want_regtest))
    }

    /// Select the requested network on `selector`
    pub fn apply(&self, selector: &NetworkSelector) -> Result<NetworkKind> {
        let (want_test, want_regtest) = self.resolve_flags()?;
        debug!("startup intent: testnet={} regtest={}", want_test, want_regtest);
        selector.select_from_startup_intent(want_test, want_regtest)
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
