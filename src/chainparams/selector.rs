//! Active network selection
//!
//! All three profiles are built up front and owned here; selection only
//! swaps which one `current()` hands out. The selection is a single atomic
//! so a reader racing a late `select` sees the old profile or the new one,
//! never a mix.

use log::{info, warn};
use std::sync::atomic::{AtomicU8, Ordering};

use super::{ChainParams, NetworkKind};
use crate::error::{ChainParamsError, Result};

/// Holds every network profile and the one currently in effect
#[derive(Debug)]
pub struct NetworkSelector {
    profiles: [ChainParams; 3],
    current: AtomicU8,
}

impl NetworkSelector {
    /// Build and verify all profiles. Main is selected initially.
    pub fn new() -> Result<Self> {
        let profiles = [
            ChainParams::main()?,
            ChainParams::testnet()?,
            ChainParams::regtest()?,
        ];
        Ok(Self::from_profiles(profiles))
    }

    /// Profiles must be ordered main, test, regtest
    pub fn from_profiles(profiles: [ChainParams; 3]) -> Self {
        debug_assert!(profiles
            .iter()
            .zip(NetworkKind::ALL)
            .all(|(p, kind)| p.network_kind() == kind));
        Self {
            profiles,
            current: AtomicU8::new(NetworkKind::Main.index() as u8),
        }
    }

    /// Make `kind` the active network. Last call wins.
    pub fn select(&self, kind: NetworkKind) {
        self.current.store(kind.index() as u8, Ordering::Release);
        info!("selected {} network", kind);
    }

    /// Select by textual name (`main`, `testnet`, `regtest`, ...)
    pub fn select_by_name(&self, name: &str) -> Result<NetworkKind> {
        let kind: NetworkKind = name.parse()?;
        self.select(kind);
        Ok(kind)
    }

    /// Apply the `-testnet` / `-regtest` startup flags
    ///
    /// Both set is a conflict and leaves the selection untouched.
    pub fn select_from_startup_intent(
        &self,
        want_test: bool,
        want_regtest: bool,
    ) -> Result<NetworkKind> {
        if want_test && want_regtest {
            warn!("refusing to start with both -testnet and -regtest");
            return Err(ChainParamsError::ConfigurationConflict);
        }

        let kind = if want_regtest {
            NetworkKind::Regression
        } else if want_test {
            NetworkKind::Test
        } else {
            NetworkKind::Main
        };
        self.select(kind);
        Ok(kind)
    }

    pub fn current_kind(&self) -> NetworkKind {
        // Only `select` writes, and it only stores valid indices
        NetworkKind::from_index(self.current.load(Ordering::Acquire)).unwrap_or(NetworkKind::Main)
    }

    /// The active profile
    pub fn current(&self) -> &ChainParams {
        self.params(self.current_kind())
    }

    /// Any profile, active or not
    pub fn params(&self, kind: NetworkKind) -> &ChainParams {
        &self.profiles[kind.index()]
    }
}
