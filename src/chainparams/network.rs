//! Network identities

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::ChainParamsError;

/// One of the three mutually exclusive networks a node can join
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkKind {
    Main,
    Test,
    #[serde(rename = "regtest")]
    Regression,
}

impl NetworkKind {
    pub const ALL: [NetworkKind; 3] = [NetworkKind::Main, NetworkKind::Test, NetworkKind::Regression];

    pub fn name(self) -> &'static str {
        match self {
            NetworkKind::Main => "main",
            NetworkKind::Test => "test",
            NetworkKind::Regression => "regtest",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }

    pub(crate) fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }
}

impl fmt::Display for NetworkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NetworkKind {
    type Err = ChainParamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "main" | "mainnet" => Ok(NetworkKind::Main),
            "test" | "testnet" => Ok(NetworkKind::Test),
            "regtest" | "regression" => Ok(NetworkKind::Regression),
            _ => Err(ChainParamsError::UnknownNetwork(s.to_string())),
        }
    }
}
