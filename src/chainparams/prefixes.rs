//! Base58 version prefixes
//!
//! Each network tags encoded keys and addresses with its own version bytes
//! so an address decoded on one network is rejected on another. The
//! checksum encoding that consumes these bytes lives elsewhere.

use serde::Serialize;

/// What an encoded payload represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Base58Type {
    PubkeyAddress,
    ScriptAddress,
    SecretKey,
    ExtPublicKey,
    ExtSecretKey,
}

impl Base58Type {
    pub const ALL: [Base58Type; 5] = [
        Base58Type::PubkeyAddress,
        Base58Type::ScriptAddress,
        Base58Type::SecretKey,
        Base58Type::ExtPublicKey,
        Base58Type::ExtSecretKey,
    ];
}

/// Prefix table of one network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AddressPrefixes {
    pub pubkey_address: &'static [u8],
    pub script_address: &'static [u8],
    pub secret_key: &'static [u8],
    pub ext_public_key: &'static [u8],
    pub ext_secret_key: &'static [u8],
}

impl AddressPrefixes {
    pub fn prefix_for(&self, purpose: Base58Type) -> &'static [u8] {
        match purpose {
            Base58Type::PubkeyAddress => self.pubkey_address,
            Base58Type::ScriptAddress => self.script_address,
            Base58Type::SecretKey => self.secret_key,
            Base58Type::ExtPublicKey => self.ext_public_key,
            Base58Type::ExtSecretKey => self.ext_secret_key,
        }
    }

    /// No two purposes share a prefix
    pub fn all_distinct(&self) -> bool {
        Base58Type::ALL.iter().enumerate().all(|(i, a)| {
            Base58Type::ALL[i + 1..]
                .iter()
                .all(|b| self.prefix_for(*a) != self.prefix_for(*b))
        })
    }
}
