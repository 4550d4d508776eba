//! Cryptography module - SHA-256d hashing and Merkle roots

mod hash;
mod merkle;

pub use hash::*;
pub use merkle::*;
