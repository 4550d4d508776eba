//! Node bootstrap - genesis construction and verification

mod genesis;

pub use genesis::*;
