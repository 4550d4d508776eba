//! P2P bootstrap data - fixed seed peers

mod seeds;

pub use seeds::*;
