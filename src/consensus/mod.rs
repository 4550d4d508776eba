//! Consensus primitives - blocks, transactions, scripts and proof-of-work targets

mod block;
mod encode;
mod pow;
mod script;
mod transaction;

pub use block::*;
pub use encode::*;
pub use pow::*;
pub use script::*;
pub use transaction::*;
