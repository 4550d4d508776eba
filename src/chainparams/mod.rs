//! Chain parameters - network profiles, their literal tables and selection

mod network;
mod params;
mod prefixes;
mod selector;
pub mod spec;

pub use network::*;
pub use params::*;
pub use prefixes::*;
pub use selector::*;
pub use spec::ChainSpec;
