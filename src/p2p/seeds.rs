//! Seed Node Configuration
//!
//! Fixed bootstrap peers compiled into the binary. A node only needs one
//! or two of them: once connected it learns fresher addresses, so every
//! seed is given a synthetic "last seen" between one and two weeks ago.

use log::debug;
use rand::Rng;
use serde::Serialize;
use std::net::{IpAddr, Ipv6Addr, SocketAddr};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::constants::ONE_WEEK;

/// Compact seed record: IPv6 (or IPv4-mapped) address and port
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSpec6 {
    pub addr: [u8; 16],
    pub port: u16,
}

impl SeedSpec6 {
    /// IPv4 seed stored in its IPv4-mapped IPv6 form
    pub const fn ipv4(octets: [u8; 4], port: u16) -> Self {
        Self {
            addr: [
                0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xff, 0xff, octets[0], octets[1], octets[2],
                octets[3],
            ],
            port,
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(IpAddr::V6(Ipv6Addr::from(self.addr)), self.port)
    }
}

/// A peer address with the time it was last seen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PeerAddress {
    pub addr: SocketAddr,
    /// Unix time in seconds
    pub last_seen: u64,
}

/// DNS seed host. Every network currently ships an empty list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DnsSeed {
    pub name: &'static str,
    pub host: &'static str,
}

/// Expand compact seeds into peer records, preserving order
///
/// `last_seen = now - rand[0, one week) - one week`
pub fn materialize_seeds<R: Rng>(
    specs: &[SeedSpec6],
    now: u64,
    rng: &mut R,
) -> Vec<PeerAddress> {
    let peers: Vec<PeerAddress> = specs
        .iter()
        .map(|spec| PeerAddress {
            addr: spec.socket_addr(),
            last_seen: now
                .saturating_sub(rng.gen_range(0..ONE_WEEK))
                .saturating_sub(ONE_WEEK),
        })
        .collect();
    debug!("materialized {} fixed seeds", peers.len());
    peers
}

/// `materialize_seeds` against the system clock and thread RNG
pub fn materialize_seeds_now(specs: &[SeedSpec6]) -> Vec<PeerAddress> {
    materialize_seeds(specs, unix_now(), &mut rand::thread_rng())
}

/// Current Unix time in seconds
pub fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const SPECS: [SeedSpec6; 3] = [
        SeedSpec6::ipv4([10, 0, 0, 1], 20028),
        SeedSpec6::ipv4([10, 0, 0, 2], 20028),
        SeedSpec6 {
            addr: [0x20, 0x01, 0x0d, 0xb8, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
            port: 20063,
        },
    ];

    #[test]
    fn test_length_and_order_preserved() {
        let mut rng = StdRng::seed_from_u64(7);
        let peers = materialize_seeds(&SPECS, 1_700_000_000, &mut rng);
        assert_eq!(peers.len(), SPECS.len());
        for (peer, spec) in peers.iter().zip(SPECS.iter()) {
            assert_eq!(peer.addr, spec.socket_addr());
        }
    }

    #[test]
    fn test_last_seen_window() {
        let now = 1_700_000_000;
        let mut rng = StdRng::seed_from_u64(42);
        let specs = vec![SeedSpec6::ipv4([192, 168, 1, 1], 1); 500];
        for peer in materialize_seeds(&specs, now, &mut rng) {
            assert!(peer.last_seen <= now - ONE_WEEK);
            assert!(peer.last_seen >= now - 2 * ONE_WEEK);
        }
    }

    #[test]
    fn test_empty_input() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(materialize_seeds(&[], 1_700_000_000, &mut rng).is_empty());
    }

    #[test]
    fn test_ipv4_mapped_address() {
        let spec = SeedSpec6::ipv4([127, 0, 0, 1], 20028);
        let addr = spec.socket_addr();
        assert_eq!(addr.port(), 20028);
        match addr.ip() {
            IpAddr::V6(v6) => assert_eq!(v6.to_ipv4_mapped(), Some([127, 0, 0, 1].into())),
            IpAddr::V4(_) => panic!("seeds are stored as IPv6"),
        }
    }

    #[test]
    fn test_materialize_now_uses_recent_clock() {
        let before = unix_now();
        let peers = materialize_seeds_now(&SPECS);
        assert!(peers.iter().all(|p| p.last_seen <= before));
        assert!(peers.iter().all(|p| p.last_seen + 2 * ONE_WEEK + 5 >= before));
    }
}
