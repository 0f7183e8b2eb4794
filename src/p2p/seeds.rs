//! Seed Node Configuration
//!
//! Bootstrap peers for initial peer discovery: DNS seeds queried first, and
//! fixed addresses used when DNS yields nothing. Regtest has neither.
//!
//! The fixed tables are generated from the seed list of each network; the
//! entries below use reserved documentation ranges until a release table is
//! generated.

use serde::Serialize;
use std::net::{IpAddr, Ipv6Addr, SocketAddr};

/// A fixed seed address in IPv6 form (IPv4 addresses are IPv4-mapped)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SeedSpec6 {
    pub addr: [u8; 16],
    pub port: u16,
}

impl SeedSpec6 {
    /// IPv4-mapped seed (`::ffff:a.b.c.d`)
    pub const fn ipv4(a: u8, b: u8, c: u8, d: u8, port: u16) -> Self {
        Self {
            addr: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xff, 0xff, a, b, c, d],
            port,
        }
    }

    pub fn ip(&self) -> IpAddr {
        let v6 = Ipv6Addr::from(self.addr);
        match v6.to_ipv4_mapped() {
            Some(v4) => IpAddr::V4(v4),
            None => IpAddr::V6(v6),
        }
    }

    pub fn to_socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.ip(), self.port)
    }
}

/// A DNS seed: operator label and the host queried for peer addresses
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DnsSeed {
    pub name: String,
    pub host: String,
}

impl DnsSeed {
    pub fn new(name: &str, host: &str) -> Self {
        Self {
            name: name.to_string(),
            host: host.to_string(),
        }
    }
}

const MAIN_FIXED_SEEDS: &[SeedSpec6] = &[
    SeedSpec6::ipv4(192, 0, 2, 10, 9334),
    SeedSpec6::ipv4(192, 0, 2, 11, 9334),
    SeedSpec6::ipv4(198, 51, 100, 20, 9334),
    SeedSpec6::ipv4(203, 0, 113, 30, 9334),
];

const TEST_FIXED_SEEDS: &[SeedSpec6] = &[
    SeedSpec6::ipv4(192, 0, 2, 50, 18333),
    SeedSpec6::ipv4(198, 51, 100, 51, 18333),
];

/// Mainnet fixed seeds
pub fn main_fixed_seeds() -> Vec<SeedSpec6> {
    MAIN_FIXED_SEEDS.to_vec()
}

/// Testnet fixed seeds
pub fn test_fixed_seeds() -> Vec<SeedSpec6> {
    TEST_FIXED_SEEDS.to_vec()
}

/// Mainnet DNS seeds
pub fn main_dns_seeds() -> Vec<DnsSeed> {
    vec![
        DnsSeed::new("smailcoin", "seed.smailcoin.example"),
        DnsSeed::new("smailcoin-2", "seed2.smailcoin.example"),
    ]
}

/// Testnet DNS seeds
pub fn test_dns_seeds() -> Vec<DnsSeed> {
    vec![DnsSeed::new("smailcoin-testnet", "testnet-seed.smailcoin.example")]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ipv4_mapped_roundtrip() {
        let seed = SeedSpec6::ipv4(192, 0, 2, 10, 9334);
        assert_eq!(seed.to_socket_addr(), "192.0.2.10:9334".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn test_native_ipv6_seed() {
        let seed = SeedSpec6 {
            addr: "2001:db8::1".parse::<Ipv6Addr>().unwrap().octets(),
            port: 18333,
        };
        assert_eq!(seed.to_socket_addr().to_string(), "[2001:db8::1]:18333");
    }

    #[test]
    fn test_tables_non_empty() {
        assert!(!main_fixed_seeds().is_empty());
        assert!(!test_fixed_seeds().is_empty());
        assert!(!main_dns_seeds().is_empty());
        assert!(!test_dns_seeds().is_empty());
    }

    #[test]
    fn test_seed_ports_match_network() {
        assert!(main_fixed_seeds().iter().all(|s| s.port == 9334));
        assert!(test_fixed_seeds().iter().all(|s| s.port == 18333));
    }
}
