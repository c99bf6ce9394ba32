//! IPv6 subnet derivation
//!
//! Every network gets a /64 out of the unique local range fc00::/8 whose
//! middle 48 bits come from a SHA-1 digest of the network name. The same
//! name always maps to the same subnet, so nothing has to be stored.

use ipnet::Ipv6Net;
use serde::Serialize;
use sha1::{Digest, Sha1};
use std::fmt;
use std::net::Ipv6Addr;

/// Prefix length of every derived subnet
pub const PREFIX_LEN: u8 = 64;

/// First two octets of every derived subnet (fc00::/8)
const ULA_PREFIX: [u8; 2] = [0xfc, 0x00];

/// A derived IPv6 subnet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct Subnet(Ipv6Net);

impl Subnet {
    /// Network base address
    pub fn addr(&self) -> Ipv6Addr {
        self.0.addr()
    }

    pub fn prefix_len(&self) -> u8 {
        self.0.prefix_len()
    }

    // Test-only accessor for range checks
    #[cfg(test)]
    pub fn as_net(&self) -> Ipv6Net {
        self.0
    }
}

impl fmt::Display for Subnet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Subnet> for String {
    fn from(subnet: Subnet) -> Self {
        subnet.to_string()
    }
}

/// Derive the subnet for a network name
///
/// Octets 2..8 of the address are digest bytes 2..8. Digest bytes 0 and 1
/// are skipped so subnets match the ones other tools already created for
/// the same names.
pub fn derive_subnet(name: &str) -> Subnet {
    let digest = Sha1::digest(name.as_bytes());

    let mut octets = [0u8; 16];
    octets[..2].copy_from_slice(&ULA_PREFIX);
    octets[2..8].copy_from_slice(&digest[2..8]);

    Subnet(Ipv6Net::new_assert(Ipv6Addr::from(octets), PREFIX_LEN))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_known_vector() {
        // sha1("kind") = 0ef25ae00f40c8471ee44b720036abcc25e96cee
        assert_eq!(derive_subnet("kind").to_string(), "fc00:5ae0:f40:c847::/64");
    }

    #[test]
    fn test_deterministic() {
        for name in ["kind", "kind2", "", "my cluster", "ネットワーク"] {
            assert_eq!(derive_subnet(name), derive_subnet(name));
        }
    }

    #[test]
    fn test_ula_range_and_prefix() {
        let ula: Ipv6Net = "fc00::/8".parse().unwrap();
        for name in ["kind", "a", "", "x.y*z", "very-long-network-name-for-testing"] {
            let subnet = derive_subnet(name);
            let octets = subnet.addr().octets();
            assert_eq!(octets[0], 0xfc);
            assert_eq!(octets[1], 0x00);
            assert!(octets[8..].iter().all(|b| *b == 0));
            assert_eq!(subnet.prefix_len(), 64);
            assert!(ula.contains(&subnet.as_net()));
        }
    }

    #[test]
    fn test_empty_name() {
        // sha1("") = da39a3ee5e6b4b0d3255bfef95601890afd80709
        assert_eq!(derive_subnet("").to_string(), "fc00:a3ee:5e6b:4b0d::/64");
    }

    #[test]
    fn test_distinct_names_distinct_subnets() {
        let subnets: HashSet<Subnet> = (0..1000)
            .map(|i| derive_subnet(&format!("cluster-{}", i)))
            .collect();
        assert_eq!(subnets.len(), 1000);

        assert_ne!(derive_subnet("kind"), derive_subnet("kind2"));
        assert_ne!(derive_subnet("kind"), derive_subnet("my-kind"));
    }

    #[test]
    fn test_serializes_as_cidr() {
        let json = serde_json::to_string(&derive_subnet("kind")).unwrap();
        assert_eq!(json, "\"fc00:5ae0:f40:c847::/64\"");
    }
}
