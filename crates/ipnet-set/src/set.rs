use crate::hitcache::HitCache;
use crate::trie::RadixTrie;
use arc_swap::ArcSwap;
use cidr::{AnyIpCidr, IpCidr};
use std::collections::HashSet;
use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IpNetSetError {
    #[error("invalid IP or CIDR entry: {0}")]
    InvalidEntry(String),
}

/// One loaded generation of the set: a radix trie of CIDRs, split from
/// a hash set of `/32` and `/128` singletons. Immutable once built;
/// `IpNetSet::publish` swaps the whole pair atomically so that readers
/// never observe a half-loaded state.
#[derive(Default)]
struct Snapshot {
    v4_cidrs: RadixTrie,
    v6_cidrs: RadixTrie,
    v4_singles: HashSet<u32>,
    v6_singles: HashSet<u64>,
    cidr_count: usize,
}

/// A queryable set of IPv4/IPv6 addresses and CIDR ranges, rebuilt
/// wholesale on each `load()` and published behind a single pointer
/// swap so concurrent `contains()` calls never see a torn update.
pub struct IpNetSet {
    name: String,
    current: ArcSwap<Snapshot>,
    hits: HitCache,
}

impl IpNetSet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            current: ArcSwap::from_pointee(Snapshot::default()),
            hits: HitCache::new(Duration::from_secs(60)),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Builds a fresh snapshot from `entries` (already-parsed CIDRs,
    /// single addresses having mask == address width) and publishes
    /// it, flushing the positive-hit cache so that no stale hit from
    /// the previous generation survives into this one.
    pub fn publish<I>(&self, entries: I)
    where
        I: IntoIterator<Item = AnyIpCidr>,
    {
        let mut snapshot = Snapshot::default();
        for entry in entries {
            match entry {
                AnyIpCidr::V4(c) => insert_v4(&mut snapshot, c),
                AnyIpCidr::V6(c) => insert_v6(&mut snapshot, c),
                AnyIpCidr::Any => {
                    // A bare "match everything" entry: encode as the
                    // /0 prefix of both families.
                    snapshot.v4_cidrs.insert(&[0, 0, 0, 0], 0);
                    snapshot.v6_cidrs.insert(&[0; 16], 0);
                }
            }
        }
        tracing::debug!(
            set = %self.name,
            cidrs = snapshot.cidr_count,
            v4_singles = snapshot.v4_singles.len(),
            v6_singles = snapshot.v6_singles.len(),
            "published new ipnet-set snapshot",
        );
        self.current.store(Arc::new(snapshot));
        self.hits.flush();
    }

    pub fn contains(&self, ip: IpAddr) -> bool {
        if self.hits.get(&ip) {
            return true;
        }
        let snapshot = self.current.load();
        let found = match ip {
            IpAddr::V4(v4) => {
                let octets = v4.octets();
                snapshot.v4_singles.contains(&u32::from_be_bytes(octets))
                    || snapshot.v4_cidrs.contains(&octets, 32)
            }
            IpAddr::V6(v6) => {
                let octets = v6.octets();
                let high = u64::from_be_bytes(octets[..8].try_into().unwrap());
                snapshot.v6_singles.contains(&high) || snapshot.v6_cidrs.contains(&octets, 128)
            }
        };
        if found {
            self.hits.record_hit(ip);
        }
        found
    }
}

fn insert_v4(snapshot: &mut Snapshot, cidr: cidr::Ipv4Cidr) {
    if cidr.network_length() == 32 {
        snapshot
            .v4_singles
            .insert(u32::from_be_bytes(cidr.first_address().octets()));
    } else {
        snapshot
            .v4_cidrs
            .insert(&cidr.first_address().octets(), cidr.network_length());
        snapshot.cidr_count += 1;
    }
}

fn insert_v6(snapshot: &mut Snapshot, cidr: cidr::Ipv6Cidr) {
    if cidr.network_length() == 128 {
        let octets = cidr.first_address().octets();
        snapshot
            .v6_singles
            .insert(u64::from_be_bytes(octets[..8].try_into().unwrap()));
    } else {
        snapshot
            .v6_cidrs
            .insert(&cidr.first_address().octets(), cidr.network_length());
        snapshot.cidr_count += 1;
    }
}

/// Parses one textual entry (IPv4, IPv6, or CIDR) into the normalized
/// form `publish` expects, routing bare addresses to their full-width
/// mask the same way a `/32` or `/128` entry would be.
pub fn parse_entry(text: &str) -> Result<AnyIpCidr, IpNetSetError> {
    if let Ok(cidr) = text.parse::<IpCidr>() {
        return Ok(cidr.into());
    }
    if let Ok(ip) = text.parse::<IpAddr>() {
        return Ok(match ip {
            IpAddr::V4(v4) => AnyIpCidr::V4(cidr::Ipv4Cidr::new(v4, 32).unwrap()),
            IpAddr::V6(v6) => AnyIpCidr::V6(cidr::Ipv6Cidr::new(v6, 128).unwrap()),
        });
    }
    Err(IpNetSetError::InvalidEntry(text.to_string()))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn singleton_and_cidr_split() {
        let set = IpNetSet::new("test");
        set.publish(
            ["127.0.0.1", "10.0.3.0/24", "::1"]
                .into_iter()
                .map(|s| parse_entry(s).unwrap()),
        );

        assert!(set.contains("127.0.0.1".parse().unwrap()));
        assert!(!set.contains("127.0.0.2".parse().unwrap()));
        assert!(set.contains("10.0.3.42".parse().unwrap()));
        assert!(!set.contains("10.0.4.1".parse().unwrap()));
        assert!(set.contains("::1".parse().unwrap()));
    }

    #[test]
    fn duplicate_cidr_is_idempotent() {
        let set = IpNetSet::new("test");
        set.publish(
            ["5.6.7.0/24", "5.6.7.0/24"]
                .into_iter()
                .map(|s| parse_entry(s).unwrap()),
        );
        assert!(set.contains("5.6.7.200".parse().unwrap()));
    }

    #[test]
    fn republish_flushes_hit_cache() {
        let set = IpNetSet::new("test");
        set.publish(["1.2.3.4"].into_iter().map(|s| parse_entry(s).unwrap()));
        assert!(set.contains("1.2.3.4".parse().unwrap()));

        set.publish(std::iter::empty());
        assert!(!set.contains("1.2.3.4".parse().unwrap()));
    }
}
