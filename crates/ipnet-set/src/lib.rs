//! Atomically-swappable sets of IP addresses and CIDR ranges, used to
//! back the IP reputation lists (Tor exit nodes, datacenter ranges,
//! VPN/proxy ranges, and so on). A set is rebuilt wholesale from a
//! list of textual entries and published behind a single pointer
//! swap, so lookups never observe a partially-loaded generation.

mod hitcache;
mod trie;

mod set;

pub use cidr::AnyIpCidr;
pub use set::{parse_entry, IpNetSet, IpNetSetError};
