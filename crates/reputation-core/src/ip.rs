//! IP reputation: per-signal probes and the scoring orchestrator that
//! fans them out in parallel and folds the result into a 0-100 score.

use std::net::IpAddr;
use std::sync::Arc;

use aho_corasick::AhoCorasick;
use dns_probe::DnsProbe;
use ipnet_set::IpNetSet;
use once_cell::sync::Lazy;
use serde::Serialize;
use thiserror::Error;

use crate::datacenter_orgs::DATACENTER_ORGS;
use crate::regexes::{IS_DATACENTER_HOST, IS_PROXY_HOST, IS_VPN_HOST, SEARCH_ENGINE_ASNS, SEARCH_ENGINE_HOSTS};

static DATACENTER_ORG_MATCHER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .build(DATACENTER_ORGS)
        .expect("datacenter org patterns compile")
});

#[derive(Debug, Error)]
pub enum IpEvalError {
    #[error("geoip country lookup failed: {0}")]
    Country(#[from] geoip::GeoIpError),
}

#[derive(Debug, Clone, Serialize)]
pub struct IpInfo {
    pub company: String,
    pub country: String,
    pub hostnames: Vec<String>,
    pub is_proxy: bool,
    pub is_search_engine: bool,
    pub is_tor: bool,
    pub is_private: bool,
    pub is_datacenter: bool,
    pub is_spam: bool,
    pub is_vpn: bool,
    pub score: u8,
}

/// The IPNet sets and external lookups an `IpService` needs; held by
/// reference so callers keep owning their lifetime (typically an
/// `Arc<Datasets>` shared with the update scheduler).
pub struct IpProbes<'a> {
    pub dns: &'a DnsProbe,
    pub tor: &'a IpNetSet,
    pub proxy: &'a IpNetSet,
    pub spam: &'a IpNetSet,
    pub vpn: &'a IpNetSet,
    pub datacenter: &'a IpNetSet,
}

/// Reverse-DNS lookup, converted to `false`-on-error the way every
/// other probe in this module behaves: a missing PTR is routine, not
/// exceptional.
async fn reverse_hostnames(dns: &DnsProbe, ip: IpAddr) -> Vec<String> {
    dns.ptr(ip).await.unwrap_or_default()
}

async fn is_tor(tor: &IpNetSet, ip: IpAddr) -> bool {
    tor.contains(ip)
}

async fn is_spam(spam: &IpNetSet, ip: IpAddr) -> bool {
    spam.contains(ip)
}

async fn is_proxy(proxy: &IpNetSet, dns: &DnsProbe, ip: IpAddr) -> bool {
    if proxy.contains(ip) {
        return true;
    }
    match dns.ptr(ip).await {
        Ok(hostnames) => hostnames.first().is_some_and(|h| IS_PROXY_HOST.is_match(h)),
        Err(_) => false,
    }
}

async fn is_vpn(vpn: &IpNetSet, dns: &DnsProbe, ip: IpAddr) -> bool {
    if vpn.contains(ip) {
        return true;
    }
    match dns.ptr(ip).await {
        Ok(hostnames) => hostnames.first().is_some_and(|h| IS_VPN_HOST.is_match(h)),
        Err(_) => false,
    }
}

async fn is_datacenter(datacenter: &IpNetSet, dns: &DnsProbe, ip: IpAddr, org: &str) -> bool {
    if datacenter.contains(ip) {
        return true;
    }
    if DATACENTER_ORG_MATCHER.is_match(org) {
        return true;
    }
    match dns.ptr(ip).await {
        Ok(hostnames) => hostnames.first().is_some_and(|h| IS_DATACENTER_HOST.is_match(h)),
        Err(_) => false,
    }
}

/// Forward-confirmed reverse DNS: PTR(ip) must resolve to a hostname
/// whose own A lookup includes `ip`, and that hostname must match a
/// known search-engine pattern. The ASN organization is checked first
/// since it is cheap and already fetched for the response.
async fn is_search_engine(dns: &DnsProbe, ip: IpAddr, org: &str) -> bool {
    if SEARCH_ENGINE_ASNS.is_match(org) {
        return true;
    }
    let Ok(hostnames) = dns.ptr(ip).await else {
        return false;
    };
    let Some(first) = hostnames.first() else {
        return false;
    };
    let Ok(forward) = dns.a(first).await else {
        return false;
    };
    if !forward.contains(&ip) {
        return false;
    }
    hostnames.iter().any(|h| SEARCH_ENGINE_HOSTS.is_match(h))
}

/// Global-unicast check plus the RFC1918/loopback/link-local/ULA
/// carve-outs, mirroring the reference implementation's explicit CIDR
/// list rather than relying on a single "is this address reserved"
/// helper (which classifies a broader set of special-use ranges than
/// the reference service considers private).
pub fn is_private(ip: IpAddr) -> bool {
    match ip {
        IpAddr::V4(v4) => {
            !is_global_unicast_v4(v4) || v4.octets()[0] == 10 || (v4.octets()[0] == 172 && (16..=31).contains(&v4.octets()[1])) || (v4.octets()[0] == 192 && v4.octets()[1] == 168)
        }
        IpAddr::V6(v6) => {
            if v6.is_loopback() {
                return true;
            }
            let segments = v6.segments();
            let is_link_local = (segments[0] & 0xffc0) == 0xfe80;
            let is_unique_local = (segments[0] & 0xfe00) == 0xfc00;
            !is_global_unicast_v6(v6) || is_link_local || is_unique_local
        }
    }
}

fn is_global_unicast_v4(v4: std::net::Ipv4Addr) -> bool {
    !(v4.is_loopback() || v4.is_link_local() || v4.is_broadcast() || v4.is_multicast() || v4.is_unspecified() || v4.is_documentation())
}

fn is_global_unicast_v6(v6: std::net::Ipv6Addr) -> bool {
    !(v6.is_multicast() || v6.is_unspecified())
}

pub struct IpService {
    datasets: Arc<crate::datasets::Datasets>,
    dns: Arc<DnsProbe>,
}

impl IpService {
    pub fn new(datasets: Arc<crate::datasets::Datasets>, dns: Arc<DnsProbe>) -> Self {
        Self { datasets, dns }
    }

    /// Computes `IpInfo` for `ip`. Only a GeoIP `country` failure is
    /// fatal; every other probe absorbs its own errors into `false`.
    pub async fn evaluate(&self, ip: IpAddr) -> Result<IpInfo, IpEvalError> {
        let country = self.datasets.geoip.country(ip)?;
        let company = self.datasets.geoip.organization(ip);

        let probes = IpProbes {
            dns: &self.dns,
            tor: &self.datasets.tor,
            proxy: &self.datasets.proxy,
            spam: &self.datasets.spam,
            vpn: &self.datasets.vpn,
            datacenter: &self.datasets.datacenter,
        };

        let (is_search, is_tor_, is_proxy_, is_dc, is_spam_, is_vpn_, hostnames) = tokio::join!(
            is_search_engine(probes.dns, ip, &company),
            is_tor(probes.tor, ip),
            is_proxy(probes.proxy, probes.dns, ip),
            is_datacenter(probes.datacenter, probes.dns, ip, &company),
            is_spam(probes.spam, ip),
            is_vpn(probes.vpn, probes.dns, ip),
            reverse_hostnames(probes.dns, ip),
        );
        let is_private_addr = is_private(ip);

        let mut score: i32 = 86;
        score += if is_proxy_ { -53 } else { 2 };
        if is_search {
            score += 1;
        }
        if is_tor_ {
            score -= 59;
        }
        if is_dc {
            score -= 16;
        }
        if is_spam_ {
            score -= 24;
        }
        if is_vpn_ {
            score -= 13;
        }
        if hostnames.is_empty() {
            score -= 3;
        }
        if is_private_addr {
            score = 0;
        }
        let score = score.clamp(0, 100) as u8;

        Ok(IpInfo {
            company,
            country,
            hostnames,
            is_proxy: is_proxy_,
            is_search_engine: is_search,
            is_tor: is_tor_,
            is_private: is_private_addr,
            is_datacenter: is_dc,
            is_spam: is_spam_,
            is_vpn: is_vpn_,
            score,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn loopback_and_broadcast_are_private() {
        assert!(is_private("127.0.0.1".parse().unwrap()));
        assert!(is_private("255.255.255.255".parse().unwrap()));
        assert!(is_private("10.1.2.3".parse().unwrap()));
        assert!(is_private("172.16.0.5".parse().unwrap()));
        assert!(is_private("192.168.1.1".parse().unwrap()));
        assert!(is_private("::1".parse().unwrap()));
        assert!(is_private("fe80::1".parse().unwrap()));
        assert!(is_private("fc00::1".parse().unwrap()));
    }

    #[test]
    fn public_addresses_are_not_private() {
        assert!(!is_private("8.8.8.8".parse().unwrap()));
        assert!(!is_private("2001:4860:4860::8888".parse().unwrap()));
    }

    #[test]
    fn datacenter_org_matcher_catches_known_hosts() {
        assert!(DATACENTER_ORG_MATCHER.is_match("OVH SAS"));
        assert!(!DATACENTER_ORG_MATCHER.is_match("Some Residential ISP"));
    }
}
