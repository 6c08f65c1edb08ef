//! Thin, timeout-bounded wrapper around a Hickory DNS resolver for the
//! three lookups the scoring probes need: PTR (reverse), MX, and A/AAAA
//! (forward). Every call is wrapped in its own `tokio::time::timeout`
//! because a probe that hangs on a slow or unresponsive nameserver must
//! not stall the whole reputation lookup.

use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::{Name, ResolveError, TokioResolver};
use std::net::IpAddr;
use std::time::Duration;
use thiserror::Error;

/// Reverse lookups return in half the time a forward MX/A lookup is
/// given; these mirror the budgets the original scoring service used.
pub const PTR_TIMEOUT: Duration = Duration::from_millis(500);
pub const MX_TIMEOUT: Duration = Duration::from_secs(1);
pub const A_TIMEOUT: Duration = Duration::from_secs(1);

#[derive(Debug, Error)]
pub enum DnsError {
    #[error("invalid DNS name: {0}")]
    InvalidName(String),
    #[error("DNS lookup timed out")]
    Timeout,
    #[error("DNS lookup failed: {0}")]
    ResolveFailed(#[from] ResolveError),
}

pub struct DnsProbe {
    inner: TokioResolver,
}

impl DnsProbe {
    /// Builds a resolver from the system's `/etc/resolv.conf` (or
    /// platform equivalent), falling back to Google's public resolvers
    /// if that configuration cannot be read.
    pub fn new() -> Self {
        let inner = TokioResolver::builder_tokio()
            .unwrap_or_else(|_| {
                TokioResolver::builder_with_config(
                    ResolverConfig::google(),
                    Default::default(),
                )
            })
            .with_options(ResolverOpts::default())
            .build();
        Self { inner }
    }

    /// Reverse DNS: the hostnames a PTR record gives for `ip`, most
    /// significant first.
    pub async fn ptr(&self, ip: IpAddr) -> Result<Vec<String>, DnsError> {
        let lookup = tokio::time::timeout(PTR_TIMEOUT, self.inner.reverse_lookup(ip))
            .await
            .map_err(|_| DnsError::Timeout)??;
        Ok(lookup.into_iter().map(|ptr| ptr.0.to_utf8()).collect())
    }

    /// MX records for `domain`, in the order the resolver returned
    /// them (already priority-sorted by hickory).
    pub async fn mx(&self, domain: &str) -> Result<Vec<String>, DnsError> {
        let name = parse_name(domain)?;
        let lookup = tokio::time::timeout(MX_TIMEOUT, self.inner.mx_lookup(name))
            .await
            .map_err(|_| DnsError::Timeout)??;
        Ok(lookup
            .into_iter()
            .map(|mx| mx.exchange().to_utf8())
            .collect())
    }

    /// A/AAAA records for `host`.
    pub async fn a(&self, host: &str) -> Result<Vec<IpAddr>, DnsError> {
        let name = parse_name(host)?;
        let lookup = tokio::time::timeout(A_TIMEOUT, self.inner.lookup_ip(name))
            .await
            .map_err(|_| DnsError::Timeout)??;
        Ok(lookup.into_iter().collect())
    }
}

impl Default for DnsProbe {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_name(host: &str) -> Result<Name, DnsError> {
    Name::from_utf8(host).map_err(|err| DnsError::InvalidName(format!("{host}: {err}")))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_name_rejects_garbage() {
        assert!(parse_name("not a domain\0").is_err());
    }

    #[test]
    fn parse_name_accepts_plain_domain() {
        assert!(parse_name("example.com").is_ok());
    }
}
