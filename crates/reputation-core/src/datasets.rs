//! Bootstraps the `DataSource`-backed sets (`IpNetSet`/`DomainSet`)
//! that the signal probes query, and the shared `GeoIp` adapter that
//! sits alongside them.

use data_source::{DataSource, Line, UrlDataSource};
use domain_set::DomainSet;
use geoip::GeoIp;
use ipnet_set::IpNetSet;

use crate::config::Config;

pub struct Datasets {
    pub tor: IpNetSet,
    pub proxy: IpNetSet,
    pub spam: IpNetSet,
    pub vpn: IpNetSet,
    pub datacenter: IpNetSet,
    pub email_disposal: DomainSet,
    pub email_free: DomainSet,
    pub geoip: GeoIp,
}

/// The Tor exit-node list has no dedicated config override in the
/// reference service; it is sourced from the project's own mirror.
const TOR_EXIT_NODE_LIST: &str = "https://check.torproject.org/torbulkexitlist";

impl Datasets {
    pub fn new(config: &Config) -> Self {
        Self {
            tor: IpNetSet::new("tor"),
            proxy: IpNetSet::new("proxy"),
            spam: IpNetSet::new("spam"),
            vpn: IpNetSet::new("vpn"),
            datacenter: IpNetSet::new("datacenter"),
            email_disposal: DomainSet::new("email-disposal"),
            email_free: DomainSet::new("email-free"),
            geoip: GeoIp::new(config.maxmind_key.clone(), "./resources/maxmind"),
        }
    }

    pub async fn load_tor(&self) {
        load_ipnet_set(&self.tor, UrlDataSource::new([TOR_EXIT_NODE_LIST])).await;
    }

    pub async fn load_proxy(&self, config: &Config) {
        load_ipnet_set(&self.proxy, UrlDataSource::new(config.proxy_list.clone())).await;
    }

    pub async fn load_spam(&self, config: &Config) {
        load_ipnet_set(&self.spam, UrlDataSource::new(config.spam_list.clone())).await;
    }

    pub async fn load_vpn(&self, config: &Config) {
        load_ipnet_set(&self.vpn, UrlDataSource::new(config.vpn_list.clone())).await;
    }

    pub async fn load_datacenter(&self, config: &Config) {
        load_ipnet_set(&self.datacenter, UrlDataSource::new(config.dc_list.clone())).await;
    }

    pub async fn load_email_disposal(&self, config: &Config) {
        load_domain_set(&self.email_disposal, UrlDataSource::new(config.email_disposal_list.clone())).await;
    }

    pub async fn load_email_free(&self, config: &Config) {
        load_domain_set(&self.email_free, UrlDataSource::new(config.email_free_list.clone())).await;
    }
}

/// Drains a `DataSource` into a plain `Vec<String>` of already
/// normalized lines, logging and discarding any mid-stream error
/// (dataset load errors abort the update but never touch the live
/// set).
async fn drain<S: DataSource>(mut source: S, set_name: &str) -> Option<Vec<String>> {
    if let Err(err) = source.reset().await {
        tracing::error!(set = set_name, error = %err, "dataset reset failed, keeping prior snapshot");
        return None;
    }
    let mut lines = Vec::new();
    loop {
        match source.next().await {
            Ok(Line::Data(line)) => lines.push(line),
            Ok(Line::Done) => break,
            Err(err) => {
                tracing::error!(set = set_name, error = %err, "dataset load failed, keeping prior snapshot");
                return None;
            }
        }
    }
    Some(lines)
}

async fn load_ipnet_set<S: DataSource>(set: &IpNetSet, source: S) {
    let Some(lines) = drain(source, set.name()).await else {
        return;
    };
    let entries = lines.iter().filter_map(|line| match ipnet_set::parse_entry(line) {
        Ok(entry) => Some(entry),
        Err(err) => {
            tracing::debug!(set = set.name(), line = %line, error = %err, "skipping malformed entry");
            None
        }
    });
    set.publish(entries);
}

async fn load_domain_set<S: DataSource>(set: &DomainSet, source: S) {
    let Some(lines) = drain(source, set.name()).await else {
        return;
    };
    set.publish(lines);
}

#[cfg(test)]
mod test {
    use super::*;
    use data_source::ListDataSource;

    #[tokio::test]
    async fn load_ipnet_set_skips_malformed_lines() {
        let set = IpNetSet::new("test");
        let source = ListDataSource::new(["1.2.3.4", "bogus-entry", "5.6.7.0/24"]);
        load_ipnet_set(&set, source).await;
        assert!(set.contains("1.2.3.4".parse().unwrap()));
        assert!(set.contains("5.6.7.1".parse().unwrap()));
    }

    #[tokio::test]
    async fn load_domain_set_populates_from_source() {
        let set = DomainSet::new("test");
        let source = ListDataSource::new(["Mailinator.com", "guerrillamail.com"]);
        load_domain_set(&set, source).await;
        assert!(set.contains("mailinator.com"));
    }
}
