//! Top-level wiring: owns the datasets, the per-input-type scoring
//! services, and the response caches, and exposes the three public
//! operations (`score_ip`, `score_email`, `score_request`) that the
//! transport layer calls into.

use std::net::IpAddr;
use std::sync::Arc;

use dns_probe::DnsProbe;

use crate::cache::ResponseCaches;
use crate::config::Config;
use crate::datasets::Datasets;
use crate::email::{EmailInfo, EmailService};
use crate::ip::{IpEvalError, IpInfo, IpService};
use crate::request::{RequestQuery, RequestResult, RequestService};
use crate::scheduler::{self, EMAIL_LIST_INTERVAL, GEOIP_INTERVAL, IP_LIST_INTERVAL, TOR_INTERVAL};

pub struct Reputation {
    datasets: Arc<Datasets>,
    config: Config,
    ip_service: IpService,
    email_service: EmailService,
    request_service: RequestService,
    caches: ResponseCaches,
}

impl Reputation {
    pub fn new(config: Config) -> Self {
        let datasets = Arc::new(Datasets::new(&config));
        let dns = Arc::new(DnsProbe::new());

        let ip_service = IpService::new(datasets.clone(), dns.clone());
        let email_service = EmailService::new(datasets.clone(), dns.clone(), config.clone());
        let request_service = RequestService::new(IpService::new(datasets.clone(), dns.clone()));

        Self {
            datasets,
            config,
            ip_service,
            email_service,
            request_service,
            caches: ResponseCaches::default(),
        }
    }

    /// Spawns the per-dataset background refresh workers. Each one
    /// fires an initial load immediately, then reloads on its own
    /// fixed interval for the lifetime of the process.
    pub fn spawn_update_workers(&self) {
        let datasets = self.datasets.clone();
        scheduler::run_and_schedule(TOR_INTERVAL, move || {
            let datasets = datasets.clone();
            async move { datasets.load_tor().await }
        });

        let datasets = self.datasets.clone();
        scheduler::run_and_schedule(GEOIP_INTERVAL, move || {
            let datasets = datasets.clone();
            async move {
                if let Err(err) = datasets.geoip.update().await {
                    tracing::error!(error = %err, "geoip update failed, keeping prior databases");
                }
            }
        });

        let datasets = self.datasets.clone();
        let config = self.config.clone();
        scheduler::run_and_schedule(IP_LIST_INTERVAL, move || {
            let datasets = datasets.clone();
            let config = config.clone();
            async move { datasets.load_proxy(&config).await }
        });

        let datasets = self.datasets.clone();
        let config = self.config.clone();
        scheduler::run_and_schedule(IP_LIST_INTERVAL, move || {
            let datasets = datasets.clone();
            let config = config.clone();
            async move { datasets.load_datacenter(&config).await }
        });

        let datasets = self.datasets.clone();
        let config = self.config.clone();
        scheduler::run_and_schedule(IP_LIST_INTERVAL, move || {
            let datasets = datasets.clone();
            let config = config.clone();
            async move { datasets.load_spam(&config).await }
        });

        let datasets = self.datasets.clone();
        let config = self.config.clone();
        scheduler::run_and_schedule(IP_LIST_INTERVAL, move || {
            let datasets = datasets.clone();
            let config = config.clone();
            async move { datasets.load_vpn(&config).await }
        });

        let datasets = self.datasets.clone();
        let config = self.config.clone();
        scheduler::run_and_schedule(EMAIL_LIST_INTERVAL, move || {
            let datasets = datasets.clone();
            let config = config.clone();
            async move { datasets.load_email_disposal(&config).await }
        });

        let datasets = self.datasets.clone();
        let config = self.config.clone();
        scheduler::run_and_schedule(EMAIL_LIST_INTERVAL, move || {
            let datasets = datasets.clone();
            let config = config.clone();
            async move { datasets.load_email_free(&config).await }
        });
    }

    pub async fn score_ip(&self, ip: IpAddr) -> Result<IpInfo, IpEvalError> {
        let key = ip.to_string();
        if let Some(cached) = self.caches.ip.get(&key) {
            return Ok(cached);
        }
        let info = self.ip_service.evaluate(ip).await?;
        self.caches.ip.insert(key, info.clone(), self.caches.ttl());
        Ok(info)
    }

    pub async fn score_email(&self, email: &str) -> EmailInfo {
        if let Some(cached) = self.caches.email.get(email) {
            return cached;
        }
        let info = self.email_service.evaluate(email).await;
        self.caches
            .email
            .insert(email.to_string(), info.clone(), self.caches.ttl());
        info
    }

    pub async fn score_request(&self, query: &RequestQuery) -> Result<RequestResult, IpEvalError> {
        let key = query.fingerprint();
        if let Some(cached) = self.caches.request.get(&key) {
            return Ok(cached);
        }
        let result = self.request_service.evaluate(query).await?;
        self.caches.request.insert(key, result.clone(), self.caches.ttl());
        Ok(result)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[tokio::test]
    async fn private_ip_scores_zero() {
        let reputation = Reputation::new(Config::default());
        let info = reputation.score_ip("127.0.0.1".parse().unwrap()).await.unwrap();
        assert!(info.is_private);
        assert_eq!(info.score, 0);
    }

    #[tokio::test]
    async fn repeated_ip_lookup_is_cached() {
        let reputation = Reputation::new(Config::default());
        let first = reputation.score_ip("127.0.0.1".parse().unwrap()).await.unwrap();
        let second = reputation.score_ip("127.0.0.1".parse().unwrap()).await.unwrap();
        assert_eq!(first.score, second.score);
        assert_eq!(reputation.caches.ip.len(), 1);
    }
}
