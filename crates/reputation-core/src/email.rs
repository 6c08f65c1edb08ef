//! Email reputation: per-signal probes and the scoring orchestrator.
//! The three "forced to zero" gates (IANA TLD, mailbox existence, RFC
//! well-formedness) are applied after the additive stage and in that
//! exact order, so any one of them zeroes out whatever the additive
//! signals produced — this is a deliberate reproduction of the
//! reference weight table, not an implementation detail to "clean up".

use std::sync::Arc;
use std::time::Duration;

use domain_set::DomainSet;
use md5::{Digest, Md5};
use rand::RngCore;
use serde::Serialize;

use crate::config::Config;
use crate::default_usernames::DEFAULT_USERNAMES;
use crate::regexes::FREE_EMAIL_SUBDOMAINS;

#[derive(Debug, Clone, Serialize)]
pub struct EmailInfo {
    pub score: u8,
    pub is_disposal: bool,
    pub is_default_user: bool,
    pub is_free: bool,
    pub is_valid: bool,
    pub is_catch_all: bool,
    pub is_existing: bool,
    pub is_leaked: bool,
}

fn split_local_domain(email: &str) -> (&str, &str) {
    email.split_once('@').unwrap_or((email, ""))
}

pub fn is_rfc(email: &str) -> bool {
    let (local, domain) = split_local_domain(email);
    local.len() <= 64 && domain.len() <= 255
}

/// The reference service's "IANA TLD" check is, in practice, a
/// general domain-syntax validator rather than a lookup against the
/// published IANA TLD list: at least two labels, each made of valid
/// hostname characters, with an alphabetic (non-numeric-only) final
/// label.
pub fn is_iana(email: &str) -> bool {
    let (_, domain) = split_local_domain(email);
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }
    if labels.iter().any(|label| {
        label.is_empty()
            || !label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
            || label.starts_with('-')
            || label.ends_with('-')
    }) {
        return false;
    }
    let tld = labels.last().unwrap();
    !tld.is_empty() && tld.chars().all(|c| c.is_ascii_alphabetic())
}

pub fn is_default_user(email: &str) -> bool {
    let (local, _) = split_local_domain(email);
    DEFAULT_USERNAMES.contains(&local.to_lowercase().as_str())
}

pub fn is_disposal(domains: &DomainSet, email: &str) -> bool {
    let (_, domain) = split_local_domain(email);
    domains.contains(domain)
}

pub fn is_free(domains: &DomainSet, email: &str) -> bool {
    let (_, domain) = split_local_domain(email);
    domains.contains(domain) || FREE_EMAIL_SUBDOMAINS.is_match(domain)
}

fn random_local_part() -> String {
    let mut bytes = [0u8; 16];
    rand::thread_rng().fill_bytes(&mut bytes);
    let mut hasher = Md5::new();
    hasher.update(bytes);
    data_encoding::HEXLOWER.encode(&hasher.finalize())
}

pub struct EmailProbes<'a> {
    pub disposal: &'a DomainSet,
    pub free: &'a DomainSet,
    pub dns: &'a dns_probe::DnsProbe,
    pub pwned_key: Option<&'a str>,
    pub smtp_hello: Option<&'a str>,
    pub smtp_from: Option<&'a str>,
    pub http: &'a reqwest::Client,
}

const PWNED_API: &str = "https://haveibeenpwned.com/api/v3/breachedaccount/";

/// Mailbox-existence probe: resolve MX (falling back to the domain's
/// own A record), connect to port 25, HELO/MAIL FROM/RCPT TO, then
/// drop the connection. Not configured (no hello/from) ⇒ `false`,
/// matching the reference service's degrade-gracefully behavior.
pub async fn is_existing(probes: &EmailProbes<'_>, email: &str) -> bool {
    let (Some(helo), Some(from)) = (probes.smtp_hello, probes.smtp_from) else {
        return false;
    };
    let (_, domain) = split_local_domain(email);

    let host = match probes.dns.mx(domain).await {
        Ok(mx) if !mx.is_empty() => mx[0].clone(),
        _ => match probes.dns.a(domain).await {
            Ok(ips) if !ips.is_empty() => ips[0].to_string(),
            _ => return false,
        },
    };

    smtp_probe::probe_existing(&host, helo, from, email)
        .await
        .unwrap_or(false)
}

pub async fn is_catch_all(probes: &EmailProbes<'_>, email: &str) -> bool {
    let (_, domain) = split_local_domain(email);
    let random_email = format!("{}@{}", random_local_part(), domain.to_lowercase());
    is_existing(probes, &random_email).await
}

/// HaveIBeenPwned check: HTTP 200 with a non-empty body means the
/// address has appeared in a breach. Any other outcome (including no
/// key configured, which the API treats as unauthorized) degrades to
/// `false`.
pub async fn is_pwned(probes: &EmailProbes<'_>, email: &str) -> bool {
    let Some(key) = probes.pwned_key else {
        return false;
    };
    let response = match probes
        .http
        .get(format!("{PWNED_API}{email}"))
        .header("hibp-api-key", key)
        .timeout(Duration::from_secs(30))
        .send()
        .await
    {
        Ok(response) => response,
        Err(_) => return false,
    };
    if response.status() != reqwest::StatusCode::OK {
        return false;
    }
    match response.bytes().await {
        Ok(body) => !body.is_empty(),
        Err(_) => false,
    }
}

pub struct EmailService {
    datasets: Arc<crate::datasets::Datasets>,
    dns: Arc<dns_probe::DnsProbe>,
    http: reqwest::Client,
    config: Config,
}

impl EmailService {
    pub fn new(datasets: Arc<crate::datasets::Datasets>, dns: Arc<dns_probe::DnsProbe>, config: Config) -> Self {
        Self {
            datasets,
            dns,
            http: reqwest::Client::new(),
            config,
        }
    }

    pub async fn evaluate(&self, email: &str) -> EmailInfo {
        let probes = EmailProbes {
            disposal: &self.datasets.email_disposal,
            free: &self.datasets.email_free,
            dns: &self.dns,
            pwned_key: self.config.pwned_key.as_deref(),
            smtp_hello: self.config.smtp_hello.as_deref(),
            smtp_from: self.config.smtp_from.as_deref(),
            http: &self.http,
        };

        let is_disposal_ = is_disposal(probes.disposal, email);
        let is_free_ = is_free(probes.free, email);
        let is_default_user_ = is_default_user(email);
        let is_rfc_ = is_rfc(email);
        let is_iana_ = is_iana(email);

        let (is_existing_, is_pwned_, is_catch_all_) = tokio::join!(
            is_existing(&probes, email),
            is_pwned(&probes, email),
            is_catch_all(&probes, email),
        );

        let is_valid = is_rfc_ && is_iana_;

        let mut score: i32 = 80;
        score += if is_free_ { -10 } else { 10 };
        score += if is_default_user_ { -35 } else { 3 };
        score += if is_disposal_ { -45 } else { 4 };
        score += if is_catch_all_ { -30 } else { 8 };
        score += if is_pwned_ { 3 } else { -1 };

        if is_iana_ {
            score += 1;
        } else {
            score = 0;
        }
        if is_existing_ {
            score += 2;
        } else {
            score = 0;
        }
        if is_rfc_ {
            score += 1;
        } else {
            score = 0;
        }
        let score = score.clamp(0, 100) as u8;

        EmailInfo {
            score,
            is_disposal: is_disposal_,
            is_default_user: is_default_user_,
            is_free: is_free_,
            is_valid,
            is_catch_all: is_catch_all_,
            is_existing: is_existing_,
            is_leaked: is_pwned_,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rfc_length_limits_are_enforced() {
        let long_local = "a".repeat(65);
        assert!(!is_rfc(&format!("{long_local}@example.com")));
        assert!(is_rfc("short@example.com"));
    }

    #[test]
    fn iana_rejects_malformed_domains() {
        assert!(is_iana("user@example.com"));
        assert!(!is_iana("user@localhost"));
        assert!(!is_iana("user@123.456"));
        assert!(!is_iana("user@-bad.com"));
    }

    #[test]
    fn default_username_is_case_insensitive() {
        assert!(is_default_user("Admin@example.com"));
        assert!(is_default_user("POSTMASTER@example.com"));
        assert!(!is_default_user("jane.doe@example.com"));
    }

    #[test]
    fn free_domain_matches_set_or_hosted_subdomain_pattern() {
        let set = DomainSet::new("free");
        set.publish(["gmail.com"]);
        assert!(is_free(&set, "user@gmail.com"));
        assert!(is_free(&set, "user@mail.hub.pl"));
        assert!(!is_free(&set, "user@example.com"));
    }
}
