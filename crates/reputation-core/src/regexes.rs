//! Compiled-once regexes shared by the signal probes. Every pattern is
//! transcribed from the reference scoring service's own constants so
//! that the classifications line up exactly with the production
//! dataset these probes are tuned against.

use once_cell::sync::Lazy;
use regex::Regex;

pub static IS_PROXY_HOST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)proxy|sock|anon").expect("proxy hostname regex compiles"));

pub static IS_DATACENTER_HOST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)server|vps|cloud|web|hosting|virt").expect("datacenter hostname regex compiles")
});

pub static IS_VPN_HOST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)vpn|ipsec|private|ovudp|l2tp|ovtcp|sstp|expressnetw|anony|hma\.rocks|ipvanish|serverlocation\.co|world4china|safersoftware\.net|dns2use|ivacy|\.cstorm\.|cryptostorm|boxpnservers|airdns|hide\.me|privateinternetaccess|windscribe|lazerpenguin|mullvad")
        .expect("vpn hostname regex compiles")
});

pub static SEARCH_ENGINE_HOSTS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)googlebot\.com|google\.com|yandex\.com|search\.msn\.com|yahoo\.net|yahoo\.com|yahoo-net\.jp|yahoo\.co\.jp|crawl\.baidu\.com|opera-mini\.net|seznam\.cz|mail\.ru|pinterest\.com|archive\.org")
        .expect("search engine hostname regex compiles")
});

pub static SEARCH_ENGINE_ASNS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)Google|Seznam\.cz|Microsoft|Yahoo|Yandex|Opera Software|Facebook|Mail\.Ru|Apple|LinkedIn|Twitter Inc\.|Internet Archive")
        .expect("search engine asn regex compiles")
});

pub static FREE_EMAIL_SUBDOMAINS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\.hub\.pl$|\.int\.pl$").expect("free subdomain regex compiles"));

pub static EMAIL_ADDRESS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^[a-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-z0-9!#$%&'*+/=?^_`{|}~-]+)*@(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z0-9](?:[a-z0-9-]*[a-z0-9])?$",
    )
    .expect("email address regex compiles")
});

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn email_regex_accepts_and_rejects() {
        assert!(EMAIL_ADDRESS.is_match("user.name+tag@sub.example.com"));
        assert!(!EMAIL_ADDRESS.is_match("not-an-email"));
        assert!(!EMAIL_ADDRESS.is_match("@example.com"));
    }

    #[test]
    fn free_subdomain_regex_matches_known_suffixes() {
        assert!(FREE_EMAIL_SUBDOMAINS.is_match("mail.hub.pl"));
        assert!(FREE_EMAIL_SUBDOMAINS.is_match("webmail.int.pl"));
        assert!(!FREE_EMAIL_SUBDOMAINS.is_match("example.com"));
    }
}
