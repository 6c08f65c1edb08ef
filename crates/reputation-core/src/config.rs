//! Configuration with the same precedence chain as the reference
//! service: hardcoded defaults, optionally overridden by an `.env`
//! file (`config_local.env` wins over `config.env` when both exist),
//! with real process environment variables taking final precedence
//! over both.

use std::path::Path;
use thiserror::Error;

const DEFAULT_PROXY_LIST: &str = "https://get.threatbite.com/public/proxy.txt";
const DEFAULT_SPAM_LIST: &str = "https://get.threatbite.com/public/spam.txt";
const DEFAULT_VPN_LIST: &str = "https://get.threatbite.com/public/vpn.txt";
const DEFAULT_DC_LIST: &str = "https://get.threatbite.com/public/dc-names.txt";
const DEFAULT_EMAIL_DISPOSAL_LIST: &str = "https://get.threatbite.com/public/disposal.txt";
const DEFAULT_EMAIL_FREE_LIST: &str = "https://get.threatbite.com/public/free.txt";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for PORT: {0}")]
    InvalidPort(String),
    #[error("invalid list URL in {env}: {url}")]
    InvalidListUrl { env: &'static str, url: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub debug: bool,
    pub auto_tls: bool,
    pub pwned_key: Option<String>,
    pub maxmind_key: Option<String>,
    pub smtp_hello: Option<String>,
    pub smtp_from: Option<String>,
    pub proxy_list: Vec<String>,
    pub spam_list: Vec<String>,
    pub vpn_list: Vec<String>,
    pub dc_list: Vec<String>,
    pub email_disposal_list: Vec<String>,
    pub email_free_list: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            debug: false,
            auto_tls: false,
            pwned_key: None,
            maxmind_key: None,
            smtp_hello: None,
            smtp_from: None,
            proxy_list: vec![DEFAULT_PROXY_LIST.to_string()],
            spam_list: vec![DEFAULT_SPAM_LIST.to_string()],
            vpn_list: vec![DEFAULT_VPN_LIST.to_string()],
            dc_list: vec![DEFAULT_DC_LIST.to_string()],
            email_disposal_list: vec![DEFAULT_EMAIL_DISPOSAL_LIST.to_string()],
            email_free_list: vec![DEFAULT_EMAIL_FREE_LIST.to_string()],
        }
    }
}

impl Config {
    /// Loads configuration the way the reference service does:
    /// defaults, then an optional dotenv file (`config_local.env`
    /// preferred over `config.env`), then real environment variables
    /// override everything.
    pub fn load() -> Result<Self, ConfigError> {
        if Path::new("config_local.env").exists() {
            let _ = dotenvy::from_filename("config_local.env");
        } else if Path::new("config.env").exists() {
            let _ = dotenvy::from_filename("config.env");
        }
        Self::from_env()
    }

    fn from_env() -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Ok(port) = std::env::var("PORT") {
            config.port = port
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
        }

        config.debug = is_truthy("DEBUG");
        config.auto_tls = is_truthy("AUTO_TLS");

        config.pwned_key = non_empty_env("PWNED_KEY");
        config.maxmind_key = non_empty_env("MAXMIND_KEY");
        config.smtp_hello = non_empty_env("SMTP_HELLO");
        config.smtp_from = non_empty_env("SMTP_FROM");

        config.proxy_list = list_override("PROXY_LIST", config.proxy_list)?;
        config.spam_list = list_override("SPAM_LIST", config.spam_list)?;
        config.vpn_list = list_override("VPN_LIST", config.vpn_list)?;
        config.dc_list = list_override("DC_LIST", config.dc_list)?;
        config.email_disposal_list = list_override("EMAIL_DISPOSAL_LIST", config.email_disposal_list)?;
        config.email_free_list = list_override("EMAIL_FREE_LIST", config.email_free_list)?;

        Ok(config)
    }
}

fn is_truthy(name: &str) -> bool {
    matches!(std::env::var(name).as_deref(), Ok("true") | Ok("1"))
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

/// Parses a whitespace-separated list env var, validating each entry
/// as a well-formed URI; leaves `default` untouched when the variable
/// is unset or empty, matching the Go implementation's
/// wholesale-replace-or-keep-default semantics.
fn list_override(env: &'static str, default: Vec<String>) -> Result<Vec<String>, ConfigError> {
    match std::env::var(env) {
        Ok(value) if !value.is_empty() => {
            let mut urls = Vec::new();
            for url in value.split_whitespace() {
                url::Url::parse(url).map_err(|_| ConfigError::InvalidListUrl {
                    env,
                    url: url.to_string(),
                })?;
                urls.push(url.to_string());
            }
            Ok(urls)
        }
        _ => Ok(default),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::sync::Mutex;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn defaults_point_at_threatbite_public_lists() {
        let _guard = ENV_LOCK.lock().unwrap();
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.proxy_list, vec![DEFAULT_PROXY_LIST.to_string()]);
    }

    #[test]
    fn list_override_replaces_default_wholesale() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var("DC_LIST", "https://a.example/1.txt https://b.example/2.txt");
        let config = Config::from_env().unwrap();
        assert_eq!(
            config.dc_list,
            vec![
                "https://a.example/1.txt".to_string(),
                "https://b.example/2.txt".to_string()
            ]
        );
        std::env::remove_var("DC_LIST");
    }

    #[test]
    fn invalid_list_url_is_rejected() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var("VPN_LIST", "not a url");
        assert!(Config::from_env().is_err());
        std::env::remove_var("VPN_LIST");
    }
}
