//! The reputation evaluation engine: signal sources (IP/CIDR sets,
//! domain sets, a datacenter-org trie), external probes (DNS, SMTP,
//! GeoIP, breach lookup), and the scoring orchestrators that fan them
//! out per request and fold the results into a 0-100 trust score.

mod datacenter_orgs;
mod default_usernames;

pub mod cache;
pub mod config;
pub mod datasets;
pub mod email;
pub mod ip;
pub mod regexes;
pub mod request;
pub mod scheduler;
pub mod service;

pub use config::Config;
pub use email::EmailInfo;
pub use ip::{IpEvalError, IpInfo};
pub use regexes::EMAIL_ADDRESS;
pub use request::{RequestQuery, RequestResult, RequestValidationError};
pub use service::Reputation;
